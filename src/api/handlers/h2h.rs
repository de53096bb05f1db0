use axum::{
    extract::{Query, State},
    response::Json,
};
use std::sync::Arc;

use super::{AppState, HeadToHeadParams, OpponentParams, SearchParams};
use crate::api::errors::ApiError;
use crate::api::parsers::{optional, required};
use crate::database::{self, Match, PlayerSearchHit};

pub async fn get_head_to_head(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HeadToHeadParams>,
) -> Result<Json<Vec<Match>>, ApiError> {
    let message = "Missing player1 or player2";
    let player1 = required(params.player1.as_deref(), message)?;
    let player2 = required(params.player2.as_deref(), message)?;

    let matches = state
        .with_connection(move |conn, _| database::matches::list_between(conn, &player1, &player2))
        .await?;

    Ok(Json(matches))
}

pub async fn get_opponents(
    State(state): State<Arc<AppState>>,
    Query(params): Query<OpponentParams>,
) -> Result<Json<Vec<String>>, ApiError> {
    let player = required(params.player.as_deref(), "Player is required")?;

    let opponents = state
        .with_connection(move |conn, _| database::matches::list_opponents(conn, &player))
        .await?;

    Ok(Json(opponents))
}

pub async fn search_players(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<PlayerSearchHit>>, ApiError> {
    let Some(query) = optional(params.q.as_deref()) else {
        return Ok(Json(Vec::new()));
    };

    let hits = state
        .with_connection(move |conn, config| {
            database::players::search_by_name(conn, &query, config.limits.search)
        })
        .await?;

    Ok(Json(hits))
}
