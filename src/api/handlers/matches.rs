use axum::{
    extract::{Query, State},
    response::Json,
};
use std::sync::Arc;

use super::{AppState, PlayerMatchParams};
use crate::api::errors::ApiError;
use crate::api::models::ForecastSample;
use crate::api::parsers::{optional, required};
use crate::database::{self, Match, MatchFilter};

pub async fn get_matches(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PlayerMatchParams>,
) -> Result<Json<Vec<Match>>, ApiError> {
    let filter = MatchFilter {
        player_id: required(params.player_id.as_deref(), "player_id is required")?,
        round: optional(params.round.as_deref()),
        surface: optional(params.surface.as_deref()),
    };

    let matches = state
        .with_connection(move |conn, _| database::matches::list_for_player(conn, &filter))
        .await?;

    Ok(Json(matches))
}

pub async fn get_forecasts(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ForecastSample>>, ApiError> {
    let pairs = state
        .with_connection(|conn, config| {
            database::matches::list_recent_pairs(conn, config.limits.forecasts)
        })
        .await?;

    let samples = pairs
        .into_iter()
        .map(|pair| ForecastSample {
            player1: pair.winner_id.clone(),
            player2: pair.loser_id,
            winner: pair.winner_id,
        })
        .collect();

    Ok(Json(samples))
}
