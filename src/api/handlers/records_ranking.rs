use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;

use super::{AppState, RankParams, TopParams};
use crate::api::errors::ApiError;
use crate::api::models::WeeksEntry;
use crate::api::parsers::parse_int_or;
use crate::database::{self, WeeksAtRank};

fn into_entries(rows: Vec<WeeksAtRank>) -> Vec<WeeksEntry> {
    rows.into_iter()
        .map(|row| WeeksEntry {
            id: row.player_id,
            name: row.name.unwrap_or_else(|| "Unknown".to_string()),
            ioc: row.ioc,
            weeks: row.weeks,
        })
        .collect()
}

/// Weeks spent at exactly `rank` (default 1).
pub async fn get_weeks_at_rank(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RankParams>,
) -> Result<Json<Vec<WeeksEntry>>, ApiError> {
    let rank = parse_int_or(params.rank.as_deref(), 1, "rank")?;

    let rows = state
        .with_connection(move |conn, _| database::rankings::weeks_at_rank(conn, rank))
        .await?;

    Ok(Json(into_entries(rows)))
}

/// Weeks spent ranked `top` (default 2) or better.
pub async fn get_weeks_in_top(
    State(state): State<Arc<AppState>>,
    Query(params): Query<TopParams>,
) -> Result<Json<Vec<WeeksEntry>>, ApiError> {
    let top = parse_int_or(params.top.as_deref(), 2, "top")?;

    let rows = state
        .with_connection(move |conn, _| database::rankings::weeks_in_top(conn, top))
        .await?;

    Ok(Json(into_entries(rows)))
}

pub async fn end_of_season() -> StatusCode {
    StatusCode::NO_CONTENT
}
