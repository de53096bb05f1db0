use axum::{
    extract::{Path, State},
    response::Json,
};
use std::sync::Arc;

use super::AppState;
use crate::api::errors::ApiError;
use crate::api::models::SeasonYear;
use crate::database;
use crate::domain::{season_tournaments, SeasonTournament};

fn parse_year(raw: &str) -> Result<i32, ApiError> {
    raw.trim()
        .parse()
        .map_err(|_| ApiError::bad_request("Invalid year parameter"))
}

/// Every individual tournament of a season with its final, in calendar order.
pub async fn get_season(
    State(state): State<Arc<AppState>>,
    Path(year): Path<String>,
) -> Result<Json<Vec<SeasonTournament>>, ApiError> {
    let year = parse_year(&year)?;

    let matches = state
        .with_connection(move |conn, _| database::matches::list_for_season(conn, year))
        .await?;

    Ok(Json(season_tournaments(matches)))
}

/// Season age records are not computed yet; echoes the validated year.
pub async fn get_season_ages(Path(year): Path<String>) -> Result<Json<SeasonYear>, ApiError> {
    let year = parse_year(&year)?;

    Ok(Json(SeasonYear { year }))
}
