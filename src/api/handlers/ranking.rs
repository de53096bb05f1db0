use axum::{
    extract::{Query, State},
    response::Json,
};
use chrono::{DateTime, NaiveDate};
use std::sync::Arc;

use super::{AppState, RankingParams, YearParams};
use crate::api::errors::ApiError;
use crate::api::models::{RankingDatesResponse, RankingResponse, RankingRow, RankingTablesResponse};
use crate::api::parsers::{optional, required};
use crate::database;

pub async fn get_ranking_dates(
    State(state): State<Arc<AppState>>,
) -> Result<Json<RankingDatesResponse>, ApiError> {
    let dates = state
        .with_connection(|conn, _| database::rankings::list_dates(conn))
        .await?;

    Ok(Json(RankingDatesResponse {
        dates: dates.iter().map(NaiveDate::to_string).collect(),
    }))
}

/// Top of the ranking on a snapshot date, or on the latest one when no date
/// is given.
pub async fn get_ranking(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RankingParams>,
) -> Result<Json<RankingResponse>, ApiError> {
    let requested = optional(params.date.as_deref())
        .map(|raw| parse_snapshot_date(&raw))
        .transpose()?;

    let entries = state
        .with_connection(move |conn, config| {
            let date = match requested {
                Some(date) => Some(date),
                None => database::rankings::latest_date(conn)?,
            };
            match date {
                Some(date) => database::rankings::list_for_date(conn, date, config.limits.ranking),
                None => Ok(Vec::new()),
            }
        })
        .await?;

    let rankings = entries
        .into_iter()
        .map(|entry| RankingRow {
            id: entry.player_id,
            name: entry.name.unwrap_or_else(|| "Unknown".to_string()),
            points: entry.points,
            ioc: entry.ioc,
            rank: entry.rank,
        })
        .collect();

    Ok(Json(RankingResponse { rankings }))
}

pub async fn get_ranking_tables(
    State(state): State<Arc<AppState>>,
    Query(params): Query<YearParams>,
) -> Result<Json<RankingTablesResponse>, ApiError> {
    let year = required(params.year.as_deref(), "Missing 'year' query param")?;

    let rows = state
        .with_connection(move |conn, _| database::records::list_ranking_tables(conn, &year))
        .await?;

    Ok(Json(RankingTablesResponse { rows }))
}

fn parse_snapshot_date(raw: &str) -> Result<NaiveDate, ApiError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(raw).map(|dt| dt.date_naive()))
        .map_err(|_| ApiError::bad_request("Invalid 'date' parameter"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_date_accepts_iso_forms() {
        let expected = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();

        assert_eq!(parse_snapshot_date("2024-06-10").unwrap(), expected);
        assert_eq!(parse_snapshot_date("2024-06-10T00:00:00Z").unwrap(), expected);
        assert!(matches!(parse_snapshot_date("10/06/2024"), Err(ApiError::BadRequest(_))));
    }
}
