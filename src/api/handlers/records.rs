use axum::{
    extract::{Query, State},
    response::Json,
};
use serde_json::{json, Value};
use std::sync::Arc;

use super::{AppState, StreakParams};
use crate::api::errors::ApiError;
use crate::api::models::{
    EntriesResponse, EntryRow, H2HSeasonEntry, H2HSeasonsResponse, PlayerRef,
    RecordFiltersResponse, SeasonLeadersResponse, SurfaceLevelFilters, TitleEntry, TitlesResponse,
};
use crate::api::parsers::{optional, parse_int_or, QueryPairs};
use crate::database::{
    self, matches::MatchColumn, EntryFilter, PlayerTournament, RecordFilter, SeasonOccurrence,
};
use crate::domain::SeasonCounter;

fn record_filter(query: &QueryPairs) -> RecordFilter {
    RecordFilter {
        surfaces: query.all("surface"),
        levels: query.all("level"),
    }
}

/// Minimum per-season count, never below one.
fn season_threshold(query: &QueryPairs, key: &str) -> Result<u32, ApiError> {
    let min = parse_int_or(query.first(key), 1, key)?;
    Ok(min.max(1) as u32)
}

fn count_seasons(
    mut counter: SeasonCounter,
    occurrences: Vec<SeasonOccurrence>,
    min_per_season: u32,
) -> SeasonLeadersResponse {
    for o in &occurrences {
        counter.record(&o.player_id, o.name.as_deref(), o.ioc.as_deref(), o.year);
    }

    SeasonLeadersResponse {
        players: counter.into_leaders(min_per_season),
    }
}

pub async fn get_counter_season_filters(
    State(state): State<Arc<AppState>>,
) -> Result<Json<RecordFiltersResponse>, ApiError> {
    let filters = state
        .with_connection(|conn, _| {
            Ok(RecordFiltersResponse {
                surfaces: database::matches::distinct_values(conn, MatchColumn::Surface)?,
                levels: database::matches::distinct_values(conn, MatchColumn::Level)?,
                rounds: database::matches::distinct_values(conn, MatchColumn::Round)?,
                best_ofs: database::matches::distinct_best_of(conn)?,
            })
        })
        .await?;

    Ok(Json(filters))
}

/// Players with the most seasons reaching `minTitlesPerSeason` titles.
pub async fn get_counter_season_titles(
    State(state): State<Arc<AppState>>,
    Query(query): Query<QueryPairs>,
) -> Result<Json<SeasonLeadersResponse>, ApiError> {
    let min = season_threshold(&query, "minTitlesPerSeason")?;
    let filter = record_filter(&query);

    let winners = state
        .with_connection(move |conn, _| database::matches::list_title_winners(conn, &filter))
        .await?;

    Ok(Json(count_seasons(SeasonCounter::new(), winners, min)))
}

/// Players with the most seasons reaching `min` appearances in a round.
pub async fn get_counter_season_rounds(
    State(state): State<Arc<AppState>>,
    Query(query): Query<QueryPairs>,
) -> Result<Json<SeasonLeadersResponse>, ApiError> {
    let min = season_threshold(&query, "min")?;
    let filter = record_filter(&query);
    let round = optional(query.first("round"));

    let appearances = state
        .with_connection(move |conn, _| {
            database::matches::list_round_appearances(conn, &filter, round.as_deref())
        })
        .await?;

    let counter = SeasonCounter::new().skip_unnamed();
    Ok(Json(count_seasons(counter, appearances, min)))
}

pub async fn get_h2h_seasons(
    State(state): State<Arc<AppState>>,
) -> Result<Json<H2HSeasonsResponse>, ApiError> {
    let rows = state
        .with_connection(|conn, config| {
            database::records::list_h2h_seasons(conn, config.limits.h2h_seasons)
        })
        .await?;

    let h2h_season = rows
        .into_iter()
        .map(|row| H2HSeasonEntry {
            year: row.year,
            player1: PlayerRef {
                id: row.player_1_id,
                name: row.player_1_name,
                ioc: row.player_1_ioc.unwrap_or_default(),
            },
            player2: PlayerRef {
                id: row.player_2_id,
                name: row.player_2_name,
                ioc: row.player_2_ioc.unwrap_or_default(),
            },
            matches_played: row.matches_played,
        })
        .collect();

    Ok(Json(H2HSeasonsResponse { h2h_season }))
}

pub async fn get_least_filters(
    State(state): State<Arc<AppState>>,
) -> Result<Json<SurfaceLevelFilters>, ApiError> {
    let filters = state
        .with_connection(|conn, _| {
            Ok(SurfaceLevelFilters {
                surfaces: database::matches::distinct_values(conn, MatchColumn::Surface)?,
                levels: database::matches::distinct_values(conn, MatchColumn::Level)?,
            })
        })
        .await?;

    Ok(Json(filters))
}

pub async fn get_streak_tournaments(
    State(state): State<Arc<AppState>>,
    Query(params): Query<StreakParams>,
) -> Result<Json<Vec<PlayerTournament>>, ApiError> {
    let player_id = optional(params.player_id.as_deref());
    let event_ids = optional(params.event_ids.as_deref()).map(|raw| split_event_ids(&raw));

    let (Some(player_id), Some(event_ids)) = (player_id, event_ids) else {
        return Err(ApiError::bad_request("Missing player_id or event_ids"));
    };
    if event_ids.is_empty() {
        return Err(ApiError::bad_request("Missing player_id or event_ids"));
    }

    let tournaments = state
        .with_connection(move |conn, _| {
            database::records::list_player_tournaments(conn, &player_id, &event_ids)
        })
        .await?;

    Ok(Json(tournaments))
}

fn split_event_ids(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect()
}

/// Non-numeric `bestOf` values are ignored.
fn entry_filter(query: &QueryPairs) -> EntryFilter {
    EntryFilter {
        round: optional(query.first("round")),
        surfaces: query.all("surface"),
        levels: query.all("level"),
        best_ofs: query
            .all("bestOf")
            .iter()
            .filter_map(|v| v.trim().parse().ok())
            .collect(),
    }
}

/// Players with the most tournament entries, or the most events in which
/// they reached `round`.
pub async fn get_entries(
    State(state): State<Arc<AppState>>,
    Query(query): Query<QueryPairs>,
) -> Result<Json<EntriesResponse>, ApiError> {
    let filter = entry_filter(&query);

    let counts = state
        .with_connection(move |conn, config| {
            database::records::count_entries(conn, &filter, config.limits.entries)
        })
        .await?;

    let top = counts
        .into_iter()
        .map(|c| EntryRow {
            id: c.player_id,
            name: c
                .name
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| "Unknown".to_string()),
            ioc: c.ioc.unwrap_or_default(),
            count: c.count,
        })
        .collect();

    Ok(Json(EntriesResponse { top }))
}

/// Placeholder kept for the front end; always an empty object.
pub async fn get_timespan() -> Json<Value> {
    Json(json!({}))
}

pub async fn get_titles(
    State(state): State<Arc<AppState>>,
    Query(query): Query<QueryPairs>,
) -> Result<Json<TitlesResponse>, ApiError> {
    let filter = record_filter(&query);

    let counts = state
        .with_connection(move |conn, config| {
            database::matches::count_titles(conn, &filter, config.limits.titles)
        })
        .await?;

    let top_titles = counts
        .into_iter()
        .map(|t| TitleEntry {
            id: t.player_id,
            name: t.name,
            ioc: t.ioc.unwrap_or_default(),
            count: t.count,
        })
        .collect();

    Ok(Json(TitlesResponse { top_titles }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_ids_are_split_and_trimmed() {
        assert_eq!(split_event_ids("2019-580, 2020-580,,"), vec!["2019-580", "2020-580"]);
        assert!(split_event_ids(" , ").is_empty());
    }

    #[test]
    fn test_entry_filter_skips_unparseable_best_of() {
        let query: QueryPairs = vec![
            ("bestOf".to_string(), "5".to_string()),
            ("bestOf".to_string(), "five".to_string()),
            ("surface".to_string(), "Clay".to_string()),
            ("round".to_string(), "F".to_string()),
        ]
        .into();

        let filter = entry_filter(&query);

        assert_eq!(filter.best_ofs, vec![5]);
        assert_eq!(filter.surfaces, vec!["Clay"]);
        assert_eq!(filter.round.as_deref(), Some("F"));
        assert!(filter.levels.is_empty());
    }

    #[test]
    fn test_season_threshold_is_at_least_one() {
        let query: QueryPairs = vec![("min".to_string(), "-3".to_string())].into();

        assert_eq!(season_threshold(&query, "min").unwrap(), 1);
        assert_eq!(season_threshold(&QueryPairs::default(), "min").unwrap(), 1);
    }

    #[test]
    fn test_seasons_below_threshold_are_dropped() {
        let occurrence = |id: &str, year: i32| SeasonOccurrence {
            player_id: id.to_string(),
            name: Some(format!("Player {id}")),
            ioc: Some("ITA".to_string()),
            year: Some(year),
        };
        let rows = vec![
            occurrence("a", 2020),
            occurrence("a", 2020),
            occurrence("a", 2021),
            occurrence("b", 2020),
        ];

        let response = count_seasons(SeasonCounter::new(), rows, 2);

        assert_eq!(response.players.len(), 1);
        assert_eq!(response.players[0].id, "a");
        assert_eq!(response.players[0].seasons_list, vec!["2020"]);
    }
}
