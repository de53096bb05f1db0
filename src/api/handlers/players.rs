use axum::{
    extract::{Query, State},
    response::Json,
};
use std::sync::Arc;

use super::{AppState, IdParams, MatchSearchParams};
use crate::api::errors::ApiError;
use crate::api::models::PlayerStatsResponse;
use crate::api::parsers::{optional, required};
use crate::database::{
    self, Match, MatchSearch, MatchSide, MatchSort, Player, PlayerListing, TourneyRef,
};
use crate::domain::PlayerStats;

pub async fn get_player(
    State(state): State<Arc<AppState>>,
    Query(params): Query<IdParams>,
) -> Result<Json<Player>, ApiError> {
    let id = required(params.id.as_deref(), "Missing 'id' parameter")?;

    let player = state
        .with_connection(move |conn, _| database::players::find_by_id(conn, &id))
        .await?;

    player
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Player not found"))
}

pub async fn get_all_players(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<PlayerListing>>, ApiError> {
    let players = state
        .with_connection(|conn, _| database::players::list_all(conn))
        .await?;

    Ok(Json(players))
}

/// Every completed match of a player, for the performance charts.
pub async fn get_player_performance(
    State(state): State<Arc<AppState>>,
    Query(params): Query<IdParams>,
) -> Result<Json<Vec<Match>>, ApiError> {
    let id = required(params.id.as_deref(), "Missing 'id' parameter")?;

    let matches = state
        .with_connection(move |conn, _| database::matches::list_completed_for_player(conn, &id))
        .await?;

    Ok(Json(matches))
}

/// Wins, matches and titles of a player split by level and surface.
pub async fn get_player_stats(
    State(state): State<Arc<AppState>>,
    Query(params): Query<IdParams>,
) -> Result<Json<PlayerStatsResponse>, ApiError> {
    let id = required(params.id.as_deref(), "Player ID is required")?;

    let stats = state
        .with_connection(move |conn, _| {
            let rows = database::matches::list_results_for_player(conn, &id)?;
            Ok(PlayerStats::tally(&id, &rows))
        })
        .await?;

    Ok(Json(stats.into()))
}

/// Completed matches of one player, or between two, with optional filters.
pub async fn get_player_matches(
    State(state): State<Arc<AppState>>,
    Query(params): Query<MatchSearchParams>,
) -> Result<Json<Vec<Match>>, ApiError> {
    let search = match_search(params)?;

    let matches = state
        .with_connection(move |conn, _| database::matches::search(conn, &search))
        .await?;

    Ok(Json(matches))
}

fn match_search(params: MatchSearchParams) -> Result<MatchSearch, ApiError> {
    let side = match (
        optional(params.player1.as_deref()),
        optional(params.player2.as_deref()),
        optional(params.id.as_deref()),
    ) {
        (Some(player1), Some(player2), _) => MatchSide::Pair(player1, player2),
        (_, _, Some(id)) => MatchSide::Player {
            id,
            opponent: optional(params.opponent.as_deref()),
        },
        _ => {
            return Err(ApiError::bad_request(
                "Missing 'id' or 'player1' and 'player2' parameters",
            ))
        }
    };

    let year = optional(params.year.as_deref())
        .map(|y| y.parse::<i32>())
        .transpose()
        .map_err(|_| ApiError::bad_request("Invalid 'year' parameter"))?;

    let tourney = optional(params.tourney.as_deref()).map(|t| {
        if t.parse::<i64>().is_ok() {
            TourneyRef::Id(t)
        } else {
            TourneyRef::Name(t)
        }
    });

    let sort = match optional(params.sort.as_deref()) {
        None => MatchSort::TourneyDate,
        Some(raw) => MatchSort::parse(&raw)
            .ok_or_else(|| ApiError::bad_request("Invalid 'sort' parameter"))?,
    };
    let descending = !optional(params.sort_dir.as_deref())
        .is_some_and(|dir| dir.eq_ignore_ascii_case("asc"));

    Ok(MatchSearch {
        side,
        year,
        level: optional(params.level.as_deref()),
        surface: optional(params.surface.as_deref()),
        round: optional(params.round.as_deref()),
        tourney,
        sort,
        descending,
    })
}
