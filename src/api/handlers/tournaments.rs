use axum::{
    extract::{Path, State},
    response::Json,
};
use std::sync::Arc;

use super::AppState;
use crate::api::errors::ApiError;
use crate::api::models::{
    EditionFinalEntry, EditionFinalsResponse, EditionMatchesResponse, TournamentHeader,
    TournamentsResponse,
};
use crate::database;
use crate::domain::{group_tournaments, sort_by_round};

/// Tourney ids whose finals are shown together. The 1977 Australian Open was
/// played twice and the December edition has its own id.
fn linked_tourney_ids(id: i64) -> Vec<String> {
    match id {
        580 => vec!["580".to_string(), "581".to_string()],
        _ => vec![id.to_string()],
    }
}

fn parse_tournament_id(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

pub async fn get_tournaments(
    State(state): State<Arc<AppState>>,
) -> Result<Json<TournamentsResponse>, ApiError> {
    let tournaments = state
        .with_connection(|conn, _| database::tournaments::list_all(conn))
        .await?;

    Ok(Json(TournamentsResponse {
        groups: group_tournaments(tournaments),
    }))
}

/// Every match of one edition, first round first.
pub async fn get_edition_matches(
    State(state): State<Arc<AppState>>,
    Path((id, year)): Path<(String, String)>,
) -> Result<Json<EditionMatchesResponse>, ApiError> {
    let year: i32 = match (parse_tournament_id(&id), year.trim().parse()) {
        (Some(_), Ok(year)) => year,
        _ => return Err(ApiError::bad_request("Invalid params")),
    };
    let tourney_id = id.trim().to_string();

    let mut matches = state
        .with_connection(move |conn, _| database::matches::list_for_edition(conn, &tourney_id, year))
        .await?;
    sort_by_round(&mut matches, |m| m.round.as_deref());

    Ok(Json(EditionMatchesResponse { matches }))
}

pub async fn get_tournament_header(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<TournamentHeader>, ApiError> {
    let id = parse_tournament_id(&id).ok_or_else(|| ApiError::bad_request("Invalid tournament ID"))?;

    let found = state
        .with_connection(move |conn, _| {
            let Some(tournament) = database::tournaments::find_by_id(conn, id)? else {
                return Ok(None);
            };
            let editions = database::matches::list_edition_years(conn, &id.to_string())?;
            Ok(Some((tournament, editions)))
        })
        .await?;

    let (tournament, editions) = found.ok_or_else(|| ApiError::not_found("Tournament not found"))?;

    Ok(Json(TournamentHeader {
        id: tournament.id,
        name: tournament.name,
        city: tournament.city,
        country: tournament.country,
        category: tournament.category,
        surfaces: tournament.surfaces,
        indoor: tournament.indoor,
        editions,
    }))
}

/// Finals of every edition, most recent first.
pub async fn get_tournament_editions(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<EditionFinalsResponse>, ApiError> {
    let id = parse_tournament_id(&id).ok_or_else(|| ApiError::bad_request("Invalid tournament ID"))?;
    let tourney_ids = linked_tourney_ids(id);

    let finals = state
        .with_connection(move |conn, _| database::matches::list_finals(conn, &tourney_ids))
        .await?;

    Ok(Json(EditionFinalsResponse {
        editions_data: finals.into_iter().map(EditionFinalEntry::from).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_australian_open_includes_december_edition() {
        assert_eq!(linked_tourney_ids(580), vec!["580", "581"]);
        assert_eq!(linked_tourney_ids(520), vec!["520"]);
    }

    #[test]
    fn test_tournament_id_must_be_an_integer() {
        assert_eq!(parse_tournament_id(" 580 "), Some(580));
        assert_eq!(parse_tournament_id("wimbledon"), None);
        assert_eq!(parse_tournament_id(""), None);
    }
}
