use axum::{routing::get, Router};
use std::sync::Arc;

use crate::api::handlers::{
    h2h::{get_head_to_head, get_opponents, search_players},
    matches::{get_forecasts, get_matches},
    players::{
        get_all_players, get_player, get_player_matches, get_player_performance, get_player_stats,
    },
    ranking::{get_ranking, get_ranking_dates, get_ranking_tables},
    records::{
        get_counter_season_filters, get_counter_season_rounds, get_counter_season_titles,
        get_entries, get_h2h_seasons, get_least_filters, get_streak_tournaments, get_timespan,
        get_titles,
    },
    records_ranking::{end_of_season, get_weeks_at_rank, get_weeks_in_top},
    seasons::{get_season, get_season_ages},
    tournaments::{
        get_edition_matches, get_tournament_editions, get_tournament_header, get_tournaments,
    },
    AppState,
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/forecasts", get(get_forecasts))
        .route("/api/matches", get(get_matches))
        .route("/api/h2h", get(get_head_to_head))
        .route("/api/h2h/opponents", get(get_opponents))
        .route("/api/h2h/search", get(search_players))
        .route("/api/players", get(get_player))
        .route("/api/players/allplayers", get(get_all_players))
        .route("/api/players/h2h", get(get_player_matches))
        .route("/api/players/performance", get(get_player_performance))
        .route("/api/players/stats", get(get_player_stats))
        .route("/api/ranking", get(get_ranking))
        .route("/api/ranking/dates", get(get_ranking_dates))
        .route("/api/rankingtables", get(get_ranking_tables))
        .route("/api/records/count", get(get_entries))
        .route("/api/records/counterseasons", get(get_counter_season_filters))
        .route("/api/records/counterseasons/titles", get(get_counter_season_titles))
        .route("/api/records/counterseasons/rounds", get(get_counter_season_rounds))
        .route("/api/records/h2h/seasons", get(get_h2h_seasons))
        .route("/api/records/least", get(get_least_filters))
        .route("/api/records/streak/streaktournaments", get(get_streak_tournaments))
        .route("/api/records/timespan", get(get_timespan))
        .route("/api/records/titles", get(get_titles))
        .route("/api/recordsranking/count", get(get_weeks_at_rank))
        .route("/api/recordsranking/top", get(get_weeks_in_top))
        .route(
            "/api/recordsranking/endofseason",
            get(end_of_season).post(end_of_season),
        )
        .route("/api/seasons/:year", get(get_season))
        .route("/api/seasons/:year/records/ages", get(get_season_ages))
        .route("/api/tournaments", get(get_tournaments))
        .route("/api/tournaments/:id", get(get_tournament_editions))
        .route("/api/tournaments/:id/header", get(get_tournament_header))
        .route("/api/tournaments/:id/:year", get(get_edition_matches))
        .with_state(state)
}
