use chrono::NaiveDate;
use serde::Serialize;

use crate::database::models::{EditionFinal, Match, RankingTableRow};
use crate::domain::{win_percentage, PlayerStats, SeasonLeader, TournamentGroups};

/// Training sample for the match forecaster: player1 always won.
#[derive(Debug, Serialize)]
pub struct ForecastSample {
    pub player1: String,
    pub player2: String,
    pub winner: String,
}

#[derive(Debug, Serialize)]
pub struct RankingDatesResponse {
    pub dates: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct RankingRow {
    pub id: String,
    pub name: String,
    pub points: i32,
    pub ioc: Option<String>,
    pub rank: i32,
}

#[derive(Debug, Serialize)]
pub struct RankingResponse {
    pub rankings: Vec<RankingRow>,
}

#[derive(Debug, Serialize)]
pub struct RankingTablesResponse {
    pub rows: Vec<RankingTableRow>,
}

#[derive(Debug, Serialize)]
pub struct RecordFiltersResponse {
    pub surfaces: Vec<String>,
    pub levels: Vec<String>,
    pub rounds: Vec<String>,
    #[serde(rename = "bestOfs")]
    pub best_ofs: Vec<i32>,
}

#[derive(Debug, Serialize)]
pub struct SurfaceLevelFilters {
    pub surfaces: Vec<String>,
    pub levels: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SeasonLeadersResponse {
    pub players: Vec<SeasonLeader>,
}

#[derive(Debug, Serialize)]
pub struct PlayerRef {
    pub id: String,
    pub name: Option<String>,
    pub ioc: String,
}

#[derive(Debug, Serialize)]
pub struct H2HSeasonEntry {
    pub year: i32,
    pub player1: PlayerRef,
    pub player2: PlayerRef,
    pub matches_played: i64,
}

#[derive(Debug, Serialize)]
pub struct H2HSeasonsResponse {
    pub h2h_season: Vec<H2HSeasonEntry>,
}

#[derive(Debug, Serialize)]
pub struct TitleEntry {
    pub id: String,
    pub name: Option<String>,
    pub ioc: String,
    pub count: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TitlesResponse {
    pub top_titles: Vec<TitleEntry>,
}

#[derive(Debug, Serialize)]
pub struct EntryRow {
    pub id: String,
    pub name: String,
    pub ioc: String,
    pub count: i64,
}

#[derive(Debug, Serialize)]
pub struct EntriesResponse {
    pub top: Vec<EntryRow>,
}

/// Flat win/loss/title breakdown of a player.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStatsResponse {
    pub wins_all: u32,
    pub wins_grand_slam: u32,
    pub wins_masters1000: u32,
    pub wins_hard: u32,
    pub wins_grass: u32,
    pub wins_clay: u32,
    pub wins_carpet: u32,
    pub total_all: u32,
    pub total_grand_slam: u32,
    pub total_masters1000: u32,
    pub total_hard: u32,
    pub total_grass: u32,
    pub total_clay: u32,
    pub total_carpet: u32,
    pub perc_all: f64,
    pub perc_grand_slam: f64,
    pub perc_masters1000: f64,
    pub perc_hard: f64,
    pub perc_grass: f64,
    pub perc_clay: f64,
    pub perc_carpet: f64,
    pub titles_all: u32,
    pub titles_grand_slam: u32,
    pub titles_masters1000: u32,
    pub titles_hard: u32,
    pub titles_grass: u32,
    pub titles_clay: u32,
    pub titles_carpet: u32,
}

impl From<PlayerStats> for PlayerStatsResponse {
    fn from(stats: PlayerStats) -> Self {
        let PlayerStats { total, wins, titles } = stats;
        Self {
            wins_all: wins.all,
            wins_grand_slam: wins.grand_slam,
            wins_masters1000: wins.masters1000,
            wins_hard: wins.hard,
            wins_grass: wins.grass,
            wins_clay: wins.clay,
            wins_carpet: wins.carpet,
            total_all: total.all,
            total_grand_slam: total.grand_slam,
            total_masters1000: total.masters1000,
            total_hard: total.hard,
            total_grass: total.grass,
            total_clay: total.clay,
            total_carpet: total.carpet,
            perc_all: win_percentage(wins.all, total.all),
            perc_grand_slam: win_percentage(wins.grand_slam, total.grand_slam),
            perc_masters1000: win_percentage(wins.masters1000, total.masters1000),
            perc_hard: win_percentage(wins.hard, total.hard),
            perc_grass: win_percentage(wins.grass, total.grass),
            perc_clay: win_percentage(wins.clay, total.clay),
            perc_carpet: win_percentage(wins.carpet, total.carpet),
            titles_all: titles.all,
            titles_grand_slam: titles.grand_slam,
            titles_masters1000: titles.masters1000,
            titles_hard: titles.hard,
            titles_grass: titles.grass,
            titles_clay: titles.clay,
            titles_carpet: titles.carpet,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct WeeksEntry {
    pub id: String,
    pub name: String,
    pub ioc: Option<String>,
    pub weeks: i64,
}

#[derive(Debug, Serialize)]
pub struct SeasonYear {
    pub year: i32,
}

#[derive(Debug, Serialize)]
pub struct EditionMatchesResponse {
    pub matches: Vec<Match>,
}

#[derive(Debug, Serialize)]
pub struct TournamentHeader {
    pub id: i64,
    pub name: String,
    pub city: Option<String>,
    pub country: Option<String>,
    pub category: Option<String>,
    pub surfaces: Vec<String>,
    pub indoor: Option<bool>,
    pub editions: Vec<i32>,
}

/// An edition final with the tournament id as a number.
#[derive(Debug, Serialize)]
pub struct EditionFinalEntry {
    pub year: Option<i32>,
    pub tourney_id: Option<i64>,
    pub tourney_date: Option<NaiveDate>,
    pub draw_size: Option<i32>,
    pub round: Option<String>,
    pub surface: Option<String>,
    pub winner_id: String,
    pub winner_name: Option<String>,
    pub winner_ioc: Option<String>,
    pub loser_id: String,
    pub loser_name: Option<String>,
    pub loser_ioc: Option<String>,
    pub score: Option<String>,
}

impl From<EditionFinal> for EditionFinalEntry {
    fn from(f: EditionFinal) -> Self {
        Self {
            year: f.year,
            tourney_id: f.tourney_id.trim().parse().ok(),
            tourney_date: f.tourney_date,
            draw_size: f.draw_size,
            round: f.round,
            surface: f.surface,
            winner_id: f.winner_id,
            winner_name: f.winner_name,
            winner_ioc: f.winner_ioc,
            loser_id: f.loser_id,
            loser_name: f.loser_name,
            loser_ioc: f.loser_ioc,
            score: f.score,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditionFinalsResponse {
    pub editions_data: Vec<EditionFinalEntry>,
}

#[derive(Debug, Serialize)]
pub struct TournamentsResponse {
    pub groups: TournamentGroups,
}
