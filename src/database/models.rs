use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Player {
    pub id: String,
    pub player: Option<String>,
    pub atpname: Option<String>,
    pub coaches: Option<String>,
    pub ioc: Option<String>,
    pub hand: Option<String>,
    pub backhand: Option<String>,
    pub birthdate: Option<NaiveDate>,
    pub birthplace: Option<String>,
    pub height: Option<i32>,
    pub weight: Option<i32>,
    pub turnedpro: Option<i32>,
}

/// Player row as listed on the players index.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerListing {
    pub id: String,
    pub atpname: Option<String>,
    pub coaches: Option<String>,
    pub ioc: Option<String>,
    pub hand: Option<String>,
    pub birthdate: Option<NaiveDate>,
    pub height: Option<i32>,
    pub weight: Option<i32>,
    pub turnedpro: Option<i32>,
    pub backhand: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerSearchHit {
    pub id: String,
    pub atpname: Option<String>,
    pub ioc: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Match {
    pub id: i64,
    pub tourney_id: String,
    pub tourney_name: Option<String>,
    pub surface: Option<String>,
    pub draw_size: Option<i32>,
    pub tourney_level: Option<String>,
    pub tourney_date: Option<NaiveDate>,
    pub year: Option<i32>,
    pub event_id: Option<String>,
    pub match_num: Option<i32>,
    pub winner_id: String,
    pub winner_seed: Option<i32>,
    pub winner_entry: Option<String>,
    pub winner_name: Option<String>,
    pub winner_hand: Option<String>,
    pub winner_ht: Option<i32>,
    pub winner_ioc: Option<String>,
    pub winner_age: Option<f64>,
    pub winner_rank: Option<i32>,
    pub winner_rank_points: Option<i32>,
    pub loser_id: String,
    pub loser_seed: Option<i32>,
    pub loser_entry: Option<String>,
    pub loser_name: Option<String>,
    pub loser_hand: Option<String>,
    pub loser_ht: Option<i32>,
    pub loser_ioc: Option<String>,
    pub loser_age: Option<f64>,
    pub loser_rank: Option<i32>,
    pub loser_rank_points: Option<i32>,
    pub score: Option<String>,
    pub best_of: Option<i32>,
    pub round: Option<String>,
    pub minutes: Option<i32>,
    pub status: bool,
    pub team_event: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchPair {
    pub winner_id: String,
    pub loser_id: String,
}

/// Final of one tournament edition.
#[derive(Debug, Clone, Serialize)]
pub struct EditionFinal {
    pub year: Option<i32>,
    pub tourney_id: String,
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

/// One player appearing in one season, used for season records.
#[derive(Debug, Clone)]
pub struct SeasonOccurrence {
    pub player_id: String,
    pub name: Option<String>,
    pub ioc: Option<String>,
    pub year: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct TitleCount {
    pub player_id: String,
    pub name: Option<String>,
    pub ioc: Option<String>,
    pub count: i64,
}

/// Optional surface/level restriction shared by record queries.
#[derive(Debug, Clone, Default)]
pub struct RecordFilter {
    pub surfaces: Vec<String>,
    pub levels: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct MatchFilter {
    pub player_id: String,
    pub round: Option<String>,
    pub surface: Option<String>,
}

#[derive(Debug, Clone)]
pub struct RankingEntry {
    pub player_id: String,
    pub name: Option<String>,
    pub ioc: Option<String>,
    pub points: i32,
    pub rank: i32,
}

#[derive(Debug, Clone)]
pub struct WeeksAtRank {
    pub player_id: String,
    pub name: Option<String>,
    pub ioc: Option<String>,
    pub weeks: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Tournament {
    pub id: i64,
    pub name: String,
    pub slug: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub ioc: Option<String>,
    pub category: Option<String>,
    pub surfaces: Vec<String>,
    pub indoor: Option<bool>,
    pub website: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RankingTableRow {
    pub year: String,
    pub tournament: String,
    pub tourney_id: Option<String>,
    pub tourney_date: Option<String>,
    pub prize_money: Option<String>,
    pub atp_category: Option<String>,
}

#[derive(Debug, Clone)]
pub struct H2HSeasonRow {
    pub year: i32,
    pub player_1_id: String,
    pub player_1_name: Option<String>,
    pub player_1_ioc: Option<String>,
    pub player_2_id: String,
    pub player_2_name: Option<String>,
    pub player_2_ioc: Option<String>,
    pub matches_played: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerTournament {
    pub event_id: String,
    pub tourney_name: Option<String>,
    pub year: Option<i32>,
    pub surface: Option<String>,
    pub tourney_level: Option<String>,
}

/// Match of a season as shown on the season overview.
#[derive(Debug, Clone)]
pub struct SeasonMatch {
    pub tourney_id: String,
    pub tourney_name: Option<String>,
    pub tourney_date: Option<NaiveDate>,
    pub tourney_level: Option<String>,
    pub surface: Option<String>,
    pub draw_size: Option<i32>,
    pub round: Option<String>,
    pub score: Option<String>,
    pub winner_name: Option<String>,
    pub winner_ioc: Option<String>,
    pub loser_name: Option<String>,
    pub loser_ioc: Option<String>,
}

/// The parts of a match needed for a player's win/loss breakdown.
#[derive(Debug, Clone)]
pub struct ResultRow {
    pub winner_id: String,
    pub tourney_name: Option<String>,
    pub tourney_level: Option<String>,
    pub surface: Option<String>,
    pub round: Option<String>,
}

/// Restriction on tournament entries; empty lists and `None` match everything.
#[derive(Debug, Clone, Default)]
pub struct EntryFilter {
    pub round: Option<String>,
    pub surfaces: Vec<String>,
    pub levels: Vec<String>,
    pub best_ofs: Vec<i64>,
}

#[derive(Debug, Clone)]
pub struct EntryCount {
    pub player_id: String,
    pub name: Option<String>,
    pub ioc: Option<String>,
    pub count: i64,
}

/// Whose matches a match search returns.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchSide {
    /// Every match of one player, optionally only against a named opponent.
    Player { id: String, opponent: Option<String> },
    /// Matches between two players.
    Pair(String, String),
}

/// A tournament given either by id or by name.
#[derive(Debug, Clone, PartialEq)]
pub enum TourneyRef {
    Id(String),
    Name(String),
}

/// Columns a match search may be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchSort {
    TourneyDate,
    Year,
    TourneyName,
    Level,
    Surface,
    Round,
    Minutes,
}

impl MatchSort {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "tourney_date" => Some(MatchSort::TourneyDate),
            "year" => Some(MatchSort::Year),
            "tourney_name" => Some(MatchSort::TourneyName),
            "tourney_level" => Some(MatchSort::Level),
            "surface" => Some(MatchSort::Surface),
            "round" => Some(MatchSort::Round),
            "minutes" => Some(MatchSort::Minutes),
            _ => None,
        }
    }

    pub fn column(self) -> &'static str {
        match self {
            MatchSort::TourneyDate => "tourney_date",
            MatchSort::Year => "year",
            MatchSort::TourneyName => "tourney_name",
            MatchSort::Level => "tourney_level",
            MatchSort::Surface => "surface",
            MatchSort::Round => "round",
            MatchSort::Minutes => "minutes",
        }
    }
}

/// Completed matches of a player or a pair, with optional exact filters.
#[derive(Debug, Clone)]
pub struct MatchSearch {
    pub side: MatchSide,
    pub year: Option<i32>,
    pub level: Option<String>,
    pub surface: Option<String>,
    pub round: Option<String>,
    pub tourney: Option<TourneyRef>,
    pub sort: MatchSort,
    pub descending: bool,
}
