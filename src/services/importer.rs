use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::ValueEnum;
use log::{info, warn};
use regex::Regex;
use rusqlite::Connection;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::path::{Path, PathBuf};

use crate::config::settings::AppConfig;
use crate::database::{self, setup::ensure_schema, DbPool, Match, Player, RankingTableRow, Tournament};
use crate::domain::scores::has_incomplete_marker;

/// Source datasets accepted by `import`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Dataset {
    Players,
    Matches,
    Rankings,
    Tournaments,
    RankingTables,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct ImportSummary {
    pub inserted: usize,
    pub skipped: usize,
}

pub struct ImportService {
    pool: DbPool,
    config: AppConfig,
}

impl ImportService {
    pub fn new(config: AppConfig) -> Result<Self> {
        let pool = database::create_pool(&config.database.path, config.database.max_connections)?;
        {
            let conn = database::get_connection(&pool)?;
            ensure_schema(&conn)?;
        }
        Ok(Self { pool, config })
    }

    /// Replaces every row of `dataset` with the contents of `path` in one
    /// transaction.
    pub fn run(&self, dataset: Dataset, path: &Path) -> Result<ImportSummary> {
        info!("=== Importing {:?} from {} ===", dataset, path.display());

        let mut conn = database::get_connection(&self.pool)?;
        let tx = conn.transaction().context("Failed to start import transaction")?;

        let summary = match dataset {
            Dataset::Players => import_players(&tx, path)?,
            Dataset::Matches => import_matches(&tx, path)?,
            Dataset::Rankings => import_rankings(&tx, path, self.config.import.ranking_depth)?,
            Dataset::Tournaments => import_tournaments(&tx, path)?,
            Dataset::RankingTables => import_ranking_tables(&tx, path)?,
        };

        tx.commit().context("Failed to commit import")?;

        info!(
            "=== Import complete: {} rows inserted, {} skipped ===",
            summary.inserted, summary.skipped
        );
        Ok(summary)
    }
}

fn normalize_header(header: &str) -> String {
    header
        .replace('\u{a0}', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .to_lowercase()
}

fn open_csv(path: &Path) -> Result<csv::Reader<File>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;

    let headers: csv::StringRecord = reader
        .headers()
        .with_context(|| format!("Failed to read header of {}", path.display()))?
        .iter()
        .map(normalize_header)
        .collect();
    reader.set_headers(headers);

    Ok(reader)
}

/// Deserializes every row, skipping the malformed ones with a warning.
fn read_records<T: DeserializeOwned>(path: &Path, summary: &mut ImportSummary) -> Result<Vec<T>> {
    let mut reader = open_csv(path)?;
    let mut records = Vec::new();

    for (idx, result) in reader.deserialize::<T>().enumerate() {
        match result {
            Ok(record) => records.push(record),
            Err(e) => {
                warn!("{}: skipping row {}: {}", path.display(), idx + 2, e);
                summary.skipped += 1;
            }
        }
    }

    Ok(records)
}

fn clean(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.replace('"', "").trim().to_string())
        .filter(|v| !v.is_empty() && v != "NA")
}

/// Accepts `YYYYMMDD` as well as ISO dates.
fn parse_compact_date(value: Option<&str>) -> Option<NaiveDate> {
    let value = value?.trim();
    let value = value.split('.').next().unwrap_or(value);
    NaiveDate::parse_from_str(value, "%Y%m%d")
        .or_else(|_| NaiveDate::parse_from_str(value, "%Y-%m-%d"))
        .ok()
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "t" | "yes" => Some(true),
        "0" | "false" | "f" | "no" => Some(false),
        _ => None,
    }
}

/// Lenient integer: "12", "12.0" and " 12 " all parse, anything else is None.
fn parse_int(value: Option<&str>) -> Option<i32> {
    let value = value?.trim();
    value
        .parse::<i32>()
        .ok()
        .or_else(|| value.parse::<f64>().ok().filter(|v| v.is_finite()).map(|v| v as i32))
}

fn parse_float(value: Option<&str>) -> Option<f64> {
    value?.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PlayerRecord {
    id: Option<String>,
    player: Option<String>,
    atpname: Option<String>,
    coaches: Option<String>,
    ioc: Option<String>,
    hand: Option<String>,
    backhand: Option<String>,
    birthdate: Option<String>,
    birthplace: Option<String>,
    height: Option<String>,
    weight: Option<String>,
    turnedpro: Option<String>,
}

fn import_players(conn: &Connection, path: &Path) -> Result<ImportSummary> {
    let mut summary = ImportSummary::default();
    let records: Vec<PlayerRecord> = read_records(path, &mut summary)?;

    let removed = database::players::delete_all(conn)?;
    info!("Removed {} existing players", removed);

    for (idx, record) in records.into_iter().enumerate() {
        let id = clean(record.id).unwrap_or_else(|| format!("P{:04}", idx + 1));
        let player = Player {
            id,
            player: clean(record.player),
            atpname: clean(record.atpname),
            coaches: clean(record.coaches),
            ioc: clean(record.ioc),
            hand: clean(record.hand),
            backhand: clean(record.backhand),
            birthdate: parse_compact_date(record.birthdate.as_deref()),
            birthplace: clean(record.birthplace),
            height: parse_int(record.height.as_deref()),
            weight: parse_int(record.weight.as_deref()),
            turnedpro: parse_int(record.turnedpro.as_deref()),
        };
        database::players::insert_player(conn, &player)?;
        summary.inserted += 1;
    }

    info!("Imported {} players", summary.inserted);
    Ok(summary)
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct MatchRecord {
    tourney_id: Option<String>,
    tourney_name: Option<String>,
    surface: Option<String>,
    draw_size: Option<String>,
    tourney_level: Option<String>,
    tourney_date: Option<String>,
    year: Option<String>,
    event_id: Option<String>,
    match_num: Option<String>,
    winner_id: Option<String>,
    winner_seed: Option<String>,
    winner_entry: Option<String>,
    winner_name: Option<String>,
    winner_hand: Option<String>,
    winner_ht: Option<String>,
    winner_ioc: Option<String>,
    winner_age: Option<String>,
    winner_rank: Option<String>,
    winner_rank_points: Option<String>,
    loser_id: Option<String>,
    loser_seed: Option<String>,
    loser_entry: Option<String>,
    loser_name: Option<String>,
    loser_hand: Option<String>,
    loser_ht: Option<String>,
    loser_ioc: Option<String>,
    loser_age: Option<String>,
    loser_rank: Option<String>,
    loser_rank_points: Option<String>,
    score: Option<String>,
    best_of: Option<String>,
    round: Option<String>,
    minutes: Option<String>,
    status: Option<String>,
    team_event: Option<String>,
}

impl MatchRecord {
    /// None when the row lacks a tournament or either player.
    fn into_match(self) -> Option<Match> {
        let tourney_id = clean(self.tourney_id)?;
        let winner_id = clean(self.winner_id)?;
        let loser_id = clean(self.loser_id)?;

        let tourney_date = parse_compact_date(self.tourney_date.as_deref());
        let year = parse_int(self.year.as_deref())
            .or_else(|| tourney_date.map(|d| chrono::Datelike::year(&d)));
        let score = clean(self.score);
        let status = self
            .status
            .as_deref()
            .and_then(parse_flag)
            .unwrap_or_else(|| !score.as_deref().is_some_and(has_incomplete_marker));
        let team_event = self
            .team_event
            .as_deref()
            .and_then(parse_flag)
            .unwrap_or(false);

        Some(Match {
            id: 0,
            tourney_id,
            tourney_name: clean(self.tourney_name),
            surface: clean(self.surface),
            draw_size: parse_int(self.draw_size.as_deref()),
            tourney_level: clean(self.tourney_level),
            tourney_date,
            year,
            event_id: clean(self.event_id),
            match_num: parse_int(self.match_num.as_deref()),
            winner_id,
            winner_seed: parse_int(self.winner_seed.as_deref()),
            winner_entry: clean(self.winner_entry),
            winner_name: clean(self.winner_name),
            winner_hand: clean(self.winner_hand),
            winner_ht: parse_int(self.winner_ht.as_deref()),
            winner_ioc: clean(self.winner_ioc),
            winner_age: parse_float(self.winner_age.as_deref()),
            winner_rank: parse_int(self.winner_rank.as_deref()),
            winner_rank_points: parse_int(self.winner_rank_points.as_deref()),
            loser_id,
            loser_seed: parse_int(self.loser_seed.as_deref()),
            loser_entry: clean(self.loser_entry),
            loser_name: clean(self.loser_name),
            loser_hand: clean(self.loser_hand),
            loser_ht: parse_int(self.loser_ht.as_deref()),
            loser_ioc: clean(self.loser_ioc),
            loser_age: parse_float(self.loser_age.as_deref()),
            loser_rank: parse_int(self.loser_rank.as_deref()),
            loser_rank_points: parse_int(self.loser_rank_points.as_deref()),
            score,
            best_of: parse_int(self.best_of.as_deref()),
            round: clean(self.round),
            minutes: parse_int(self.minutes.as_deref()),
            status,
            team_event,
        })
    }
}

fn import_matches(conn: &Connection, path: &Path) -> Result<ImportSummary> {
    let mut summary = ImportSummary::default();
    let records: Vec<MatchRecord> = read_records(path, &mut summary)?;

    let removed = database::matches::delete_all(conn)?;
    info!("Removed {} existing matches", removed);

    for record in records {
        match record.into_match() {
            Some(m) => {
                database::matches::insert_match(conn, &m)?;
                summary.inserted += 1;
            }
            None => summary.skipped += 1,
        }
    }

    info!("Imported {} matches ({} skipped)", summary.inserted, summary.skipped);
    Ok(summary)
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RankingRecord {
    #[serde(alias = "ranking_date")]
    date: Option<String>,
    rank: Option<String>,
    #[serde(alias = "player", alias = "player_id")]
    id: Option<String>,
    points: Option<String>,
}

/// A single CSV file, or every `.csv` file of a directory in name order.
fn csv_sources(path: &Path) -> Result<Vec<PathBuf>> {
    if !path.is_dir() {
        return Ok(vec![path.to_path_buf()]);
    }

    let mut files: Vec<PathBuf> = std::fs::read_dir(path)
        .with_context(|| format!("Failed to read directory {}", path.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("csv")))
        .collect();
    files.sort();

    if files.is_empty() {
        bail!("No CSV files found in {}", path.display());
    }
    Ok(files)
}

fn import_rankings(conn: &Connection, path: &Path, depth: usize) -> Result<ImportSummary> {
    let mut summary = ImportSummary::default();
    let mut by_date: BTreeMap<String, Vec<RankingRecord>> = BTreeMap::new();

    for file in csv_sources(path)? {
        info!("Reading {}", file.display());
        for record in read_records::<RankingRecord>(&file, &mut summary)? {
            let date = record.date.clone().unwrap_or_default().trim().to_string();
            by_date.entry(date).or_default().push(record);
        }
    }

    database::rankings::delete_all(conn)?;

    let mut generated = 0;
    for (raw_date, rows) in by_date {
        let Some(date) = parse_compact_date(Some(&raw_date)) else {
            warn!("Skipping malformed ranking date '{}'", raw_date);
            summary.skipped += rows.len();
            continue;
        };

        let mut ranked: Vec<(i32, RankingRecord)> = Vec::with_capacity(rows.len());
        for row in rows {
            match parse_int(row.rank.as_deref()) {
                Some(rank) => ranked.push((rank, row)),
                None => {
                    warn!("Skipping ranking row without a rank on {}", raw_date);
                    summary.skipped += 1;
                }
            }
        }
        ranked.sort_by_key(|(rank, _)| *rank);
        ranked.truncate(depth);

        let date_id = database::rankings::upsert_ranking_date(conn, date)?;
        for (rank, row) in ranked {
            let player_id = clean(row.id).unwrap_or_else(|| {
                generated += 1;
                format!("TEMP{generated:04}")
            });
            let points = parse_int(row.points.as_deref()).unwrap_or(0);

            if database::rankings::insert_ranking(conn, date_id, &player_id, rank, points)? {
                summary.inserted += 1;
            } else {
                summary.skipped += 1;
            }
        }
    }

    info!("Imported {} ranking entries", summary.inserted);
    Ok(summary)
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    fn into_vec(self) -> Vec<String> {
        match self {
            OneOrMany::One(value) => vec![value],
            OneOrMany::Many(values) => values,
        }
    }
}

#[derive(Debug, Deserialize)]
struct TournamentRecord {
    id: i64,
    name: OneOrMany,
    slug: Option<String>,
    city: Option<String>,
    country: Option<String>,
    ioc: Option<String>,
    category: Option<OneOrMany>,
    surfaces: Option<OneOrMany>,
    indoor: Option<bool>,
    website: Option<String>,
}

const MAIN_CATEGORIES: [&str; 4] = ["G", "M", "F", "O"];

/// Categories listed for a tournament across its history; the first main
/// category present wins.
fn pick_category(categories: Vec<String>) -> Option<String> {
    MAIN_CATEGORIES
        .iter()
        .find(|main| categories.iter().any(|c| c == *main))
        .map(|main| main.to_string())
        .or_else(|| categories.into_iter().next())
}

impl TournamentRecord {
    fn into_tournament(self) -> Option<Tournament> {
        let name = clean(self.name.into_vec().into_iter().next())?;

        Some(Tournament {
            id: self.id,
            name,
            slug: clean(self.slug),
            city: clean(self.city),
            country: clean(self.country),
            ioc: clean(self.ioc),
            category: self.category.and_then(|c| pick_category(c.into_vec())),
            surfaces: self.surfaces.map(OneOrMany::into_vec).unwrap_or_default(),
            indoor: self.indoor,
            website: clean(self.website),
        })
    }
}

fn import_tournaments(conn: &Connection, path: &Path) -> Result<ImportSummary> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let records: Vec<TournamentRecord> = serde_json::from_reader(std::io::BufReader::new(file))
        .with_context(|| format!("Failed to parse tournaments from {}", path.display()))?;

    let removed = database::tournaments::delete_all(conn)?;
    info!("Removed {} existing tournaments", removed);

    let mut summary = ImportSummary::default();
    for record in records {
        let id = record.id;
        match record.into_tournament() {
            Some(tournament) => {
                database::tournaments::insert_tournament(conn, &tournament)?;
                summary.inserted += 1;
            }
            None => {
                warn!("Skipping tournament {} without a name", id);
                summary.skipped += 1;
            }
        }
    }

    info!("Imported {} tournaments", summary.inserted);
    Ok(summary)
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RankingTableRecord {
    year: Option<String>,
    tournament: Option<String>,
    tourney_id: Option<String>,
    #[serde(alias = "tourney_date")]
    start_date: Option<String>,
    prize_money: Option<String>,
    atp_category: Option<String>,
}

/// Formats prize money as "$" plus dot-grouped digits: "€200000" becomes
/// "$200.000". Values without digits are dropped.
struct PrizeMoney {
    non_digits: Regex,
}

impl PrizeMoney {
    fn new() -> Result<Self> {
        let non_digits = Regex::new(r"[^\d]").context("Failed to compile prize money regex")?;
        Ok(Self { non_digits })
    }

    fn clean(&self, value: &str) -> Option<String> {
        let digits = self.non_digits.replace_all(value, "");
        if digits.is_empty() {
            return None;
        }
        let digits = match digits.trim_start_matches('0') {
            "" => "0",
            trimmed => trimmed,
        };

        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (idx, ch) in digits.chars().enumerate() {
            if idx > 0 && (digits.len() - idx) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(ch);
        }
        Some(format!("${grouped}"))
    }
}

/// Start dates come in ISO, `YYYYMMDD` or day-first form; stored as ISO.
fn normalize_start_date(value: &str) -> Option<String> {
    let value = value.trim();
    parse_compact_date(Some(value))
        .or_else(|| NaiveDate::parse_from_str(value, "%d/%m/%Y").ok())
        .or_else(|| NaiveDate::parse_from_str(value, "%d.%m.%Y").ok())
        .map(|d| d.format("%Y-%m-%d").to_string())
}

fn import_ranking_tables(conn: &Connection, path: &Path) -> Result<ImportSummary> {
    let mut summary = ImportSummary::default();
    let records: Vec<RankingTableRecord> = read_records(path, &mut summary)?;

    let prize_money = PrizeMoney::new()?;

    let removed = database::records::delete_ranking_tables(conn)?;
    info!("Removed {} existing ranking table rows", removed);

    for record in records {
        let (Some(year), Some(tournament)) = (clean(record.year), clean(record.tournament)) else {
            summary.skipped += 1;
            continue;
        };

        let row = RankingTableRow {
            year,
            tournament,
            tourney_id: clean(record.tourney_id),
            tourney_date: clean(record.start_date).and_then(|d| normalize_start_date(&d)),
            prize_money: clean(record.prize_money).and_then(|p| prize_money.clean(&p)),
            atp_category: clean(record.atp_category),
        };
        database::records::insert_ranking_table_row(conn, &row)?;
        summary.inserted += 1;
    }

    let linked = database::records::link_ranking_tables_to_matches(conn)?;
    info!(
        "Imported {} ranking table rows, {} linked to matches",
        summary.inserted, linked
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("tennis_stats_import_{}_{}", std::process::id(), name));
        let mut file = File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    fn memory_db() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        ensure_schema(&conn).unwrap();
        conn
    }

    #[test]
    fn test_prize_money_is_dot_grouped() {
        let prize_money = PrizeMoney::new().unwrap();

        assert_eq!(prize_money.clean("€200000").as_deref(), Some("$200.000"));
        assert_eq!(prize_money.clean("$1,234,567").as_deref(), Some("$1.234.567"));
        assert_eq!(prize_money.clean("950").as_deref(), Some("$950"));
        assert_eq!(prize_money.clean("000").as_deref(), Some("$0"));
        assert_eq!(prize_money.clean("n/a"), None);
    }

    #[test]
    fn test_headers_are_normalized() {
        assert_eq!(normalize_header(" Start\u{a0}Date "), "start_date");
        assert_eq!(normalize_header("ATP  Category"), "atp_category");
    }

    #[test]
    fn test_lenient_numbers_and_dates() {
        assert_eq!(parse_int(Some("12.0")), Some(12));
        assert_eq!(parse_int(Some("tall")), None);
        assert_eq!(parse_compact_date(Some("19680708")), NaiveDate::from_ymd_opt(1968, 7, 8));
        assert_eq!(parse_compact_date(Some("1968-07-08")), NaiveDate::from_ymd_opt(1968, 7, 8));
        assert_eq!(parse_compact_date(Some("July 1968")), None);
    }

    #[test]
    fn test_category_prefers_main_levels() {
        let categories = vec!["A".to_string(), "M".to_string(), "G".to_string()];

        assert_eq!(pick_category(categories).as_deref(), Some("G"));
        assert_eq!(pick_category(vec!["A".to_string()]).as_deref(), Some("A"));
        assert_eq!(pick_category(Vec::new()), None);
    }

    #[test]
    fn test_match_rows_derive_year_and_status() {
        let path = temp_file(
            "matches.csv",
            "tourney_id,tourney_name,tourney_date,winner_id,loser_id,score,round,w_ace\n\
             580,Australian Open,20240115,C044,A678,6-4 6-4,F,12\n\
             580,Australian Open,20240115,C044,B123,W/O,SF,\n\
             ,Missing Id,20240115,C044,B123,6-0,R32,\n",
        );
        let conn = memory_db();

        let summary = import_matches(&conn, &path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(summary, ImportSummary { inserted: 2, skipped: 1 });
        let matches = database::matches::list_for_edition(&conn, "580", 2024).unwrap();
        assert_eq!(matches.len(), 2);
        assert!(matches[0].status);
        assert!(!matches[1].status);
    }

    #[test]
    fn test_rankings_keep_top_positions_per_date() {
        let path = temp_file(
            "rankings.csv",
            "date,rank,id,points\n\
             20240101,3,C,100\n\
             20240101,1,A,300\n\
             20240101,2,,200\n\
             2024-13-45,1,A,300\n",
        );
        let conn = memory_db();

        let summary = import_rankings(&conn, &path, 2).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(summary.inserted, 2);
        assert_eq!(summary.skipped, 1);
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let entries = database::rankings::list_for_date(&conn, date, 10).unwrap();
        let ids: Vec<&str> = entries.iter().map(|e| e.player_id.as_str()).collect();
        assert_eq!(ids, vec!["A", "TEMP0001"]);
    }

    #[test]
    fn test_service_prepares_a_fresh_database() {
        let db_path = std::env::temp_dir().join(format!("tennis_stats_import_{}_service.db", std::process::id()));
        std::fs::remove_file(&db_path).ok();
        let csv = temp_file("service_players.csv", "id,player,ioc\nC044,Roger Federer,SUI\n");

        let config = AppConfig::default().with_database_path(db_path.to_string_lossy());
        let service = ImportService::new(config).unwrap();
        let summary = service.run(Dataset::Players, &csv).unwrap();

        std::fs::remove_file(&csv).ok();
        drop(service);
        std::fs::remove_file(&db_path).ok();
        assert_eq!(summary, ImportSummary { inserted: 1, skipped: 0 });
    }

    #[test]
    fn test_rankings_without_a_rank_are_skipped() {
        let path = temp_file(
            "rankings_unranked.csv",
            "date,rank,id,points\n\
             20240101,T,X,900\n\
             20240101,2,B,200\n\
             20240101,1,A,300\n",
        );
        let conn = memory_db();

        let summary = import_rankings(&conn, &path, 2).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(summary.inserted, 2);
        assert_eq!(summary.skipped, 1);
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let entries = database::rankings::list_for_date(&conn, date, 10).unwrap();
        let ranks: Vec<(&str, i32)> = entries.iter().map(|e| (e.player_id.as_str(), e.rank)).collect();
        assert_eq!(ranks, vec![("A", 1), ("B", 2)]);
    }

    #[test]
    fn test_tournament_lists_are_flattened() {
        let path = temp_file(
            "tournaments.json",
            r#"[
                {"id": 580, "name": ["Australian Open", "Australian Championships"],
                 "category": ["A", "G"], "surfaces": ["Hard", "Grass"], "indoor": false},
                {"id": 352, "name": "Paris", "category": "M", "surfaces": "Hard"}
            ]"#,
        );
        let conn = memory_db();

        let summary = import_tournaments(&conn, &path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(summary.inserted, 2);
        let ao = database::tournaments::find_by_id(&conn, 580).unwrap().unwrap();
        assert_eq!(ao.name, "Australian Open");
        assert_eq!(ao.category.as_deref(), Some("G"));
        assert_eq!(ao.surfaces, vec!["Hard", "Grass"]);
        let paris = database::tournaments::find_by_id(&conn, 352).unwrap().unwrap();
        assert_eq!(paris.surfaces, vec!["Hard"]);
    }
}
