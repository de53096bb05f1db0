use anyhow::{Context, Result};
use rusqlite::types::Value;
use rusqlite::{params, Connection};

use super::filter::WhereClause;
use super::models::{
    EditionFinal, Match, MatchFilter, MatchPair, MatchSearch, MatchSide, RecordFilter, ResultRow,
    SeasonMatch, SeasonOccurrence, TitleCount, TourneyRef,
};
use crate::domain::scores::{ScoreExclusion, FINAL_ROUND};

const MATCH_COLUMNS: &str = "id, tourney_id, tourney_name, surface, draw_size, tourney_level, tourney_date, year, event_id, match_num, \
    winner_id, winner_seed, winner_entry, winner_name, winner_hand, winner_ht, winner_ioc, winner_age, winner_rank, winner_rank_points, \
    loser_id, loser_seed, loser_entry, loser_name, loser_hand, loser_ht, loser_ioc, loser_age, loser_rank, loser_rank_points, \
    score, best_of, round, minutes, status, team_event";

/// Text columns offered as record filters.
#[derive(Debug, Clone, Copy)]
pub enum MatchColumn {
    Surface,
    Level,
    Round,
}

impl MatchColumn {
    fn name(self) -> &'static str {
        match self {
            MatchColumn::Surface => "surface",
            MatchColumn::Level => "tourney_level",
            MatchColumn::Round => "round",
        }
    }
}

pub fn insert_match(conn: &Connection, m: &Match) -> Result<i64> {
    let sql = "INSERT INTO matches (tourney_id, tourney_name, surface, draw_size, tourney_level, tourney_date, year, event_id, match_num, \
        winner_id, winner_seed, winner_entry, winner_name, winner_hand, winner_ht, winner_ioc, winner_age, winner_rank, winner_rank_points, \
        loser_id, loser_seed, loser_entry, loser_name, loser_hand, loser_ht, loser_ioc, loser_age, loser_rank, loser_rank_points, \
        score, best_of, round, minutes, status, team_event) \
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18, ?19, ?20, \
        ?21, ?22, ?23, ?24, ?25, ?26, ?27, ?28, ?29, ?30, ?31, ?32, ?33, ?34, ?35)";

    conn.execute(
        sql,
        params![
            m.tourney_id,
            m.tourney_name,
            m.surface,
            m.draw_size,
            m.tourney_level,
            m.tourney_date,
            m.year,
            m.event_id,
            m.match_num,
            m.winner_id,
            m.winner_seed,
            m.winner_entry,
            m.winner_name,
            m.winner_hand,
            m.winner_ht,
            m.winner_ioc,
            m.winner_age,
            m.winner_rank,
            m.winner_rank_points,
            m.loser_id,
            m.loser_seed,
            m.loser_entry,
            m.loser_name,
            m.loser_hand,
            m.loser_ht,
            m.loser_ioc,
            m.loser_age,
            m.loser_rank,
            m.loser_rank_points,
            m.score,
            m.best_of,
            m.round,
            m.minutes,
            m.status,
            m.team_event
        ],
    )
    .context("Failed to insert match")?;

    Ok(conn.last_insert_rowid())
}

pub fn delete_all(conn: &Connection) -> Result<usize> {
    conn.execute("DELETE FROM matches", [])
        .context("Failed to clear matches")
}

fn parse_match_row(row: &rusqlite::Row) -> rusqlite::Result<Match> {
    Ok(Match {
        id: row.get("id")?,
        tourney_id: row.get("tourney_id")?,
        tourney_name: row.get("tourney_name")?,
        surface: row.get("surface")?,
        draw_size: row.get("draw_size")?,
        tourney_level: row.get("tourney_level")?,
        tourney_date: row.get("tourney_date")?,
        year: row.get("year")?,
        event_id: row.get("event_id")?,
        match_num: row.get("match_num")?,
        winner_id: row.get("winner_id")?,
        winner_seed: row.get("winner_seed")?,
        winner_entry: row.get("winner_entry")?,
        winner_name: row.get("winner_name")?,
        winner_hand: row.get("winner_hand")?,
        winner_ht: row.get("winner_ht")?,
        winner_ioc: row.get("winner_ioc")?,
        winner_age: row.get("winner_age")?,
        winner_rank: row.get("winner_rank")?,
        winner_rank_points: row.get("winner_rank_points")?,
        loser_id: row.get("loser_id")?,
        loser_seed: row.get("loser_seed")?,
        loser_entry: row.get("loser_entry")?,
        loser_name: row.get("loser_name")?,
        loser_hand: row.get("loser_hand")?,
        loser_ht: row.get("loser_ht")?,
        loser_ioc: row.get("loser_ioc")?,
        loser_age: row.get("loser_age")?,
        loser_rank: row.get("loser_rank")?,
        loser_rank_points: row.get("loser_rank_points")?,
        score: row.get("score")?,
        best_of: row.get("best_of")?,
        round: row.get("round")?,
        minutes: row.get("minutes")?,
        status: row.get("status")?,
        team_event: row.get("team_event")?,
    })
}

fn query_matches(conn: &Connection, clause: &WhereClause, order_by: &str) -> Result<Vec<Match>> {
    let sql = format!(
        "SELECT {MATCH_COLUMNS} FROM matches{} ORDER BY {order_by}",
        clause.sql()
    );

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(clause.params(), parse_match_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

/// All matches of a player, optionally restricted to a round and surface,
/// without walkovers, defaults and unfinished finals.
pub fn list_for_player(conn: &Connection, filter: &MatchFilter) -> Result<Vec<Match>> {
    let mut clause = WhereClause::new();
    clause.push_player(&filter.player_id);
    if let Some(round) = &filter.round {
        clause.push_eq("round", round.clone());
    }
    if let Some(surface) = &filter.surface {
        clause.push_eq("surface", surface.clone());
    }
    clause.push(ScoreExclusion::PlayerMatches.sql_condition());

    query_matches(conn, &clause, "tourney_date ASC, id ASC")
        .context("Failed to list matches for player")
}

/// Completed matches (status flag set) of a player.
pub fn list_completed_for_player(conn: &Connection, player_id: &str) -> Result<Vec<Match>> {
    let mut clause = WhereClause::new();
    clause.push_player(player_id).push("status = 1");

    query_matches(conn, &clause, "tourney_date ASC, id ASC")
        .context("Failed to list completed matches for player")
}

/// Completed matches between two players, oldest first.
pub fn list_between(conn: &Connection, player1: &str, player2: &str) -> Result<Vec<Match>> {
    let mut clause = WhereClause::new();
    let first = clause.bind(Value::Text(player1.to_string()));
    let second = clause.bind(Value::Text(player2.to_string()));
    clause
        .push(&format!(
            "(winner_id = ?{first} AND loser_id = ?{second}) OR (winner_id = ?{second} AND loser_id = ?{first})"
        ))
        .push("status = 1");

    query_matches(conn, &clause, "tourney_date ASC, id ASC")
        .context("Failed to list head-to-head matches")
}

/// Completed matches of a player or a pair, narrowed by the search filters.
pub fn search(conn: &Connection, search: &MatchSearch) -> Result<Vec<Match>> {
    let mut clause = WhereClause::new();
    clause.push("status = 1");

    match &search.side {
        MatchSide::Pair(player1, player2) => {
            let first = clause.bind(Value::Text(player1.clone()));
            let second = clause.bind(Value::Text(player2.clone()));
            clause.push(&format!(
                "(winner_id = ?{first} AND loser_id = ?{second}) OR (winner_id = ?{second} AND loser_id = ?{first})"
            ));
        }
        MatchSide::Player { id, opponent } => {
            clause.push_player(id);
            if let Some(opponent) = opponent {
                let player = clause.bind(Value::Text(id.clone()));
                let name = clause.bind(Value::Text(opponent.clone()));
                clause.push(&format!(
                    "(winner_id = ?{player} AND loser_name = ?{name}) OR (loser_id = ?{player} AND winner_name = ?{name})"
                ));
            }
        }
    }

    if let Some(year) = search.year {
        clause.push_eq("year", year);
    }
    if let Some(level) = &search.level {
        clause.push_eq("tourney_level", level.clone());
    }
    if let Some(surface) = &search.surface {
        clause.push_eq("surface", surface.clone());
    }
    if let Some(round) = &search.round {
        clause.push_eq("round", round.clone());
    }
    match &search.tourney {
        Some(TourneyRef::Id(id)) => {
            clause.push_eq("tourney_id", id.clone());
        }
        Some(TourneyRef::Name(name)) => {
            clause.push_eq("tourney_name", name.clone());
        }
        None => {}
    }

    let direction = if search.descending { "DESC" } else { "ASC" };
    let order_by = format!("{} {direction}, id {direction}", search.sort.column());

    query_matches(conn, &clause, &order_by).context("Failed to search matches")
}

/// Individual-event matches of a season, by start date and then tournament
/// name.
pub fn list_for_season(conn: &Connection, year: i32) -> Result<Vec<SeasonMatch>> {
    let sql = "SELECT tourney_id, tourney_name, tourney_date, tourney_level, surface, draw_size, round, score, \
               winner_name, winner_ioc, loser_name, loser_ioc \
               FROM matches WHERE year = ?1 AND team_event = 0 \
               ORDER BY tourney_date ASC, tourney_name ASC, id ASC";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![year], |row| {
            Ok(SeasonMatch {
                tourney_id: row.get(0)?,
                tourney_name: row.get(1)?,
                tourney_date: row.get(2)?,
                tourney_level: row.get(3)?,
                surface: row.get(4)?,
                draw_size: row.get(5)?,
                round: row.get(6)?,
                score: row.get(7)?,
                winner_name: row.get(8)?,
                winner_ioc: row.get(9)?,
                loser_name: row.get(10)?,
                loser_ioc: row.get(11)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to list season matches")?;

    Ok(rows)
}

/// Results of a player, without walkovers, defaults and unfinished matches.
pub fn list_results_for_player(conn: &Connection, player_id: &str) -> Result<Vec<ResultRow>> {
    let mut clause = WhereClause::new();
    clause
        .push_player(player_id)
        .push(ScoreExclusion::AnyMarkerIgnoreCase.sql_condition());

    let sql = format!(
        "SELECT winner_id, tourney_name, tourney_level, surface, round FROM matches{}",
        clause.sql()
    );

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(clause.params(), |row| {
            Ok(ResultRow {
                winner_id: row.get(0)?,
                tourney_name: row.get(1)?,
                tourney_level: row.get(2)?,
                surface: row.get(3)?,
                round: row.get(4)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to list player results")?;

    Ok(rows)
}

/// Matches of one tournament edition in insertion order.
pub fn list_for_edition(conn: &Connection, tourney_id: &str, year: i32) -> Result<Vec<Match>> {
    let mut clause = WhereClause::new();
    clause
        .push_eq("tourney_id", tourney_id.to_string())
        .push_eq("year", year);

    query_matches(conn, &clause, "id ASC")
        .context("Failed to list matches for tournament edition")
}

/// Most recent matches with a complete result, newest first.
pub fn list_recent_pairs(conn: &Connection, limit: usize) -> Result<Vec<MatchPair>> {
    let sql = format!(
        "SELECT winner_id, loser_id FROM matches WHERE {} ORDER BY tourney_date DESC LIMIT ?1",
        ScoreExclusion::AnyMarker.sql_condition()
    );

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(params![limit as i64], |row| {
            Ok(MatchPair {
                winner_id: row.get(0)?,
                loser_id: row.get(1)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to list recent matches")?;

    Ok(rows)
}

/// Distinct ids of everyone the player has met in a complete match, sorted.
pub fn list_opponents(conn: &Connection, player_id: &str) -> Result<Vec<String>> {
    let sql = format!(
        "SELECT DISTINCT CASE WHEN winner_id = ?1 THEN loser_id ELSE winner_id END AS opponent \
         FROM matches \
         WHERE (winner_id = ?1 OR loser_id = ?1) AND {} \
         ORDER BY opponent ASC",
        ScoreExclusion::AnyMarker.sql_condition()
    );

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(params![player_id], |row| row.get(0))?
        .collect::<rusqlite::Result<Vec<String>>>()
        .context("Failed to list opponents")?;

    Ok(rows)
}

/// Finals of the given tournament ids, most recent edition first.
pub fn list_finals(conn: &Connection, tourney_ids: &[String]) -> Result<Vec<EditionFinal>> {
    let mut clause = WhereClause::new();
    clause
        .push_in("tourney_id", tourney_ids)
        .push_eq("round", FINAL_ROUND.to_string());

    let sql = format!(
        "SELECT year, tourney_id, tourney_date, draw_size, round, surface, winner_id, winner_name, winner_ioc, \
         loser_id, loser_name, loser_ioc, score FROM matches{} ORDER BY tourney_date DESC",
        clause.sql()
    );

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(clause.params(), |row| {
            Ok(EditionFinal {
                year: row.get(0)?,
                tourney_id: row.get(1)?,
                tourney_date: row.get(2)?,
                draw_size: row.get(3)?,
                round: row.get(4)?,
                surface: row.get(5)?,
                winner_id: row.get(6)?,
                winner_name: row.get(7)?,
                winner_ioc: row.get(8)?,
                loser_id: row.get(9)?,
                loser_name: row.get(10)?,
                loser_ioc: row.get(11)?,
                score: row.get(12)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to list tournament finals")?;

    Ok(rows)
}

/// Distinct years a tournament was played, most recent first.
pub fn list_edition_years(conn: &Connection, tourney_id: &str) -> Result<Vec<i32>> {
    let sql = "SELECT DISTINCT year FROM matches WHERE tourney_id = ?1 AND year IS NOT NULL ORDER BY year DESC";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![tourney_id], |row| row.get(0))?
        .collect::<rusqlite::Result<Vec<i32>>>()
        .context("Failed to list tournament editions")?;

    Ok(rows)
}

/// Distinct non-null values of a text column, sorted.
pub fn distinct_values(conn: &Connection, column: MatchColumn) -> Result<Vec<String>> {
    let column = column.name();
    let sql = format!(
        "SELECT DISTINCT {column} FROM matches WHERE {column} IS NOT NULL AND {column} <> '' ORDER BY {column} ASC"
    );

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map([], |row| row.get(0))?
        .collect::<rusqlite::Result<Vec<String>>>()
        .with_context(|| format!("Failed to list distinct {column} values"))?;

    Ok(rows)
}

pub fn distinct_best_of(conn: &Connection) -> Result<Vec<i32>> {
    let sql = "SELECT DISTINCT best_of FROM matches WHERE best_of IS NOT NULL ORDER BY best_of ASC";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], |row| row.get(0))?
        .collect::<rusqlite::Result<Vec<i32>>>()
        .context("Failed to list distinct best-of values")?;

    Ok(rows)
}

fn record_clause(filter: &RecordFilter) -> WhereClause {
    let mut clause = WhereClause::new();
    clause
        .push_in("surface", &filter.surfaces)
        .push_in("tourney_level", &filter.levels);
    clause
}

/// Title counts per final winner, individual events only, most titles first.
pub fn count_titles(conn: &Connection, filter: &RecordFilter, limit: usize) -> Result<Vec<TitleCount>> {
    let mut clause = record_clause(filter);
    clause
        .push_eq("round", FINAL_ROUND.to_string())
        .push("team_event = 0")
        .push(ScoreExclusion::Unfinished.sql_condition());
    let limit_idx = clause.bind(Value::Integer(limit as i64));

    let sql = format!(
        "SELECT winner_id, winner_name, winner_ioc, COUNT(*) AS titles FROM matches{} \
         GROUP BY winner_id, winner_name, winner_ioc \
         ORDER BY titles DESC, winner_name ASC LIMIT ?{limit_idx}",
        clause.sql()
    );

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(clause.params(), |row| {
            Ok(TitleCount {
                player_id: row.get(0)?,
                name: row.get(1)?,
                ioc: row.get(2)?,
                count: row.get(3)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to count titles")?;

    Ok(rows)
}

/// Winners of complete finals, one occurrence per title.
pub fn list_title_winners(conn: &Connection, filter: &RecordFilter) -> Result<Vec<SeasonOccurrence>> {
    let mut clause = record_clause(filter);
    clause
        .push_eq("round", FINAL_ROUND.to_string())
        .push(ScoreExclusion::AnyMarkerIgnoreCase.sql_condition());

    let sql = format!(
        "SELECT winner_id, winner_name, winner_ioc, year FROM matches{} ORDER BY year ASC",
        clause.sql()
    );

    collect_occurrences(conn, &sql, &clause).context("Failed to list title winners")
}

/// Both players of every completed individual match, optionally in a single
/// round (case-insensitive), one occurrence per player per match.
pub fn list_round_appearances(
    conn: &Connection,
    filter: &RecordFilter,
    round: Option<&str>,
) -> Result<Vec<SeasonOccurrence>> {
    let mut clause = record_clause(filter);
    clause.push("status = 1").push("team_event = 0");
    if let Some(round) = round {
        clause.push_eq_ignore_case("round", round);
    }
    let conditions = clause.sql();

    let sql = format!(
        "SELECT winner_id, winner_name, winner_ioc, year FROM matches{conditions} \
         UNION ALL \
         SELECT loser_id, loser_name, loser_ioc, year FROM matches{conditions}"
    );

    collect_occurrences(conn, &sql, &clause).context("Failed to list round appearances")
}

fn collect_occurrences(conn: &Connection, sql: &str, clause: &WhereClause) -> Result<Vec<SeasonOccurrence>> {
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(clause.params(), |row| {
            Ok(SeasonOccurrence {
                player_id: row.get(0)?,
                name: row.get(1)?,
                ioc: row.get(2)?,
                year: row.get(3)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}
