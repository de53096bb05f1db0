use anyhow::{Context, Result};
use rusqlite::types::Value;
use rusqlite::{params, Connection};

use super::filter::WhereClause;
use super::models::{EntryCount, EntryFilter, H2HSeasonRow, PlayerTournament, RankingTableRow};

/// Pairs of players who met most often within a single season.
pub fn list_h2h_seasons(conn: &Connection, limit: usize) -> Result<Vec<H2HSeasonRow>> {
    let sql = "
        SELECT year, player_1_id, player_1_name, player_1_ioc,
               player_2_id, player_2_name, player_2_ioc, matches_played
        FROM h2h_seasons
        ORDER BY matches_played DESC, year ASC
        LIMIT ?1
    ";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![limit as i64], |row| {
            Ok(H2HSeasonRow {
                year: row.get(0)?,
                player_1_id: row.get(1)?,
                player_1_name: row.get(2)?,
                player_1_ioc: row.get(3)?,
                player_2_id: row.get(4)?,
                player_2_name: row.get(5)?,
                player_2_ioc: row.get(6)?,
                matches_played: row.get(7)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to list head-to-head seasons")?;

    Ok(rows)
}

/// One row per requested event the player entered, oldest first.
pub fn list_player_tournaments(
    conn: &Connection,
    player_id: &str,
    event_ids: &[String],
) -> Result<Vec<PlayerTournament>> {
    let mut clause = WhereClause::new();
    clause
        .push_eq("player_id", Value::Text(player_id.to_string()))
        .push_in("event_id", event_ids);

    let sql = format!(
        "SELECT event_id, MIN(tourney_name), MIN(year) AS first_year, MIN(surface), MIN(tourney_level) \
         FROM player_tournaments{} GROUP BY event_id ORDER BY first_year ASC, event_id ASC",
        clause.sql()
    );

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(clause.params(), |row| {
            Ok(PlayerTournament {
                event_id: row.get(0)?,
                tourney_name: row.get(1)?,
                year: row.get(2)?,
                surface: row.get(3)?,
                tourney_level: row.get(4)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to list player tournaments")?;

    Ok(rows)
}

/// Distinct events entered per player, most entries first. With a round
/// filter an event counts when the player played a match in that round.
pub fn count_entries(conn: &Connection, filter: &EntryFilter, limit: usize) -> Result<Vec<EntryCount>> {
    let mut clause = WhereClause::new();
    if let Some(round) = &filter.round {
        clause.push_eq("pt.round", round.clone());
    }
    clause
        .push_in("pt.surface", &filter.surfaces)
        .push_in("pt.tourney_level", &filter.levels)
        .push_in_ints("pt.best_of", &filter.best_ofs);
    let limit_idx = clause.bind(Value::Integer(limit as i64));

    let sql = format!(
        "SELECT pt.player_id, p.player, p.ioc, COUNT(DISTINCT pt.event_id) AS entries \
         FROM player_tournaments pt LEFT JOIN players p ON p.id = pt.player_id{} \
         GROUP BY pt.player_id ORDER BY entries DESC, pt.player_id ASC LIMIT ?{limit_idx}",
        clause.sql()
    );

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(clause.params(), |row| {
            Ok(EntryCount {
                player_id: row.get(0)?,
                name: row.get(1)?,
                ioc: row.get(2)?,
                count: row.get(3)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to count tournament entries")?;

    Ok(rows)
}

pub fn insert_ranking_table_row(conn: &Connection, row: &RankingTableRow) -> Result<()> {
    conn.execute(
        "INSERT INTO ranking_tables (year, tournament, tourney_id, tourney_date, prize_money, atp_category) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            row.year,
            row.tournament,
            row.tourney_id,
            row.tourney_date,
            row.prize_money,
            row.atp_category
        ],
    )
    .context("Failed to insert ranking table row")?;
    Ok(())
}

pub fn delete_ranking_tables(conn: &Connection) -> Result<usize> {
    conn.execute("DELETE FROM ranking_tables", [])
        .context("Failed to clear ranking tables")
}

/// Fill missing tournament ids and dates from the first match of the same
/// tournament name in the same season. Returns the number of rows linked.
pub fn link_ranking_tables_to_matches(conn: &Connection) -> Result<usize> {
    let sql = "
        UPDATE ranking_tables
        SET tourney_id = (
                SELECT m.tourney_id FROM matches m
                WHERE m.year = CAST(ranking_tables.year AS INTEGER)
                  AND m.tourney_name = ranking_tables.tournament
                ORDER BY m.tourney_date ASC LIMIT 1
            ),
            tourney_date = COALESCE((
                SELECT MIN(m.tourney_date) FROM matches m
                WHERE m.year = CAST(ranking_tables.year AS INTEGER)
                  AND m.tourney_name = ranking_tables.tournament
            ), tourney_date)
        WHERE tourney_id IS NULL
          AND EXISTS (
                SELECT 1 FROM matches m
                WHERE m.year = CAST(ranking_tables.year AS INTEGER)
                  AND m.tourney_name = ranking_tables.tournament
            )
    ";

    conn.execute(sql, [])
        .context("Failed to link ranking tables to matches")
}

/// Ranking table rows of one season in calendar order.
pub fn list_ranking_tables(conn: &Connection, year: &str) -> Result<Vec<RankingTableRow>> {
    let sql = "SELECT year, tournament, tourney_id, tourney_date, prize_money, atp_category \
               FROM ranking_tables WHERE year = ?1 ORDER BY tourney_date ASC, id ASC";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![year], |row| {
            Ok(RankingTableRow {
                year: row.get(0)?,
                tournament: row.get(1)?,
                tourney_id: row.get(2)?,
                tourney_date: row.get(3)?,
                prize_money: row.get(4)?,
                atp_category: row.get(5)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to list ranking tables")?;

    Ok(rows)
}
