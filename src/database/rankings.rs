use anyhow::{Context, Result};
use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension};

use super::models::{RankingEntry, WeeksAtRank};

/// Insert a ranking date if new and return its id either way.
pub fn upsert_ranking_date(conn: &Connection, date: NaiveDate) -> Result<i64> {
    conn.execute(
        "INSERT INTO ranking_dates (date) VALUES (?1) ON CONFLICT (date) DO NOTHING",
        params![date],
    )
    .context("Failed to insert ranking date")?;

    conn.query_row(
        "SELECT id FROM ranking_dates WHERE date = ?1",
        params![date],
        |row| row.get(0),
    )
    .context("Failed to look up ranking date")
}

/// Returns false when the player already has an entry for that date.
pub fn insert_ranking(
    conn: &Connection,
    ranking_date_id: i64,
    player_id: &str,
    rank: i32,
    points: i32,
) -> Result<bool> {
    let inserted = conn
        .execute(
            "INSERT INTO rankings (rank, points, player_id, ranking_date_id) VALUES (?1, ?2, ?3, ?4) \
             ON CONFLICT (ranking_date_id, player_id) DO NOTHING",
            params![rank, points, player_id, ranking_date_id],
        )
        .context("Failed to insert ranking")?;

    Ok(inserted > 0)
}

pub fn delete_all(conn: &Connection) -> Result<()> {
    conn.execute("DELETE FROM rankings", [])
        .context("Failed to clear rankings")?;
    conn.execute("DELETE FROM ranking_dates", [])
        .context("Failed to clear ranking dates")?;
    Ok(())
}

/// Every ranking snapshot date, most recent first.
pub fn list_dates(conn: &Connection) -> Result<Vec<NaiveDate>> {
    let mut stmt = conn.prepare("SELECT date FROM ranking_dates ORDER BY date DESC")?;
    let rows = stmt
        .query_map([], |row| row.get(0))?
        .collect::<rusqlite::Result<Vec<NaiveDate>>>()
        .context("Failed to list ranking dates")?;

    Ok(rows)
}

pub fn latest_date(conn: &Connection) -> Result<Option<NaiveDate>> {
    conn.query_row(
        "SELECT date FROM ranking_dates ORDER BY date DESC LIMIT 1",
        [],
        |row| row.get(0),
    )
    .optional()
    .context("Failed to get latest ranking date")
}

/// Best ranked players on one snapshot date.
pub fn list_for_date(conn: &Connection, date: NaiveDate, limit: usize) -> Result<Vec<RankingEntry>> {
    let sql = "
        SELECT r.player_id, p.player, p.ioc, r.points, r.rank
        FROM rankings r
        JOIN ranking_dates d ON d.id = r.ranking_date_id
        LEFT JOIN players p ON p.id = r.player_id
        WHERE d.date = ?1
        ORDER BY r.rank ASC
        LIMIT ?2
    ";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![date, limit as i64], |row| {
            Ok(RankingEntry {
                player_id: row.get(0)?,
                name: row.get(1)?,
                ioc: row.get(2)?,
                points: row.get(3)?,
                rank: row.get(4)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to list rankings for date")?;

    Ok(rows)
}

/// Number of ranking dates each player held exactly `rank`, most first.
pub fn weeks_at_rank(conn: &Connection, rank: i32) -> Result<Vec<WeeksAtRank>> {
    query_weeks(conn, "r.rank = ?1", rank).context("Failed to count weeks at rank")
}

/// Number of ranking dates each player was ranked `top` or better, most first.
pub fn weeks_in_top(conn: &Connection, top: i32) -> Result<Vec<WeeksAtRank>> {
    query_weeks(conn, "r.rank <= ?1", top).context("Failed to count weeks in top")
}

fn query_weeks(conn: &Connection, condition: &str, value: i32) -> Result<Vec<WeeksAtRank>> {
    let sql = format!(
        "SELECT r.player_id, p.atpname, p.ioc, COUNT(r.ranking_date_id) AS weeks
         FROM rankings r
         LEFT JOIN players p ON p.id = r.player_id
         WHERE {condition}
         GROUP BY r.player_id
         ORDER BY weeks DESC, r.player_id ASC"
    );

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(params![value], |row| {
            Ok(WeeksAtRank {
                player_id: row.get(0)?,
                name: row.get(1)?,
                ioc: row.get(2)?,
                weeks: row.get(3)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}
