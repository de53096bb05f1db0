use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};

use super::models::Tournament;

const TOURNAMENT_COLUMNS: &str = "id, name, slug, city, country, ioc, category, surfaces, indoor, website";

pub fn insert_tournament(conn: &Connection, tournament: &Tournament) -> Result<()> {
    let surfaces = serde_json::to_string(&tournament.surfaces)?;
    let sql = format!(
        "INSERT OR REPLACE INTO tournaments ({TOURNAMENT_COLUMNS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)"
    );

    conn.execute(
        &sql,
        params![
            tournament.id,
            tournament.name,
            tournament.slug,
            tournament.city,
            tournament.country,
            tournament.ioc,
            tournament.category,
            surfaces,
            tournament.indoor,
            tournament.website
        ],
    )
    .with_context(|| format!("Failed to insert tournament {}", tournament.id))?;
    Ok(())
}

pub fn delete_all(conn: &Connection) -> Result<usize> {
    conn.execute("DELETE FROM tournaments", [])
        .context("Failed to clear tournaments")
}

fn parse_tournament_row(row: &rusqlite::Row) -> rusqlite::Result<Tournament> {
    let surfaces: String = row.get(7)?;
    let surfaces = serde_json::from_str(&surfaces).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(7, rusqlite::types::Type::Text, Box::new(e))
    })?;

    Ok(Tournament {
        id: row.get(0)?,
        name: row.get(1)?,
        slug: row.get(2)?,
        city: row.get(3)?,
        country: row.get(4)?,
        ioc: row.get(5)?,
        category: row.get(6)?,
        surfaces,
        indoor: row.get(8)?,
        website: row.get(9)?,
    })
}

pub fn find_by_id(conn: &Connection, id: i64) -> Result<Option<Tournament>> {
    let sql = format!("SELECT {TOURNAMENT_COLUMNS} FROM tournaments WHERE id = ?1");

    conn.query_row(&sql, params![id], parse_tournament_row)
        .optional()
        .context("Failed to query tournament by id")
}

pub fn list_all(conn: &Connection) -> Result<Vec<Tournament>> {
    let sql = format!("SELECT {TOURNAMENT_COLUMNS} FROM tournaments ORDER BY id ASC");

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map([], parse_tournament_row)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to list tournaments")?;

    Ok(rows)
}
