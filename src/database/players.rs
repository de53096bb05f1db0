use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};

use super::models::{Player, PlayerListing, PlayerSearchHit};

const PLAYER_COLUMNS: &str = "id, player, atpname, coaches, ioc, hand, backhand, birthdate, birthplace, height, weight, turnedpro";

pub fn insert_player(conn: &Connection, player: &Player) -> Result<()> {
    let sql = format!(
        "INSERT OR REPLACE INTO players ({PLAYER_COLUMNS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)"
    );

    conn.execute(
        &sql,
        params![
            player.id,
            player.player,
            player.atpname,
            player.coaches,
            player.ioc,
            player.hand,
            player.backhand,
            player.birthdate,
            player.birthplace,
            player.height,
            player.weight,
            player.turnedpro
        ],
    )
    .with_context(|| format!("Failed to insert player {}", player.id))?;
    Ok(())
}

pub fn delete_all(conn: &Connection) -> Result<usize> {
    conn.execute("DELETE FROM players", [])
        .context("Failed to clear players")
}

fn parse_player_row(row: &rusqlite::Row) -> rusqlite::Result<Player> {
    Ok(Player {
        id: row.get(0)?,
        player: row.get(1)?,
        atpname: row.get(2)?,
        coaches: row.get(3)?,
        ioc: row.get(4)?,
        hand: row.get(5)?,
        backhand: row.get(6)?,
        birthdate: row.get(7)?,
        birthplace: row.get(8)?,
        height: row.get(9)?,
        weight: row.get(10)?,
        turnedpro: row.get(11)?,
    })
}

pub fn find_by_id(conn: &Connection, id: &str) -> Result<Option<Player>> {
    let sql = format!("SELECT {PLAYER_COLUMNS} FROM players WHERE id = ?1");

    conn.query_row(&sql, params![id], parse_player_row)
        .optional()
        .context("Failed to query player by id")
}

/// Every player, alphabetical by ATP name.
pub fn list_all(conn: &Connection) -> Result<Vec<PlayerListing>> {
    let sql = "SELECT id, atpname, coaches, ioc, hand, birthdate, height, weight, turnedpro, backhand FROM players ORDER BY atpname ASC";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], |row| {
            Ok(PlayerListing {
                id: row.get(0)?,
                atpname: row.get(1)?,
                coaches: row.get(2)?,
                ioc: row.get(3)?,
                hand: row.get(4)?,
                birthdate: row.get(5)?,
                height: row.get(6)?,
                weight: row.get(7)?,
                turnedpro: row.get(8)?,
                backhand: row.get(9)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to list players")?;

    Ok(rows)
}

/// Players whose ATP name contains `query`, ignoring case. Case folding
/// happens in Rust because SQLite's `lower` only folds ASCII.
pub fn search_by_name(conn: &Connection, query: &str, limit: usize) -> Result<Vec<PlayerSearchHit>> {
    let needle = query.to_lowercase();
    let sql = "SELECT id, atpname, ioc FROM players WHERE atpname IS NOT NULL";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], |row| {
            Ok(PlayerSearchHit {
                id: row.get(0)?,
                atpname: row.get(1)?,
                ioc: row.get(2)?,
            })
        })?
        .filter(|hit| match hit {
            Ok(hit) => hit
                .atpname
                .as_deref()
                .is_some_and(|name| name.to_lowercase().contains(&needle)),
            Err(_) => true,
        })
        .take(limit)
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to search players")?;

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::setup::ensure_schema;

    fn named(id: &str, atpname: &str) -> Player {
        Player {
            id: id.to_string(),
            player: Some(atpname.to_string()),
            atpname: Some(atpname.to_string()),
            coaches: None,
            ioc: Some("FRA".to_string()),
            hand: None,
            backhand: None,
            birthdate: None,
            birthplace: None,
            height: None,
            weight: None,
            turnedpro: None,
        }
    }

    #[test]
    fn test_search_folds_non_ascii_case() {
        let conn = Connection::open_in_memory().unwrap();
        ensure_schema(&conn).unwrap();
        insert_player(&conn, &named("R0F1", "Édouard Roger-Vasselin")).unwrap();
        insert_player(&conn, &named("M0A1", "Gaël Monfils")).unwrap();

        for query in ["ROGER", "édouard", "ÉDOUARD"] {
            let hits = search_by_name(&conn, query, 10).unwrap();
            assert_eq!(hits.len(), 1, "{query}");
            assert_eq!(hits[0].id, "R0F1");
        }
        assert_eq!(search_by_name(&conn, "GAËL", 10).unwrap().len(), 1);
    }

    #[test]
    fn test_search_respects_limit() {
        let conn = Connection::open_in_memory().unwrap();
        ensure_schema(&conn).unwrap();
        for n in 0..5 {
            insert_player(&conn, &named(&format!("P{n}"), &format!("Player {n}"))).unwrap();
        }

        assert_eq!(search_by_name(&conn, "player", 3).unwrap().len(), 3);
        assert!(search_by_name(&conn, "nobody", 3).unwrap().is_empty());
    }
}
