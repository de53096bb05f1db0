use anyhow::{Context, Result};
use rusqlite::Connection;

/// Create every table and index that is missing and rebuild the views.
/// Existing data is kept.
pub fn ensure_schema(conn: &Connection) -> Result<()> {
    let schema_sql = include_str!("schema.sql");
    let statements = split_sql_statements(schema_sql);

    for (idx, statement) in statements.iter().enumerate() {
        execute_sql(conn, statement)
            .with_context(|| format!("Failed to execute schema statement {}", idx + 1))?;
    }

    log::debug!("Database schema ready ({} statements)", statements.len());
    Ok(())
}

fn split_sql_statements(sql: &str) -> Vec<String> {
    sql.split(';')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn execute_sql(conn: &Connection, sql: &str) -> Result<()> {
    conn.execute(sql, [])
        .context("Failed to execute SQL statement")
        .map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();

        ensure_schema(&conn).unwrap();
        ensure_schema(&conn).unwrap();

        let views: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'view'",
                [],
                |r| r.get(0),
            )
            .unwrap();
        assert_eq!(views, 2);
    }

    #[test]
    fn test_split_ignores_trailing_whitespace() {
        let statements = split_sql_statements("CREATE TABLE a (x);\n\n CREATE TABLE b (y);\n");
        assert_eq!(statements, vec!["CREATE TABLE a (x)", "CREATE TABLE b (y)"]);
    }
}
