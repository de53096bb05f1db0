use rusqlite::types::Value;

/// Incrementally built `WHERE` clause with numbered, bound parameters.
///
/// Column names are always `'static` literals chosen by the caller; only
/// values coming from requests go through bound parameters.
#[derive(Debug, Default, Clone)]
pub struct WhereClause {
    conditions: Vec<String>,
    params: Vec<Value>,
}

impl WhereClause {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a condition with no parameters.
    pub fn push(&mut self, condition: &str) -> &mut Self {
        self.conditions.push(format!("({condition})"));
        self
    }

    pub fn push_eq(&mut self, column: &'static str, value: impl Into<Value>) -> &mut Self {
        let idx = self.bind(value.into());
        self.conditions.push(format!("{column} = ?{idx}"));
        self
    }

    /// Case-insensitive equality, ASCII only (SQLite `upper`).
    pub fn push_eq_ignore_case(&mut self, column: &'static str, value: &str) -> &mut Self {
        let idx = self.bind(Value::Text(value.to_string()));
        self.conditions.push(format!("upper({column}) = upper(?{idx})"));
        self
    }

    /// `column IN (...)`; an empty list adds nothing.
    pub fn push_in(&mut self, column: &'static str, values: &[String]) -> &mut Self {
        self.push_in_values(column, values.iter().cloned().map(Value::Text).collect())
    }

    pub fn push_in_ints(&mut self, column: &'static str, values: &[i64]) -> &mut Self {
        self.push_in_values(column, values.iter().copied().map(Value::Integer).collect())
    }

    fn push_in_values(&mut self, column: &'static str, values: Vec<Value>) -> &mut Self {
        if values.is_empty() {
            return self;
        }
        let placeholders = values
            .into_iter()
            .map(|v| format!("?{}", self.bind(v)))
            .collect::<Vec<_>>()
            .join(", ");
        self.conditions.push(format!("{column} IN ({placeholders})"));
        self
    }

    /// The player took part in the match, on either side.
    pub fn push_player(&mut self, player_id: &str) -> &mut Self {
        let idx = self.bind(Value::Text(player_id.to_string()));
        self.conditions
            .push(format!("(winner_id = ?{idx} OR loser_id = ?{idx})"));
        self
    }

    /// Rendered clause including the leading `WHERE`, or an empty string.
    pub fn sql(&self) -> String {
        if self.conditions.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", self.conditions.join(" AND "))
        }
    }

    pub fn params(&self) -> rusqlite::ParamsFromIter<std::slice::Iter<'_, Value>> {
        rusqlite::params_from_iter(self.params.iter())
    }

    /// Index the next bound value will get; useful for trailing `LIMIT ?N`.
    pub fn bind(&mut self, value: Value) -> usize {
        self.params.push(value);
        self.params.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_clause_renders_nothing() {
        let clause = WhereClause::new();
        assert_eq!(clause.sql(), "");
    }

    #[test]
    fn test_player_placeholder_is_reused() {
        let mut clause = WhereClause::new();
        clause.push_player("C044").push_eq("round", "F".to_string());

        assert_eq!(
            clause.sql(),
            " WHERE (winner_id = ?1 OR loser_id = ?1) AND round = ?2"
        );
    }

    #[test]
    fn test_in_list_numbers_each_value() {
        let mut clause = WhereClause::new();
        clause
            .push("team_event = 0")
            .push_in("surface", &["Clay".to_string(), "Grass".to_string()])
            .push_in("tourney_level", &[]);

        assert_eq!(clause.sql(), " WHERE (team_event = 0) AND surface IN (?1, ?2)");
    }

    #[test]
    fn test_integer_in_list_binds_integers() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        conn.execute_batch(
            "CREATE TABLE t (best_of INTEGER);
             INSERT INTO t VALUES (3), (5), (5), (NULL);",
        )
        .unwrap();

        let mut clause = WhereClause::new();
        clause.push_in_ints("best_of", &[5]).push_in_ints("best_of", &[]);

        assert_eq!(clause.sql(), " WHERE best_of IN (?1)");
        let sql = format!("SELECT COUNT(*) FROM t{}", clause.sql());
        let count: i64 = conn.query_row(&sql, clause.params(), |r| r.get(0)).unwrap();
        assert_eq!(count, 2);
    }

    #[test]
    fn test_clause_binds_against_sqlite() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        conn.execute_batch(
            "CREATE TABLE t (winner_id TEXT, loser_id TEXT, round TEXT);
             INSERT INTO t VALUES ('A', 'B', 'F'), ('B', 'C', 'SF'), ('C', 'A', 'F');",
        )
        .unwrap();

        let mut clause = WhereClause::new();
        clause.push_player("A").push_eq_ignore_case("round", "f");

        let sql = format!("SELECT COUNT(*) FROM t{}", clause.sql());
        let count: i64 = conn.query_row(&sql, clause.params(), |r| r.get(0)).unwrap();
        assert_eq!(count, 2);
    }
}
