/// Score marker for a match lost by default.
pub const DEFAULT: &str = "DEF";
/// Score marker for a walkover.
pub const WALKOVER: &str = "W/O";
/// Score marker for an unfinished match (weather, retirement in a final).
pub const UNFINISHED: &str = "WEA";

pub const FINAL_ROUND: &str = "F";

/// Which incomplete results a query leaves out.
///
/// Every variant has a SQL form for the database layer and a row-level
/// predicate with identical semantics. A missing score is never excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreExclusion {
    /// Any of `DEF`, `W/O`, `WEA`, case-sensitive, in any round.
    AnyMarker,
    /// `DEF` or `W/O` in any round, `WEA` only in finals; case-insensitive.
    PlayerMatches,
    /// Any marker, case-insensitive.
    AnyMarkerIgnoreCase,
    /// Only `WEA`, case-sensitive.
    Unfinished,
}

impl ScoreExclusion {
    pub fn sql_condition(self) -> &'static str {
        match self {
            ScoreExclusion::AnyMarker => {
                "instr(COALESCE(score, ''), 'DEF') = 0 \
                 AND instr(COALESCE(score, ''), 'W/O') = 0 \
                 AND instr(COALESCE(score, ''), 'WEA') = 0"
            }
            ScoreExclusion::PlayerMatches => {
                "instr(upper(COALESCE(score, '')), 'DEF') = 0 \
                 AND instr(upper(COALESCE(score, '')), 'W/O') = 0 \
                 AND NOT (COALESCE(round, '') = 'F' AND instr(upper(COALESCE(score, '')), 'WEA') > 0)"
            }
            ScoreExclusion::AnyMarkerIgnoreCase => {
                "instr(upper(COALESCE(score, '')), 'DEF') = 0 \
                 AND instr(upper(COALESCE(score, '')), 'W/O') = 0 \
                 AND instr(upper(COALESCE(score, '')), 'WEA') = 0"
            }
            ScoreExclusion::Unfinished => "instr(COALESCE(score, ''), 'WEA') = 0",
        }
    }

    pub fn is_valid(self, score: Option<&str>, round: Option<&str>) -> bool {
        let Some(score) = score else {
            return true;
        };
        let upper = score.to_uppercase();

        match self {
            ScoreExclusion::AnyMarker => {
                !score.contains(DEFAULT) && !score.contains(WALKOVER) && !score.contains(UNFINISHED)
            }
            ScoreExclusion::PlayerMatches => {
                let weather_final = round == Some(FINAL_ROUND) && upper.contains(UNFINISHED);
                !upper.contains(DEFAULT) && !upper.contains(WALKOVER) && !weather_final
            }
            ScoreExclusion::AnyMarkerIgnoreCase => {
                !upper.contains(DEFAULT) && !upper.contains(WALKOVER) && !upper.contains(UNFINISHED)
            }
            ScoreExclusion::Unfinished => !score.contains(UNFINISHED),
        }
    }
}

/// True when the score string records a match that was not played out.
pub fn has_incomplete_marker(score: &str) -> bool {
    !ScoreExclusion::AnyMarkerIgnoreCase.is_valid(Some(score), None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    const CASES: &[(Option<&str>, Option<&str>)] = &[
        (Some("6-4 6-3"), Some("R32")),
        (Some("W/O"), Some("R32")),
        (Some("6-4 def"), Some("QF")),
        (Some("6-4 2-1 WEA"), Some("F")),
        (Some("6-4 2-1 WEA"), Some("SF")),
        (Some("6-4 2-1 wea"), Some("F")),
        (Some("DEF"), None),
        (None, Some("F")),
        (Some("7-6(5) 6-7(3) 6-2"), None),
    ];

    fn sql_keeps(conn: &Connection, exclusion: ScoreExclusion, score: Option<&str>, round: Option<&str>) -> bool {
        let sql = format!(
            "SELECT COUNT(*) FROM (SELECT ?1 AS score, ?2 AS round) WHERE {}",
            exclusion.sql_condition()
        );
        let count: i64 = conn
            .query_row(&sql, rusqlite::params![score, round], |r| r.get(0))
            .unwrap();
        count == 1
    }

    #[test]
    fn test_player_matches_drops_only_weather_finals() {
        let exclusion = ScoreExclusion::PlayerMatches;
        assert!(exclusion.is_valid(Some("6-4 2-1 WEA"), Some("SF")));
        assert!(!exclusion.is_valid(Some("6-4 2-1 wea"), Some("F")));
        assert!(!exclusion.is_valid(Some("6-4 def"), Some("R16")));
        assert!(exclusion.is_valid(None, Some("F")));
    }

    #[test]
    fn test_any_marker_is_case_sensitive() {
        assert!(ScoreExclusion::AnyMarker.is_valid(Some("6-4 def"), None));
        assert!(!ScoreExclusion::AnyMarker.is_valid(Some("6-4 DEF"), None));
        assert!(!ScoreExclusion::AnyMarkerIgnoreCase.is_valid(Some("6-4 def"), None));
    }

    #[test]
    fn test_sql_matches_predicate() {
        let conn = Connection::open_in_memory().unwrap();
        let exclusions = [
            ScoreExclusion::AnyMarker,
            ScoreExclusion::PlayerMatches,
            ScoreExclusion::AnyMarkerIgnoreCase,
            ScoreExclusion::Unfinished,
        ];

        for exclusion in exclusions {
            for &(score, round) in CASES {
                assert_eq!(
                    sql_keeps(&conn, exclusion, score, round),
                    exclusion.is_valid(score, round),
                    "{exclusion:?} disagrees on {score:?} / {round:?}"
                );
            }
        }
    }

    #[test]
    fn test_incomplete_marker() {
        assert!(has_incomplete_marker("W/O"));
        assert!(has_incomplete_marker("6-3 1-0 Def."));
        assert!(!has_incomplete_marker("6-3 6-0"));
    }
}
