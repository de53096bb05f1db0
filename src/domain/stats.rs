use crate::database::models::ResultRow;

use super::scores::FINAL_ROUND;

/// Finals of these team competitions are not titles.
const TEAM_COMPETITIONS: [&str; 4] = ["Davis Cup", "World Team Cup", "Laver Cup", "ATP Cup"];

/// Counts split by the levels and surfaces shown on a player page.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub all: u32,
    pub grand_slam: u32,
    pub masters1000: u32,
    pub hard: u32,
    pub grass: u32,
    pub clay: u32,
    pub carpet: u32,
}

impl Tally {
    fn add(&mut self, level: Option<&str>, surface: Option<&str>) {
        self.all += 1;
        match level {
            Some("G") => self.grand_slam += 1,
            Some("M") => self.masters1000 += 1,
            _ => {}
        }
        match surface {
            Some("Hard") => self.hard += 1,
            Some("Grass") => self.grass += 1,
            Some("Clay") => self.clay += 1,
            Some("Carpet") => self.carpet += 1,
            _ => {}
        }
    }
}

/// Matches played, matches won and titles of one player.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PlayerStats {
    pub total: Tally,
    pub wins: Tally,
    pub titles: Tally,
}

impl PlayerStats {
    pub fn tally(player_id: &str, rows: &[ResultRow]) -> Self {
        let mut stats = Self::default();

        for row in rows {
            let level = row.tourney_level.as_deref();
            let surface = row.surface.as_deref();
            stats.total.add(level, surface);

            if row.winner_id != player_id {
                continue;
            }
            stats.wins.add(level, surface);

            let team_event = row
                .tourney_name
                .as_deref()
                .is_some_and(|name| TEAM_COMPETITIONS.iter().any(|team| name.contains(team)));
            if row.round.as_deref() == Some(FINAL_ROUND) && !team_event {
                stats.titles.add(level, surface);
            }
        }

        stats
    }
}

/// Share of `wins` in `total` as a percentage; zero when nothing was played.
pub fn win_percentage(wins: u32, total: u32) -> f64 {
    if total == 0 {
        0.0
    } else {
        f64::from(wins) / f64::from(total) * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(winner: &str, name: &str, level: &str, surface: &str, round: &str) -> ResultRow {
        ResultRow {
            winner_id: winner.to_string(),
            tourney_name: Some(name.to_string()),
            tourney_level: Some(level.to_string()),
            surface: Some(surface.to_string()),
            round: Some(round.to_string()),
        }
    }

    #[test]
    fn test_breakdown_by_level_and_surface() {
        let rows = vec![
            row("A", "Wimbledon", "G", "Grass", "F"),
            row("A", "Wimbledon", "G", "Grass", "SF"),
            row("B", "Rome Masters", "M", "Clay", "QF"),
            row("A", "Paris Masters", "M", "Carpet", "F"),
        ];

        let stats = PlayerStats::tally("A", &rows);

        assert_eq!(stats.total.all, 4);
        assert_eq!(stats.total.clay, 1);
        assert_eq!(stats.wins.all, 3);
        assert_eq!(stats.wins.grand_slam, 2);
        assert_eq!(stats.wins.masters1000, 1);
        assert_eq!(stats.titles.all, 2);
        assert_eq!(stats.titles.grass, 1);
        assert_eq!(stats.titles.carpet, 1);
    }

    #[test]
    fn test_team_finals_are_not_titles() {
        let rows = vec![
            row("A", "Davis Cup WG F: ESP vs ARG", "D", "Clay", "F"),
            row("A", "Laver Cup", "A", "Hard", "F"),
        ];

        let stats = PlayerStats::tally("A", &rows);

        assert_eq!(stats.wins.all, 2);
        assert_eq!(stats.titles.all, 0);
    }

    #[test]
    fn test_percentage_of_nothing_is_zero() {
        assert_eq!(win_percentage(0, 0), 0.0);
        assert_eq!(win_percentage(3, 4), 75.0);
    }
}
