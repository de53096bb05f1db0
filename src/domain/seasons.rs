use chrono::NaiveDate;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

use crate::database::models::SeasonMatch;
use super::scores::FINAL_ROUND;

/// A player ranked by the number of seasons that reached a threshold.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonLeader {
    pub id: String,
    pub name: String,
    pub ioc: String,
    pub total_seasons: usize,
    pub seasons_list: Vec<String>,
}

#[derive(Debug, Default)]
struct PlayerSeasons {
    name: String,
    ioc: String,
    per_year: BTreeMap<i32, u32>,
}

/// Counts occurrences (titles, rounds reached, ...) per player per season.
#[derive(Debug, Default)]
pub struct SeasonCounter {
    players: HashMap<String, PlayerSeasons>,
    skip_unnamed: bool,
}

impl SeasonCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Leave out players whose name is blank.
    pub fn skip_unnamed(mut self) -> Self {
        self.skip_unnamed = true;
        self
    }

    /// Rows without a player id or a year are ignored. The first name and
    /// country seen for a player are kept.
    pub fn record(&mut self, id: &str, name: Option<&str>, ioc: Option<&str>, year: Option<i32>) {
        let Some(year) = year else { return };
        if id.is_empty() {
            return;
        }

        let entry = self.players.entry(id.to_string()).or_insert_with(|| PlayerSeasons {
            name: name.unwrap_or_default().to_string(),
            ioc: ioc.unwrap_or_default().to_string(),
            per_year: BTreeMap::new(),
        });
        *entry.per_year.entry(year).or_insert(0) += 1;
    }

    /// Players with at least one season reaching `min_per_season`, most
    /// qualifying seasons first, then by name (byte order).
    pub fn into_leaders(self, min_per_season: u32) -> Vec<SeasonLeader> {
        let skip_unnamed = self.skip_unnamed;
        let mut leaders: Vec<SeasonLeader> = self
            .players
            .into_iter()
            .filter(|(_, seasons)| !skip_unnamed || !seasons.name.trim().is_empty())
            .filter_map(|(id, seasons)| {
                let seasons_list: Vec<String> = seasons
                    .per_year
                    .iter()
                    .filter(|&(_, &count)| count >= min_per_season)
                    .map(|(year, _)| year.to_string())
                    .collect();

                if seasons_list.is_empty() {
                    return None;
                }

                Some(SeasonLeader {
                    id,
                    name: seasons.name,
                    ioc: seasons.ioc,
                    total_seasons: seasons_list.len(),
                    seasons_list,
                })
            })
            .collect();

        leaders.sort_by(|a, b| {
            b.total_seasons
                .cmp(&a.total_seasons)
                .then_with(|| a.name.cmp(&b.name))
        });
        leaders
    }
}

/// One tournament of a season with its final.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonTournament {
    pub key: String,
    pub name: String,
    pub date: Option<NaiveDate>,
    pub surface: Option<String>,
    pub level: Option<String>,
    pub matches: usize,
    pub winner: String,
    pub loser: String,
    pub score: String,
    pub tourney_id: String,
    #[serde(rename = "extractedId")]
    pub extracted_id: String,
    pub winner_ioc: String,
    pub loser_ioc: String,
    pub draw_size: i32,
}

/// Group a season's matches by tournament name and start date. Matches
/// without a tournament name are ignored. Tournaments are ordered by date,
/// undated first, then by name.
pub fn season_tournaments(matches: Vec<SeasonMatch>) -> Vec<SeasonTournament> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut grouped: Vec<(String, Vec<SeasonMatch>)> = Vec::new();

    for m in matches {
        let Some(name) = m.tourney_name.as_deref() else {
            continue;
        };
        let date = m
            .tourney_date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "unknown".to_string());
        let key = format!("{name}__{date}");

        match index.get(&key) {
            Some(&idx) => grouped[idx].1.push(m),
            None => {
                index.insert(key.clone(), grouped.len());
                grouped.push((key, vec![m]));
            }
        }
    }

    let mut tournaments: Vec<SeasonTournament> = grouped
        .into_iter()
        .map(|(key, matches)| {
            let first = &matches[0];
            let final_match = matches.iter().find(|m| m.round.as_deref() == Some(FINAL_ROUND));
            let extracted_id = first
                .tourney_id
                .rsplit('-')
                .next()
                .unwrap_or(&first.tourney_id)
                .to_string();

            SeasonTournament {
                name: first.tourney_name.clone().unwrap_or_default(),
                date: first.tourney_date,
                surface: first.surface.clone(),
                level: first.tourney_level.clone(),
                matches: matches.len(),
                winner: final_match
                    .and_then(|f| f.winner_name.clone())
                    .unwrap_or_else(|| "Unknown".to_string()),
                loser: final_match
                    .and_then(|f| f.loser_name.clone())
                    .unwrap_or_else(|| "Unknown".to_string()),
                score: final_match
                    .and_then(|f| f.score.clone())
                    .unwrap_or_else(|| "-".to_string()),
                tourney_id: first.tourney_id.clone(),
                extracted_id,
                winner_ioc: final_match.and_then(|f| f.winner_ioc.clone()).unwrap_or_default(),
                loser_ioc: final_match.and_then(|f| f.loser_ioc.clone()).unwrap_or_default(),
                draw_size: first.draw_size.unwrap_or(0),
                key,
            }
        })
        .collect();

    tournaments.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.name.cmp(&b.name)));
    tournaments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn season_match(id: &str, name: Option<&str>, day: Option<u32>, round: &str, winner: &str) -> SeasonMatch {
        SeasonMatch {
            tourney_id: id.to_string(),
            tourney_name: name.map(str::to_string),
            tourney_date: day.and_then(|d| NaiveDate::from_ymd_opt(2024, 1, d)),
            tourney_level: Some("A".to_string()),
            surface: Some("Hard".to_string()),
            draw_size: Some(32),
            round: Some(round.to_string()),
            score: Some("6-4 6-4".to_string()),
            winner_name: Some(winner.to_string()),
            winner_ioc: Some("AUS".to_string()),
            loser_name: Some("Runner Up".to_string()),
            loser_ioc: None,
        }
    }

    #[test]
    fn test_season_tournaments_group_by_name_and_date() {
        let tiles = season_tournaments(vec![
            season_match("2024-339", Some("Brisbane"), Some(8), "SF", "Semi"),
            season_match("2024-339", Some("Brisbane"), Some(8), "F", "Champion"),
            season_match("2024-451", Some("Adelaide"), Some(8), "QF", "Quarter"),
            season_match("2024-301", Some("Hong Kong"), Some(1), "F", "Early"),
            season_match("2024-999", None, Some(1), "F", "Nameless"),
        ]);

        let names: Vec<&str> = tiles.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Hong Kong", "Adelaide", "Brisbane"]);

        let brisbane = &tiles[2];
        assert_eq!(brisbane.key, "Brisbane__2024-01-08");
        assert_eq!(brisbane.matches, 2);
        assert_eq!(brisbane.winner, "Champion");
        assert_eq!(brisbane.winner_ioc, "AUS");
        assert_eq!(brisbane.loser_ioc, "");
        assert_eq!(brisbane.extracted_id, "339");

        let adelaide = &tiles[1];
        assert_eq!(adelaide.winner, "Unknown");
        assert_eq!(adelaide.score, "-");
    }

    #[test]
    fn test_threshold_filters_seasons() {
        let mut counter = SeasonCounter::new();
        for year in [1990, 1990, 1991, 1993, 1993] {
            counter.record("A", Some("Alpha"), Some("SWE"), Some(year));
        }
        counter.record("B", Some("Bravo"), Some("USA"), Some(1990));

        let leaders = counter.into_leaders(2);

        assert_eq!(leaders.len(), 1);
        assert_eq!(leaders[0].id, "A");
        assert_eq!(leaders[0].total_seasons, 2);
        assert_eq!(leaders[0].seasons_list, vec!["1990", "1993"]);
    }

    #[test]
    fn test_ties_break_on_name() {
        let mut counter = SeasonCounter::new();
        counter.record("Z", Some("Zed"), None, Some(2001));
        counter.record("Y", Some("Amy"), None, Some(2002));
        counter.record("X", Some("Max"), None, Some(2001));
        counter.record("X", Some("Max"), None, Some(2003));

        let names: Vec<String> = counter.into_leaders(1).into_iter().map(|l| l.name).collect();

        assert_eq!(names, vec!["Max", "Amy", "Zed"]);
    }

    #[test]
    fn test_rows_without_year_or_id_are_skipped() {
        let mut counter = SeasonCounter::new();
        counter.record("A", Some("Alpha"), None, None);
        counter.record("", Some("Nobody"), None, Some(2000));

        assert!(counter.into_leaders(1).is_empty());
    }

    #[test]
    fn test_blank_names_are_kept_unless_skipped() {
        let mut counter = SeasonCounter::new();
        counter.record("B", Some("  "), None, Some(2000));
        assert_eq!(counter.into_leaders(1).len(), 1);

        let mut counter = SeasonCounter::new().skip_unnamed();
        counter.record("B", Some("  "), None, Some(2000));
        counter.record("C", None, None, Some(2000));
        counter.record("D", Some("Delta"), None, Some(2000));
        let ids: Vec<String> = counter.into_leaders(1).into_iter().map(|l| l.id).collect();
        assert_eq!(ids, vec!["D"]);
    }
}
