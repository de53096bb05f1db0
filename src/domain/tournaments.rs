use serde::Serialize;
use std::collections::HashSet;

use crate::database::models::Tournament;

const SLAM_ORDER: [&str; 4] = ["Australian Open", "Roland Garros", "Wimbledon", "US Open"];

const MASTERS_ORDER: [&str; 9] = [
    "Indian Wells Masters",
    "Miami Masters",
    "Monte Carlo Masters",
    "Madrid Masters",
    "Rome Masters",
    "Canada Masters",
    "Cincinnati Masters",
    "Shanghai Masters",
    "Paris Masters",
];

/// Second Australian Open of 1977, listed with the main one.
const SPLIT_SLAM_EDITION: &str = "Australian Open-2";

const HISTORIC_NAMES: [(&str, &str); 5] = [
    ("Australian Championships", "Australian Open"),
    ("Australia Open", "Australian Open"),
    ("French Championships", "Roland Garros"),
    ("British Championships", "Wimbledon"),
    ("US Championships", "US Open"),
];

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentGroups {
    pub grand_slams: Vec<Tournament>,
    pub masters1000: Vec<Tournament>,
    pub finals: Vec<Tournament>,
    pub olympics: Vec<Tournament>,
    pub others: Vec<Tournament>,
}

/// Map historic tournament names onto their current one.
pub fn normalize_name(name: &str) -> String {
    HISTORIC_NAMES
        .iter()
        .fold(name.to_string(), |acc, (old, new)| acc.replace(old, new))
        .trim()
        .to_string()
}

/// Split the catalogue into the groups shown on the tournaments page.
/// Input is expected in id order.
pub fn group_tournaments(tournaments: Vec<Tournament>) -> TournamentGroups {
    let mut groups = TournamentGroups::default();

    for mut tournament in tournaments {
        match tournament.category.as_deref() {
            Some("G") => {
                if tournament.name != SPLIT_SLAM_EDITION {
                    tournament.name = normalize_name(&tournament.name);
                    groups.grand_slams.push(tournament);
                }
            }
            Some("M") => {
                if MASTERS_ORDER.contains(&tournament.name.as_str()) {
                    groups.masters1000.push(tournament);
                }
            }
            Some("F") => {
                tournament.name = normalize_name(&tournament.name);
                groups.finals.push(tournament);
            }
            Some("O") => {
                tournament.name = normalize_name(&tournament.name);
                groups.olympics.push(tournament);
            }
            _ => {
                tournament.name = normalize_name(&tournament.name);
                groups.others.push(tournament);
            }
        }
    }

    groups.grand_slams = unique_by_name(groups.grand_slams);
    groups
        .grand_slams
        .sort_by_key(|t| position_in(&SLAM_ORDER, &t.name));

    groups.masters1000 = unique_by_name(groups.masters1000);
    groups
        .masters1000
        .sort_by_key(|t| position_in(&MASTERS_ORDER, &t.name));

    groups.finals = unique_by_name(groups.finals);
    groups.olympics = unique_by_name(groups.olympics);
    groups.others = unique_by_name(groups.others);
    groups
}

fn unique_by_name(tournaments: Vec<Tournament>) -> Vec<Tournament> {
    let mut seen = HashSet::new();
    tournaments
        .into_iter()
        .filter(|t| seen.insert(normalize_name(&t.name)))
        .collect()
}

fn position_in(order: &[&str], name: &str) -> usize {
    order.iter().position(|n| *n == name).unwrap_or(order.len())
}
