/// Main-draw rounds from first to last.
const ROUND_ORDER: [(&str, u16); 8] = [
    ("R256", 1),
    ("R128", 2),
    ("R64", 3),
    ("R32", 4),
    ("R16", 5),
    ("QF", 6),
    ("SF", 7),
    ("F", 8),
];

/// Precedence given to round robin, bronze medal and anything unrecognised.
pub const UNKNOWN_ROUND: u16 = 999;

pub fn round_precedence(round: Option<&str>) -> u16 {
    round
        .and_then(|r| ROUND_ORDER.iter().find(|(name, _)| *name == r))
        .map(|(_, order)| *order)
        .unwrap_or(UNKNOWN_ROUND)
}

/// Stable sort, first round first. Matches in the same round keep their order.
pub fn sort_by_round<T, F>(items: &mut [T], round_of: F)
where
    F: Fn(&T) -> Option<&str>,
{
    items.sort_by_key(|item| round_precedence(round_of(item)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_rounds_are_ordered() {
        let rounds = ["R256", "R128", "R64", "R32", "R16", "QF", "SF", "F"];
        let orders: Vec<u16> = rounds.iter().map(|r| round_precedence(Some(r))).collect();

        assert!(orders.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_unknown_rounds_sort_last_and_stay_stable() {
        let mut matches = vec![
            ("a", Some("F")),
            ("b", Some("RR")),
            ("c", Some("R32")),
            ("d", None),
            ("e", Some("SF")),
            ("f", Some("R32")),
        ];

        sort_by_round(&mut matches, |m| m.1);

        let ids: Vec<&str> = matches.iter().map(|m| m.0).collect();
        assert_eq!(ids, vec!["c", "f", "e", "a", "b", "d"]);
    }
}
