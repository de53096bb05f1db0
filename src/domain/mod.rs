pub mod rounds;
pub mod scores;
pub mod seasons;
pub mod stats;
pub mod tournaments;

pub use rounds::{round_precedence, sort_by_round};
pub use scores::ScoreExclusion;
pub use seasons::{season_tournaments, SeasonCounter, SeasonLeader, SeasonTournament};
pub use stats::{win_percentage, PlayerStats};
pub use tournaments::{group_tournaments, TournamentGroups};
