//! Local harness: head-to-head matchups and round-robin tournaments.
mod leaderboard;
mod matchup;
mod tournament;

pub use leaderboard::*;
pub use matchup::*;
pub use tournament::*;
