//! Moves, rounds, and the running record of a matchup.
mod history;
mod moves;
mod turn;

pub use history::*;
pub use moves::*;
pub use turn::*;
