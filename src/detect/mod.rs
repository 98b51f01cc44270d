//! Opponent pattern detectors.
//!
//! Each detector looks at the full [`History`] for one specific kind of
//! predictable behavior and, if it sees it, names the move it expects
//! the opponent to throw next. Detectors never say what *we* should
//! throw; the pipeline counters whatever they predict.
//!
//! # Catalogue
//!
//! - [`Constant`]: the opponent keeps throwing the same move
//! - [`Copycat`]: the opponent repeats our previous move
//! - [`Reactive`]: the opponent beats our previous move
//! - [`Cycle`]: the opponent's whole history is periodic
//! - [`Repetition`]: the recent past happened before; assume it continues the same way
//! - [`Bias`]: one move is thrown more often than a threshold allows
//!
//! All detectors are stateless and gated on a minimum history length,
//! below which they stay silent rather than guess from too little data.

mod bias;
mod constant;
mod copycat;
mod cycle;
mod reactive;
mod repetition;

pub use bias::*;
pub use constant::*;
pub use copycat::*;
pub use cycle::*;
pub use reactive::*;
pub use repetition::*;

use crate::*;

/// A stateless predictor of the opponent's next move.
pub trait Detector {
    /// The opponent's expected next move, or `None` for no opinion.
    fn predict(&self, history: &History) -> Option<Move>;
}

impl<D> Detector for Box<D>
where
    D: Detector + ?Sized,
{
    fn predict(&self, history: &History) -> Option<Move> {
        D::predict(self, history)
    }
}
