use super::*;

/// Constant-play detector.
///
/// If every opponent move in the inspected window is the same, predict
/// that it keeps coming. The window is the trailing `window` rounds, or
/// the whole history when unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Constant {
    window: Option<usize>,
    minimum: usize,
}

impl Constant {
    pub fn new(window: Option<usize>, minimum: usize) -> Self {
        Self { window, minimum }
    }
}

impl Default for Constant {
    fn default() -> Self {
        Self::new(Some(CONSTANT_WINDOW), PATTERN_MINIMUM)
    }
}

impl Detector for Constant {
    fn predict(&self, history: &History) -> Option<Move> {
        if history.len() < self.minimum {
            return None;
        }
        let window = match self.window {
            Some(k) => history.suffix(k),
            None => history.turns(),
        };
        let first = window.first()?.theirs();
        window
            .iter()
            .all(|turn| turn.theirs() == first)
            .then_some(first)
    }
}
