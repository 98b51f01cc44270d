use crate::*;

/// Where the pipeline stands with respect to a given history.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Phase {
    /// Nothing has been played yet.
    Cold,
    /// Losses have piled up past the threshold; prediction is switched off.
    Guarded,
    /// Detectors run in priority order.
    Detecting,
}

impl Phase {
    /// Guarded takes precedence: a loss threshold above zero guards
    /// even the opening round.
    pub fn of(history: &History, loss_threshold: Payoff) -> Self {
        match (history.profit() < loss_threshold, history.is_empty()) {
            (true, _) => Phase::Guarded,
            (false, true) => Phase::Cold,
            (false, false) => Phase::Detecting,
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Phase::Cold => write!(f, "cold"),
            Phase::Guarded => write!(f, "guarded"),
            Phase::Detecting => write!(f, "detecting"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Move::*;

    #[test]
    fn empty_history_is_cold() {
        assert_eq!(Phase::of(&History::default(), LOSS_THRESHOLD), Phase::Cold);
    }

    #[test]
    fn one_round_is_enough_to_detect() {
        let history = History::from_iter([(Rock, Paper)]);
        assert_eq!(Phase::of(&history, LOSS_THRESHOLD), Phase::Detecting);
    }

    #[test]
    fn guard_is_strict() {
        let mut history = History::default();
        history.record(Rock, Paper, LOSS_THRESHOLD);
        assert_eq!(Phase::of(&history, LOSS_THRESHOLD), Phase::Detecting);
        history.record(Rock, Paper, -1);
        assert_eq!(Phase::of(&history, LOSS_THRESHOLD), Phase::Guarded);
    }
}
