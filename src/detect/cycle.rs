use super::*;

/// Deterministic-cycle detector.
///
/// Looks for the smallest period `p` with `2p < n` such that the
/// opponent's entire history repeats with period `p`, i.e. every round
/// agrees with the round `p` before it. A single exception anywhere
/// rules a candidate period out. The prediction is the move sitting at
/// residue `n mod p` of the cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cycle {
    minimum: usize,
}

impl Cycle {
    pub fn new(minimum: usize) -> Self {
        Self { minimum }
    }
    /// Smallest period that explains the whole sequence.
    pub fn period(moves: &[Move]) -> Option<usize> {
        let n = moves.len();
        (1..)
            .take_while(|p| 2 * p < n)
            .find(|&p| (p..n).all(|i| moves[i] == moves[i - p]))
    }
}

impl Default for Cycle {
    fn default() -> Self {
        Self::new(PATTERN_MINIMUM)
    }
}

impl Detector for Cycle {
    fn predict(&self, history: &History) -> Option<Move> {
        if history.len() < self.minimum {
            return None;
        }
        let moves = history.their_moves().collect::<Vec<_>>();
        Self::period(&moves).map(|p| moves[moves.len() % p])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Move::*;

    fn against(theirs: &str) -> History {
        Move::parse(theirs)
            .expect("valid moves")
            .into_iter()
            .map(|t| (Rock, t))
            .collect()
    }

    #[test]
    fn period_three() {
        let history = against("RPSRPSRPS");
        let moves = history.their_moves().collect::<Vec<_>>();
        assert_eq!(Cycle::period(&moves), Some(3));
        assert_eq!(Cycle::default().predict(&history), Some(Rock));
    }

    #[test]
    fn phase_follows_length() {
        assert_eq!(Cycle::default().predict(&against("RPSRPSRP")), Some(Scissors));
        assert_eq!(Cycle::default().predict(&against("RRPPSSRRPPSSR")), Some(Rock));
        assert_eq!(Cycle::default().predict(&against("RRPPSSRRPPSSRR")), Some(Paper));
    }

    #[test]
    fn smallest_period_wins() {
        let moves = Move::parse("PPPPPPPP").unwrap();
        assert_eq!(Cycle::period(&moves), Some(1));
    }

    #[test]
    fn one_exception_anywhere() {
        assert_eq!(Cycle::default().predict(&against("SPSRPSRPSRPS")), None);
    }

    #[test]
    fn period_must_repeat_at_least_twice() {
        // RPS RP would need p = 3, but 2 * 3 is not below 5
        assert_eq!(Cycle::default().predict(&against("RPSRP")), None);
    }
}
