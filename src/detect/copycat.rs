use super::*;

/// Copycat detector.
///
/// Fires when, in every round after the first, the opponent threw
/// exactly what we threw the round before. One exception anywhere in
/// the history disqualifies it. Predicts they mirror our last move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Copycat {
    minimum: usize,
}

impl Copycat {
    pub fn new(minimum: usize) -> Self {
        Self { minimum }
    }
}

impl Default for Copycat {
    fn default() -> Self {
        Self::new(REACTIVE_MINIMUM)
    }
}

impl Detector for Copycat {
    fn predict(&self, history: &History) -> Option<Move> {
        if history.len() < self.minimum.max(2) {
            return None;
        }
        history
            .their_moves()
            .skip(1)
            .zip(history.my_moves())
            .all(|(theirs, mine)| theirs == mine)
            .then(|| history.last().map(Turn::mine))
            .flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Move::*;

    #[test]
    fn mirrors_last_move() {
        let history = History::from_iter([
            (Rock, Paper),
            (Paper, Rock),
            (Paper, Paper),
            (Rock, Paper),
            (Scissors, Rock),
        ]);
        assert_eq!(Copycat::default().predict(&history), Some(Scissors));
    }

    #[test]
    fn one_exception_disqualifies() {
        let history = History::from_iter([
            (Rock, Paper),
            (Paper, Rock),
            (Paper, Scissors),
            (Rock, Paper),
            (Scissors, Rock),
        ]);
        assert_eq!(Copycat::default().predict(&history), None);
    }

    #[test]
    fn needs_two_rounds() {
        let history = History::from_iter([(Rock, Rock)]);
        assert_eq!(Copycat::default().predict(&history), None);
    }
}
