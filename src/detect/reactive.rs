use super::*;

/// Reactive-counter detector.
///
/// Fires when, in every round after the first, the opponent threw the
/// move that beats what we threw the round before. Predicts they beat
/// our last move again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reactive {
    minimum: usize,
}

impl Reactive {
    pub fn new(minimum: usize) -> Self {
        Self { minimum }
    }
}

impl Default for Reactive {
    fn default() -> Self {
        Self::new(REACTIVE_MINIMUM)
    }
}

impl Detector for Reactive {
    fn predict(&self, history: &History) -> Option<Move> {
        if history.len() < self.minimum.max(2) {
            return None;
        }
        history
            .their_moves()
            .skip(1)
            .zip(history.my_moves())
            .all(|(theirs, mine)| theirs == mine.counter())
            .then(|| history.last().map(|turn| turn.mine().counter()))
            .flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Move::*;

    #[test]
    fn counters_last_move() {
        let history = History::from_iter([
            (Rock, Scissors),
            (Scissors, Paper),
            (Paper, Rock),
            (Paper, Scissors),
            (Rock, Scissors),
        ]);
        assert_eq!(Reactive::default().predict(&history), Some(Paper));
    }

    #[test]
    fn mirror_is_not_counter() {
        let history = History::from_iter([(Rock, Paper), (Paper, Rock), (Scissors, Paper)]);
        assert_eq!(Reactive::default().predict(&history), None);
    }
}
