//! Append-only record of a matchup.
use super::*;
use crate::Payoff;

/// Every completed round of the current matchup, in order, plus our
/// running profit.
///
/// Turns are appended exactly once and never touched again. Detectors
/// only ever see `&History`. A tally of the opponent's moves is kept
/// alongside the log so frequency queries don't rescan it; `record` is
/// the only writer, so the two can't drift apart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    turns: Vec<Turn>,
    profit: Payoff,
    tally: [usize; 3],
}

impl History {
    /// Appends a completed round and books its payoff.
    pub fn record(&mut self, mine: Move, theirs: Move, payoff: Payoff) {
        self.turns.push(Turn::from((mine, theirs)));
        self.profit += payoff;
        self.tally[u8::from(theirs) as usize] += 1;
    }
    /// Forgets everything. Used between matchups.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Number of completed rounds.
    pub fn len(&self) -> usize {
        self.turns.len()
    }
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
    /// Cumulative payoff over the matchup.
    pub fn profit(&self) -> Payoff {
        self.profit
    }
    /// How many times the opponent has thrown `m`.
    pub fn tally(&self, m: Move) -> usize {
        self.tally[u8::from(m) as usize]
    }

    /// The turn at round `i`.
    ///
    /// Panics if `i` is out of range: callers index from their own
    /// windowing arithmetic, and a bad index there is a bug.
    pub fn turn_at(&self, i: usize) -> Turn {
        match self.turns.get(i) {
            Some(turn) => *turn,
            None => panic!("round {} out of range for history of {}", i, self.len()),
        }
    }
    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }
    /// The last `k` turns, or all of them if fewer have been played.
    pub fn suffix(&self, k: usize) -> &[Turn] {
        &self.turns[self.len().saturating_sub(k)..]
    }

    /// Opponent moves in round order.
    pub fn their_moves(&self) -> impl DoubleEndedIterator<Item = Move> + ExactSizeIterator + Clone + '_ {
        self.turns.iter().map(Turn::theirs)
    }
    /// Our moves in round order.
    pub fn my_moves(&self) -> impl DoubleEndedIterator<Item = Move> + ExactSizeIterator + Clone + '_ {
        self.turns.iter().map(Turn::mine)
    }
}

/// Replays a sequence of rounds, scoring each from our side.
impl FromIterator<(Move, Move)> for History {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (Move, Move)>,
    {
        iter.into_iter()
            .fold(Self::default(), |mut history, (mine, theirs)| {
                history.record(mine, theirs, mine.outcome(theirs));
                history
            })
    }
}

impl std::fmt::Display for History {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mine = self.my_moves().map(|m| m.to_string()).collect::<String>();
        let theirs = self.their_moves().map(|m| m.to_string()).collect::<String>();
        writeln!(f, "mine   {}", mine)?;
        writeln!(f, "theirs {}", theirs)?;
        write!(f, "profit {:+}", self.profit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Move::*;

    fn sample() -> History {
        History::from_iter([(Rock, Scissors), (Paper, Paper), (Scissors, Rock), (Rock, Paper)])
    }

    #[test]
    fn record_accumulates_profit() {
        let mut history = History::default();
        history.record(Rock, Scissors, 1);
        history.record(Rock, Paper, -1);
        history.record(Paper, Rock, 1);
        assert_eq!(history.len(), 3);
        assert_eq!(history.profit(), 1);
        assert_eq!(history.turn_at(1), Turn::from((Rock, Paper)));
    }

    #[test]
    fn replay_scores_from_our_side() {
        assert_eq!(sample().profit(), 1 + 0 - 1 - 1);
    }

    #[test]
    fn tally_matches_log() {
        let history = sample();
        for m in Move::all() {
            let count = history.their_moves().filter(|t| *t == m).count();
            assert_eq!(history.tally(m), count);
        }
    }

    #[test]
    fn suffix_saturates() {
        let history = sample();
        assert_eq!(history.suffix(2).len(), 2);
        assert_eq!(history.suffix(2)[1], Turn::from((Rock, Paper)));
        assert_eq!(history.suffix(10).len(), 4);
        assert!(History::default().suffix(3).is_empty());
    }

    #[test]
    fn projections_restart() {
        let history = sample();
        let theirs = history.their_moves();
        assert_eq!(theirs.clone().count(), 4);
        assert_eq!(theirs.collect::<Vec<_>>(), vec![Scissors, Paper, Rock, Paper]);
        assert_eq!(history.my_moves().last(), Some(Rock));
    }

    #[test]
    fn clear_resets() {
        let mut history = sample();
        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.profit(), 0);
        assert_eq!(history.tally(Paper), 0);
    }

    #[test]
    #[should_panic]
    fn turn_at_out_of_range() {
        sample().turn_at(4);
    }
}
