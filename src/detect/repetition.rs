use super::*;

/// What a repetition search compares.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// Whole turns: our move and theirs.
    Full,
    /// The opponent's moves alone.
    Theirs,
}

/// Which window lengths get tried first.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Order {
    #[default]
    LongestFirst,
    ShortestFirst,
}

/// An inclusive range of pattern lengths and the order to try them in.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Windows {
    pub shortest: usize,
    pub longest: usize,
    #[serde(default)]
    pub order: Order,
}

impl Windows {
    pub fn long() -> Self {
        Self {
            shortest: LONG_WINDOW_MIN,
            longest: LONG_WINDOW_MAX,
            order: Order::LongestFirst,
        }
    }
    pub fn short() -> Self {
        Self {
            shortest: SHORT_WINDOW_MIN,
            longest: SHORT_WINDOW_MAX,
            order: Order::LongestFirst,
        }
    }
    /// Window lengths in search order.
    pub fn lengths(&self) -> Vec<usize> {
        let range = self.shortest..=self.longest;
        match self.order {
            Order::LongestFirst => range.rev().collect(),
            Order::ShortestFirst => range.collect(),
        }
    }
}

/// Exact-repetition detector.
///
/// Takes the most recent `k` rounds as a pattern and looks for the same
/// sequence earlier in the history. For each window length, candidate
/// positions are scanned from the present backward, so when the pattern
/// occurred more than once the most recent occurrence wins. Predicts the
/// opponent move that immediately followed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Repetition {
    scope: Scope,
    windows: Windows,
    minimum: usize,
}

impl Repetition {
    pub fn new(scope: Scope, windows: Windows, minimum: usize) -> Self {
        Self {
            scope,
            windows,
            minimum,
        }
    }
    /// Index of the element that followed the most recent earlier
    /// occurrence of the sequence's own suffix.
    fn recall<T>(seq: &[T], windows: &Windows) -> Option<usize>
    where
        T: PartialEq,
    {
        let n = seq.len();
        windows
            .lengths()
            .into_iter()
            .filter(|&k| k > 0 && k < n)
            .find_map(|k| {
                let pattern = &seq[n - k..];
                (0..n - k)
                    .rev()
                    .find(|&s| &seq[s..s + k] == pattern)
                    .map(|s| s + k)
            })
    }
}

impl Detector for Repetition {
    fn predict(&self, history: &History) -> Option<Move> {
        if history.len() < self.minimum {
            return None;
        }
        let follow = match self.scope {
            Scope::Full => Self::recall(history.turns(), &self.windows),
            Scope::Theirs => {
                let ref moves = history.their_moves().collect::<Vec<_>>();
                Self::recall(moves, &self.windows)
            }
        };
        follow.map(|i| history.turn_at(i).theirs())
    }
}
