use crate::*;

/// Walks a fixed sequence of moves over and over, restarting it at
/// every new matchup.
#[derive(Debug, Clone)]
pub struct Cycler {
    pattern: Vec<Move>,
    round: usize,
}

impl Cycler {
    /// Fails on an empty pattern; there is nothing to cycle through.
    pub fn new(pattern: Vec<Move>) -> anyhow::Result<Self> {
        anyhow::ensure!(!pattern.is_empty(), "empty cycle pattern");
        Ok(Self { pattern, round: 0 })
    }
}

/// Two of each, the classic "repetitive" opponent.
impl Default for Cycler {
    fn default() -> Self {
        Self {
            round: 0,
            pattern: vec![
                Move::Rock,
                Move::Rock,
                Move::Paper,
                Move::Paper,
                Move::Scissors,
                Move::Scissors,
            ],
        }
    }
}

impl TryFrom<&str> for Cycler {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::new(Move::parse(s)?)
    }
}

impl Bot for Cycler {
    fn name(&self) -> String {
        let pattern = self.pattern.iter().map(|m| m.to_string()).collect::<String>();
        format!("cycle:{}", pattern)
    }
    fn on_matchup_start(&mut self) {
        self.round = 0;
    }
    fn on_round_result(&mut self, _: Move, _: Move, _: Payoff, _: Clock) {
        self.round += 1;
    }
    fn request_action(&mut self, _: Clock) -> Move {
        self.pattern[self.round % self.pattern.len()]
    }
}
