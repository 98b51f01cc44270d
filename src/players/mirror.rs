use crate::*;

/// Answers each round with whatever the other side threw the round
/// before. Opens with `Rock`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mirror {
    last: Option<Move>,
}

impl Bot for Mirror {
    fn name(&self) -> String {
        "mirror".to_string()
    }
    fn on_matchup_start(&mut self) {
        self.last = None;
    }
    fn on_round_result(&mut self, _: Move, theirs: Move, _: Payoff, _: Clock) {
        self.last = Some(theirs);
    }
    fn request_action(&mut self, _: Clock) -> Move {
        self.last.unwrap_or(Move::Rock)
    }
}

/// Answers each round with the move that beats whatever the other side
/// threw the round before. Opens with `Rock`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Beater {
    last: Option<Move>,
}

impl Bot for Beater {
    fn name(&self) -> String {
        "beater".to_string()
    }
    fn on_matchup_start(&mut self) {
        self.last = None;
    }
    fn on_round_result(&mut self, _: Move, theirs: Move, _: Payoff, _: Clock) {
        self.last = Some(theirs);
    }
    fn request_action(&mut self, _: Clock) -> Move {
        self.last.map(Move::counter).unwrap_or(Move::Rock)
    }
}
