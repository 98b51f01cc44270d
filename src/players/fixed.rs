use crate::*;

/// Throws the same move every round.
#[derive(Debug, Clone, Copy)]
pub struct Fixed(pub Move);

impl Bot for Fixed {
    fn name(&self) -> String {
        match self.0 {
            Move::Rock => "rock".to_string(),
            Move::Paper => "paper".to_string(),
            Move::Scissors => "scissors".to_string(),
        }
    }
    fn on_matchup_start(&mut self) {}
    fn on_round_result(&mut self, _: Move, _: Move, _: Payoff, _: Clock) {}
    fn request_action(&mut self, _: Clock) -> Move {
        self.0
    }
}
