use crate::*;

/// Anything that can sit on one side of a matchup.
///
/// The harness drives a bot synchronously: `on_matchup_start` once,
/// then for every round one `request_action` followed by one
/// `on_round_result`. `clock` is the bot's remaining time budget; bots
/// are free to ignore it.
pub trait Bot {
    /// Display name for logs and leaderboards.
    fn name(&self) -> String;
    /// A new matchup begins. Forget everything about the last one.
    fn on_matchup_start(&mut self);
    /// A round just finished. `mine` is what this bot threw.
    fn on_round_result(&mut self, mine: Move, theirs: Move, payoff: Payoff, clock: Clock);
    /// The move to throw in the upcoming round.
    fn request_action(&mut self, clock: Clock) -> Move;
}

impl<B> Bot for Box<B>
where
    B: Bot + ?Sized,
{
    fn name(&self) -> String {
        B::name(self)
    }
    fn on_matchup_start(&mut self) {
        B::on_matchup_start(self)
    }
    fn on_round_result(&mut self, mine: Move, theirs: Move, payoff: Payoff, clock: Clock) {
        B::on_round_result(self, mine, theirs, payoff, clock)
    }
    fn request_action(&mut self, clock: Clock) -> Move {
        B::request_action(self, clock)
    }
}
