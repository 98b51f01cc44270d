use crate::*;
use rand::rngs::SmallRng;

/// The predicting bot.
///
/// Owns the matchup [`History`] and hands it, read-only, to its
/// [`Pipeline`] whenever the harness asks for a move. Nothing survives
/// from one matchup to the next except the configuration and the
/// random generator.
pub struct Robot<R = SmallRng> {
    history: History,
    pipeline: Pipeline<R>,
}

impl Robot<SmallRng> {
    pub fn new(settings: &Settings) -> Self {
        Self::from(Pipeline::new(settings))
    }
    pub fn seeded(settings: &Settings, seed: u64) -> Self {
        Self::from(Pipeline::seeded(settings, seed))
    }
}

impl<R> From<Pipeline<R>> for Robot<R> {
    fn from(pipeline: Pipeline<R>) -> Self {
        Self {
            pipeline,
            history: History::default(),
        }
    }
}

impl<R> Robot<R> {
    pub fn history(&self) -> &History {
        &self.history
    }
}

impl<R> Robot<R>
where
    R: rand::Rng,
{
    /// Next move along with the reason for it.
    pub fn decide(&mut self) -> Decision {
        self.pipeline.decide(&self.history)
    }
}

impl<R> Bot for Robot<R>
where
    R: rand::Rng,
{
    fn name(&self) -> String {
        "robot".to_string()
    }
    fn on_matchup_start(&mut self) {
        self.history.clear();
    }
    fn on_round_result(&mut self, mine: Move, theirs: Move, payoff: Payoff, _: Clock) {
        let before = self.pipeline.phase(&self.history);
        self.history.record(mine, theirs, payoff);
        let after = self.pipeline.phase(&self.history);
        if before != Phase::Guarded && after == Phase::Guarded {
            log::warn!("[robot] profit {:+}, switching to random play", self.history.profit());
        }
    }
    fn request_action(&mut self, _: Clock) -> Move {
        let decision = self.decide();
        log::debug!("[robot] round {:>4} {}", self.history.len() + 1, decision);
        decision.action
    }
}
