use crate::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Throws uniformly at random. Unexploitable and unexploiting.
pub struct Fish(SmallRng);

impl Fish {
    pub fn new() -> Self {
        Self(SmallRng::from_os_rng())
    }
    pub fn seeded(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }
}

impl Default for Fish {
    fn default() -> Self {
        Self::new()
    }
}

impl Bot for Fish {
    fn name(&self) -> String {
        "fish".to_string()
    }
    fn on_matchup_start(&mut self) {}
    fn on_round_result(&mut self, _: Move, _: Move, _: Payoff, _: Clock) {}
    fn request_action(&mut self, _: Clock) -> Move {
        Move::sample(&mut self.0)
    }
}
