use crate::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Why a move was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// A detector predicted `predicted`; we threw its counter.
    Detector { kind: Kind, predicted: Move },
    /// Uniform random, either because of the phase or because no detector fired.
    Random(Phase),
}

/// A move together with the reason for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub action: Move,
    pub source: Source,
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.source {
            Source::Detector { kind, predicted } => {
                write!(f, "{} (counter {} via {})", self.action, predicted, kind)
            }
            Source::Random(phase) => write!(f, "{} (random, {})", self.action, phase),
        }
    }
}

/// Ordered detector battery with a uniform random fallback.
///
/// Given the same history, the non-random branch is fully deterministic:
/// detectors run in priority order and the first prediction wins. The
/// random source is only drawn from when no prediction is used, so a
/// seeded generator makes whole matchups reproducible.
pub struct Pipeline<R = SmallRng> {
    loss_threshold: Payoff,
    detectors: Vec<(Kind, Box<dyn Detector>)>,
    rng: R,
}

impl Pipeline<SmallRng> {
    /// Pipeline seeded from the operating system.
    pub fn new(settings: &Settings) -> Self {
        Self::with_rng(settings, SmallRng::from_os_rng())
    }
    /// Pipeline with a reproducible random fallback.
    pub fn seeded(settings: &Settings, seed: u64) -> Self {
        Self::with_rng(settings, SmallRng::seed_from_u64(seed))
    }
}

impl<R> Pipeline<R>
where
    R: rand::Rng,
{
    pub fn with_rng(settings: &Settings, rng: R) -> Self {
        Self {
            rng,
            loss_threshold: settings.loss_threshold,
            detectors: settings
                .detectors
                .iter()
                .map(|kind| (*kind, settings.detector(*kind)))
                .collect(),
        }
    }

    pub fn phase(&self, history: &History) -> Phase {
        Phase::of(history, self.loss_threshold)
    }

    /// First detector with an opinion, in priority order.
    pub fn predict(&self, history: &History) -> Option<(Kind, Move)> {
        self.detectors
            .iter()
            .find_map(|(kind, detector)| detector.predict(history).map(|m| (*kind, m)))
    }

    /// Chooses our next move.
    pub fn decide(&mut self, history: &History) -> Decision {
        let phase = self.phase(history);
        let prediction = match phase {
            Phase::Detecting => self.predict(history),
            Phase::Cold | Phase::Guarded => None,
        };
        match prediction {
            Some((kind, predicted)) => Decision {
                action: predicted.counter(),
                source: Source::Detector { kind, predicted },
            },
            None => Decision {
                action: Move::sample(&mut self.rng),
                source: Source::Random(phase),
            },
        }
    }
}
