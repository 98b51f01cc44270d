//! Tunable parameters of the prediction pipeline.
use crate::*;
use anyhow::Context;

/// Names one slot in the detector priority list.
///
/// The exact-repetition detectors appear twice each, once over the long
/// window range and once over the short one, so the priority list can
/// put high-confidence long matches ahead of the bias detector and
/// weaker short matches behind it.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    Constant,
    Copycat,
    Reactive,
    Cycle,
    RepetitionLong,
    TheirsLong,
    Bias,
    RepetitionShort,
    TheirsShort,
}

impl Kind {
    /// Canonical priority order.
    pub const fn all() -> [Kind; 9] {
        [
            Kind::Constant,
            Kind::Copycat,
            Kind::Reactive,
            Kind::Cycle,
            Kind::RepetitionLong,
            Kind::TheirsLong,
            Kind::Bias,
            Kind::RepetitionShort,
            Kind::TheirsShort,
        ]
    }
}

/// The one label used for a detector in logs and decision reports.
impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Kind::Constant => write!(f, "constant"),
            Kind::Copycat => write!(f, "copycat"),
            Kind::Reactive => write!(f, "reactive"),
            Kind::Cycle => write!(f, "cycle"),
            Kind::RepetitionLong => write!(f, "repetition/long"),
            Kind::TheirsLong => write!(f, "repetition/theirs/long"),
            Kind::Bias => write!(f, "bias"),
            Kind::RepetitionShort => write!(f, "repetition/short"),
            Kind::TheirsShort => write!(f, "repetition/theirs/short"),
        }
    }
}

/// Everything the pipeline can be tuned by.
///
/// Missing fields in a settings file fall back to the canonical values
/// defined as crate constants.
#[derive(Debug, Clone, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Profit strictly below this bypasses all detectors.
    pub loss_threshold: Payoff,
    /// History needed by constant, cycle, repetition and bias detectors.
    pub pattern_minimum: usize,
    /// History needed by copycat and reactive-counter detectors.
    pub reactive_minimum: usize,
    /// Trailing rounds checked for constant play; `None` checks them all.
    pub constant_window: Option<usize>,
    /// Mode share that must be strictly exceeded.
    pub bias_threshold: Probability,
    pub long_windows: Windows,
    pub short_windows: Windows,
    /// Detectors in priority order. First prediction wins.
    pub detectors: Vec<Kind>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            loss_threshold: LOSS_THRESHOLD,
            pattern_minimum: PATTERN_MINIMUM,
            reactive_minimum: REACTIVE_MINIMUM,
            constant_window: Some(CONSTANT_WINDOW),
            bias_threshold: BIAS_THRESHOLD,
            long_windows: Windows::long(),
            short_windows: Windows::short(),
            detectors: Kind::all().to_vec(),
        }
    }
}

impl Settings {
    /// Builds the detector occupying a priority slot.
    pub fn detector(&self, kind: Kind) -> Box<dyn Detector> {
        let pattern = self.pattern_minimum;
        let reactive = self.reactive_minimum;
        match kind {
            Kind::Constant => Box::new(Constant::new(self.constant_window, pattern)),
            Kind::Copycat => Box::new(Copycat::new(reactive)),
            Kind::Reactive => Box::new(Reactive::new(reactive)),
            Kind::Cycle => Box::new(Cycle::new(pattern)),
            Kind::RepetitionLong => Box::new(Repetition::new(Scope::Full, self.long_windows, pattern)),
            Kind::TheirsLong => Box::new(Repetition::new(Scope::Theirs, self.long_windows, pattern)),
            Kind::Bias => Box::new(Bias::new(self.bias_threshold, pattern)),
            Kind::RepetitionShort => Box::new(Repetition::new(Scope::Full, self.short_windows, pattern)),
            Kind::TheirsShort => Box::new(Repetition::new(Scope::Theirs, self.short_windows, pattern)),
        }
    }

    /// Rejects settings no detector can work with.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.pattern_minimum > 0, "pattern_minimum must be positive");
        anyhow::ensure!(self.reactive_minimum > 0, "reactive_minimum must be positive");
        anyhow::ensure!(
            self.constant_window != Some(0),
            "constant_window must be positive when set"
        );
        anyhow::ensure!(
            (0.0..1.0).contains(&self.bias_threshold),
            "bias_threshold {} outside [0, 1)",
            self.bias_threshold
        );
        for (label, windows) in [("long", self.long_windows), ("short", self.short_windows)] {
            anyhow::ensure!(
                0 < windows.shortest && windows.shortest <= windows.longest,
                "{} windows {}..={} are empty",
                label,
                windows.shortest,
                windows.longest
            );
        }
        Ok(())
    }

    /// Reads and validates a JSON settings file.
    pub fn load(path: &std::path::Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read settings from {}", path.display()))?;
        let settings = serde_json::from_str::<Self>(&text)
            .with_context(|| format!("parse settings in {}", path.display()))?;
        settings
            .validate()
            .with_context(|| format!("invalid settings in {}", path.display()))?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(Settings::default().validate().is_ok());
        assert_eq!(
            Settings::default().detectors,
            vec![
                Kind::Constant,
                Kind::Copycat,
                Kind::Reactive,
                Kind::Cycle,
                Kind::RepetitionLong,
                Kind::TheirsLong,
                Kind::Bias,
                Kind::RepetitionShort,
                Kind::TheirsShort,
            ]
        );
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let json = r#"{ "bias_threshold": 0.35, "detectors": ["cycle", "theirs_short"] }"#;
        let settings = serde_json::from_str::<Settings>(json).unwrap();
        assert_eq!(settings.bias_threshold, 0.35);
        assert_eq!(settings.detectors, vec![Kind::Cycle, Kind::TheirsShort]);
        assert_eq!(settings.loss_threshold, LOSS_THRESHOLD);
        assert_eq!(settings.long_windows, Windows::long());
    }

    #[test]
    fn window_order_in_json() {
        let json = r#"{ "short_windows": { "shortest": 3, "longest": 7, "order": "shortest_first" } }"#;
        let settings = serde_json::from_str::<Settings>(json).unwrap();
        assert_eq!(settings.short_windows.lengths(), vec![3, 4, 5, 6, 7]);
    }

    #[test]
    fn rejects_nonsense() {
        let inverted = Settings {
            short_windows: Windows {
                shortest: 7,
                longest: 3,
                order: Order::LongestFirst,
            },
            ..Settings::default()
        };
        assert!(inverted.validate().is_err());
        let certain = Settings {
            bias_threshold: 1.0,
            ..Settings::default()
        };
        assert!(certain.validate().is_err());
    }

    #[test]
    fn every_kind_builds() {
        let settings = Settings::default();
        for kind in Kind::all() {
            assert!(settings.detector(kind).predict(&History::default()).is_none());
        }
    }
}
