use super::*;

/// Frequency-bias detector.
///
/// Finds the opponent's most frequent move over the whole matchup and,
/// if its share strictly exceeds `threshold`, predicts it again. Ties for
/// the mode go to the earliest move in canonical order (R, P, S).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bias {
    threshold: Probability,
    minimum: usize,
}

impl Bias {
    pub fn new(threshold: Probability, minimum: usize) -> Self {
        Self { threshold, minimum }
    }
    /// Most frequent opponent move, with its share of all rounds.
    pub fn mode(history: &History) -> Option<(Move, Probability)> {
        if history.is_empty() {
            return None;
        }
        let mode = Move::all()
            .into_iter()
            .fold(Move::Rock, |best, m| match history.tally(m) > history.tally(best) {
                true => m,
                false => best,
            });
        Some((mode, history.tally(mode) as Probability / history.len() as Probability))
    }
}

impl Default for Bias {
    fn default() -> Self {
        Self::new(BIAS_THRESHOLD, PATTERN_MINIMUM)
    }
}

impl Detector for Bias {
    fn predict(&self, history: &History) -> Option<Move> {
        if history.len() < self.minimum {
            return None;
        }
        Self::mode(history)
            .filter(|(_, share)| *share > self.threshold)
            .map(|(mode, _)| mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Move::*;

    fn against(theirs: &str) -> History {
        Move::parse(theirs)
            .expect("valid moves")
            .into_iter()
            .map(|t| (Paper, t))
            .collect()
    }

    #[test]
    fn share_equal_to_threshold_is_silent() {
        let history = against("RPRSRPSRPS");
        assert_eq!(Bias::mode(&history), Some((Rock, 0.4)));
        assert_eq!(Bias::default().predict(&history), None);
    }

    #[test]
    fn share_above_threshold_fires() {
        let history = against("RPRSRPSRPS");
        assert_eq!(Bias::new(0.38, PATTERN_MINIMUM).predict(&history), Some(Rock));
        let history = against("RPRSRPSRRS");
        assert_eq!(Bias::default().predict(&history), Some(Rock));
    }

    #[test]
    fn tie_goes_to_canonical_order() {
        let history = against("SSPPRSP");
        assert_eq!(Bias::mode(&history).map(|(m, _)| m), Some(Paper));
        let history = against("SSRRSR");
        assert_eq!(Bias::mode(&history).map(|(m, _)| m), Some(Rock));
    }

    #[test]
    fn too_short() {
        assert_eq!(Bias::default().predict(&against("RRRR")), None);
        assert_eq!(Bias::mode(&History::default()), None);
    }
}
