use crate::*;

/// One entrant's line on the leaderboard.
#[derive(Debug, Clone, PartialEq)]
pub struct Standing {
    pub name: String,
    /// Final bankroll of every matchup the entrant played.
    pub scores: Vec<Payoff>,
}

impl Standing {
    pub fn mean(&self) -> f64 {
        match self.scores.len() {
            0 => 0.0,
            n => self.scores.iter().map(|s| *s as f64).sum::<f64>() / n as f64,
        }
    }
    /// Standard error of the mean, from the sample standard deviation.
    pub fn stderr(&self) -> f64 {
        let n = self.scores.len();
        if n < 2 {
            return 0.0;
        }
        let mean = self.mean();
        let variance = self
            .scores
            .iter()
            .map(|s| (*s as f64 - mean).powi(2))
            .sum::<f64>()
            / (n - 1) as f64;
        variance.sqrt() / (n as f64).sqrt()
    }
}

impl std::fmt::Display for Standing {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<14} {:>+9.2} ± {:>7.2}", self.name, self.mean(), self.stderr())
    }
}

/// Round-robin over every ordered pair of distinct entrants.
///
/// Each pairing gets freshly built bots, so nothing learned in one
/// matchup leaks into the next. With a seed, every bot in every pairing
/// gets its own derived seed and the whole tournament is reproducible.
pub struct Tournament {
    entrants: Vec<Roster>,
    settings: Settings,
    matchup: Matchup,
    seed: Option<u64>,
}

impl Tournament {
    pub fn new(entrants: Vec<Roster>, settings: Settings, matchup: Matchup) -> Self {
        Self {
            entrants,
            settings,
            matchup,
            seed: None,
        }
    }
    pub fn seeded(self, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..self
        }
    }

    fn salted(&self, salt: u64) -> Option<u64> {
        self.seed.map(|s| s.wrapping_add(salt))
    }

    /// Plays every pairing and returns standings, best mean first.
    pub fn run(&self) -> anyhow::Result<Vec<Standing>> {
        let n = self.entrants.len();
        let mut standings = self
            .entrants
            .iter()
            .map(|entrant| Standing {
                name: entrant.to_string(),
                scores: Vec::new(),
            })
            .collect::<Vec<_>>();
        for i in 0..n {
            for j in (0..n).filter(|j| *j != i) {
                let salt = 2 * (i * n + j) as u64;
                let ref mut a = self.entrants[i].spawn(&self.settings, self.salted(salt))?;
                let ref mut b = self.entrants[j].spawn(&self.settings, self.salted(salt + 1))?;
                let score = self.matchup.play(a.as_mut(), b.as_mut());
                standings[i].scores.push(score.bankroll[0]);
                standings[j].scores.push(score.bankroll[1]);
            }
        }
        standings.sort_by(|a, b| b.mean().total_cmp(&a.mean()));
        Ok(standings)
    }
}
