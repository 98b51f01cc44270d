use crate::*;
use std::time::Instant;

/// Result of one matchup, seen from the first bot's side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreline {
    pub wins: usize,
    pub losses: usize,
    pub ties: usize,
    /// Final bankrolls of the first and second bot.
    pub bankroll: [Payoff; 2],
}

impl Scoreline {
    pub fn rounds(&self) -> usize {
        self.wins + self.losses + self.ties
    }
    fn book(&mut self, payoff: Payoff) {
        match payoff.signum() {
            1 => self.wins += 1,
            -1 => self.losses += 1,
            _ => self.ties += 1,
        }
        self.bankroll[0] += payoff;
        self.bankroll[1] -= payoff;
    }
}

impl std::fmt::Display for Scoreline {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}W {}L {}T ({:+} / {:+})",
            self.wins, self.losses, self.ties, self.bankroll[0], self.bankroll[1]
        )
    }
}

/// Local harness that plays two bots against each other.
///
/// Each bot starts with its own time budget; whatever it spends inside
/// `request_action` is deducted and the remainder is passed along with
/// every call. A bot that runs out of time has its late answer replaced
/// by `Rock`, stops being asked, and throws `Rock` for the rest of the
/// matchup.
#[derive(Debug, Clone, Copy)]
pub struct Matchup {
    rounds: usize,
    clock: Clock,
}

impl Default for Matchup {
    fn default() -> Self {
        Self::new(MATCH_ROUNDS)
    }
}

impl Matchup {
    pub fn new(rounds: usize) -> Self {
        Self {
            rounds,
            clock: MATCH_CLOCK,
        }
    }
    pub fn with_clock(self, clock: Clock) -> Self {
        Self { clock, ..self }
    }
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    pub fn play(&self, a: &mut dyn Bot, b: &mut dyn Bot) -> Scoreline {
        let mut score = Scoreline::default();
        let mut clocks = [self.clock; 2];
        a.on_matchup_start();
        b.on_matchup_start();
        for _ in 0..self.rounds {
            let x = Self::ask(a, &mut clocks[0]);
            let y = Self::ask(b, &mut clocks[1]);
            let payoff = x.outcome(y);
            score.book(payoff);
            a.on_round_result(x, y, payoff, clocks[0]);
            b.on_round_result(y, x, -payoff, clocks[1]);
        }
        log::info!("[arena] {:>14} vs {:<14} {}", a.name(), b.name(), score);
        score
    }

    fn ask(bot: &mut dyn Bot, clock: &mut Clock) -> Move {
        if *clock <= 0.0 {
            return Move::Rock;
        }
        let start = Instant::now();
        let action = bot.request_action(*clock);
        *clock -= start.elapsed().as_secs_f64();
        if *clock <= 0.0 {
            log::warn!("[arena] {} ran out of time", bot.name());
            return Move::Rock;
        }
        action
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_against_fixed() {
        let score = Matchup::new(10).play(&mut Fixed(Move::Paper), &mut Fixed(Move::Rock));
        assert_eq!(score.wins, 10);
        assert_eq!(score.bankroll, [10, -10]);
        assert_eq!(score.rounds(), 10);
    }

    #[test]
    fn robot_crushes_predictable_opponents() {
        let settings = Settings::default();
        let matchup = Matchup::default();
        let opponents: Vec<Box<dyn Bot>> = vec![
            Box::new(Fixed(Move::Scissors)),
            Box::new(Cycler::default()),
            Box::new(Mirror::default()),
            Box::new(Beater::default()),
        ];
        for mut opponent in opponents {
            let ref mut robot = Robot::seeded(&settings, 11);
            let score = matchup.play(robot, opponent.as_mut());
            assert!(score.bankroll[0] > 800, "{} vs {}", opponent.name(), score);
        }
    }

    #[test]
    fn zero_sum() {
        let score = Matchup::new(200).play(&mut Fish::seeded(1), &mut Fish::seeded(2));
        assert_eq!(score.bankroll[0], -score.bankroll[1]);
        assert_eq!(score.rounds(), 200);
    }

    /// Throws Paper, slowly.
    struct Sluggish;
    impl Bot for Sluggish {
        fn name(&self) -> String {
            "sluggish".to_string()
        }
        fn on_matchup_start(&mut self) {}
        fn on_round_result(&mut self, _: Move, _: Move, _: Payoff, _: Clock) {}
        fn request_action(&mut self, _: Clock) -> Move {
            std::thread::sleep(std::time::Duration::from_millis(20));
            Move::Paper
        }
    }

    #[test]
    fn late_answer_is_replaced() {
        let score = Matchup::new(3)
            .with_clock(0.005)
            .play(&mut Sluggish, &mut Fixed(Move::Paper));
        assert_eq!(score.losses, 3);
        assert_eq!(score.bankroll, [-3, 3]);
    }

    #[test]
    fn exhausted_clock_throws_rock() {
        let score = Matchup::new(5)
            .with_clock(0.0)
            .play(&mut Fixed(Move::Scissors), &mut Fixed(Move::Paper));
        assert_eq!(score.ties, 5);
    }
}
