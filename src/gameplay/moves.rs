use crate::*;

/// A throw in rock-paper-scissors.
///
/// The three values form a cycle under the "beats" relation:
/// Rock beats Scissors, Scissors beats Paper, Paper beats Rock.
/// [`Move::counter`] walks the cycle forward, so applying it three
/// times is the identity and applying it twice yields the move that
/// the original one beats.
///
/// The declaration order (R < P < S) doubles as the canonical
/// tie-break order wherever several moves are equally good candidates.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Move {
    /// Rock: beats Scissors, loses to Paper.
    Rock = 0,
    /// Paper: beats Rock, loses to Scissors.
    Paper = 1,
    /// Scissors: beats Paper, loses to Rock.
    Scissors = 2,
}

impl Move {
    /// All three moves in canonical order.
    pub const fn all() -> [Move; 3] {
        [Move::Rock, Move::Paper, Move::Scissors]
    }
    /// The unique move that defeats `self`.
    pub const fn counter(self) -> Move {
        match self {
            Move::Rock => Move::Paper,
            Move::Paper => Move::Scissors,
            Move::Scissors => Move::Rock,
        }
    }
    /// The unique move that `self` defeats.
    pub const fn beaten(self) -> Move {
        self.counter().counter()
    }
    /// Whether `self` defeats `other`.
    pub fn beats(self, other: Move) -> bool {
        other.counter() == self
    }
    /// Reward to `self` when thrown against `other`.
    pub fn outcome(self, other: Move) -> Payoff {
        match (self.beats(other), other.beats(self)) {
            (true, _) => ROUND_STAKE,
            (_, true) => -ROUND_STAKE,
            _ => 0,
        }
    }
    /// Uniform draw from an injected source of randomness.
    pub fn sample<R>(rng: &mut R) -> Move
    where
        R: rand::Rng,
    {
        Move::from(rng.random_range(0..3u8))
    }
}

/// u8 isomorphism
impl From<u8> for Move {
    fn from(n: u8) -> Move {
        match n % 3 {
            0 => Move::Rock,
            1 => Move::Paper,
            _ => Move::Scissors,
        }
    }
}
impl From<Move> for u8 {
    fn from(m: Move) -> u8 {
        m as u8
    }
}

/// char isomorphism
impl TryFrom<char> for Move {
    type Error = anyhow::Error;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'R' => Ok(Move::Rock),
            'P' => Ok(Move::Paper),
            'S' => Ok(Move::Scissors),
            _ => Err(anyhow::anyhow!("invalid move char: {}", c)),
        }
    }
}

/// str isomorphism
impl TryFrom<&str> for Move {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "r" | "rock" => Ok(Move::Rock),
            "p" | "paper" => Ok(Move::Paper),
            "s" | "scissors" => Ok(Move::Scissors),
            _ => Err(anyhow::anyhow!("invalid move str: {}", s)),
        }
    }
}
impl Move {
    /// Parses a compact sequence such as `"RRPPSS"`, ignoring whitespace.
    pub fn parse(s: &str) -> anyhow::Result<Vec<Self>> {
        s.chars()
            .filter(|c| !c.is_whitespace())
            .map(Self::try_from)
            .collect()
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Move::Rock => write!(f, "R"),
            Move::Paper => write!(f, "P"),
            Move::Scissors => write!(f, "S"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_has_order_three() {
        for m in Move::all() {
            assert!(m.counter() != m);
            assert!(m.counter().counter().counter() == m);
        }
    }

    #[test]
    fn counter_beats_original() {
        for m in Move::all() {
            assert!(m.counter().beats(m));
            assert!(!m.beats(m.counter()));
            assert!(m.beats(m.beaten()));
        }
    }

    #[test]
    fn classic_rules() {
        assert!(Move::Rock.beats(Move::Scissors));
        assert!(Move::Paper.beats(Move::Rock));
        assert!(Move::Scissors.beats(Move::Paper));
        assert!(!Move::Rock.beats(Move::Rock));
    }

    #[test]
    fn outcome_is_zero_sum() {
        for a in Move::all() {
            for b in Move::all() {
                assert_eq!(a.outcome(b), -b.outcome(a));
            }
        }
        assert_eq!(Move::Paper.outcome(Move::Rock), ROUND_STAKE);
        assert_eq!(Move::Rock.outcome(Move::Rock), 0);
    }

    #[test]
    fn bijective_u8() {
        for m in Move::all() {
            assert!(m == Move::from(u8::from(m)));
        }
    }

    #[test]
    fn parse_sequence() {
        let moves = Move::parse("rr PP s").unwrap();
        assert_eq!(
            moves,
            vec![Move::Rock, Move::Rock, Move::Paper, Move::Paper, Move::Scissors]
        );
        assert!(Move::parse("RPX").is_err());
        assert_eq!(Move::try_from("Scissors").unwrap(), Move::Scissors);
    }
}
