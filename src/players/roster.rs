use crate::*;

/// Every kind of bot the harness knows how to build, by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Roster {
    Robot,
    Fish,
    Fixed(Move),
    Cycle(Vec<Move>),
    Mirror,
    Beater,
}

impl Roster {
    /// The default tournament field.
    pub fn field() -> Vec<Roster> {
        vec![
            Roster::Robot,
            Roster::Fish,
            Roster::Fixed(Move::Scissors),
            Roster::Cycle(vec![
                Move::Rock,
                Move::Rock,
                Move::Paper,
                Move::Paper,
                Move::Scissors,
                Move::Scissors,
            ]),
            Roster::Mirror,
            Roster::Beater,
        ]
    }
    /// Builds a fresh bot. Seeded bots are reproducible; unseeded ones
    /// draw from the operating system.
    pub fn spawn(&self, settings: &Settings, seed: Option<u64>) -> anyhow::Result<Box<dyn Bot>> {
        Ok(match (self, seed) {
            (Roster::Robot, Some(seed)) => Box::new(Robot::seeded(settings, seed)),
            (Roster::Robot, None) => Box::new(Robot::new(settings)),
            (Roster::Fish, Some(seed)) => Box::new(Fish::seeded(seed)),
            (Roster::Fish, None) => Box::new(Fish::new()),
            (Roster::Fixed(m), _) => Box::new(Fixed(*m)),
            (Roster::Cycle(pattern), _) => Box::new(Cycler::new(pattern.clone())?),
            (Roster::Mirror, _) => Box::new(Mirror::default()),
            (Roster::Beater, _) => Box::new(Beater::default()),
        })
    }
}

/// str isomorphism
impl TryFrom<&str> for Roster {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim().to_lowercase();
        match s.as_str() {
            "robot" => Ok(Roster::Robot),
            "fish" | "random" => Ok(Roster::Fish),
            "mirror" | "copycat" => Ok(Roster::Mirror),
            "beater" => Ok(Roster::Beater),
            "repetitive" => Ok(Roster::Cycle(Move::parse("RRPPSS")?)),
            _ => match s.strip_prefix("cycle:") {
                Some(pattern) => {
                    let moves = Move::parse(pattern)?;
                    anyhow::ensure!(!moves.is_empty(), "empty cycle pattern");
                    Ok(Roster::Cycle(moves))
                }
                None => Move::try_from(s.as_str())
                    .map(Roster::Fixed)
                    .map_err(|_| anyhow::anyhow!("unknown bot: {}", s)),
            },
        }
    }
}

impl std::str::FromStr for Roster {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl std::fmt::Display for Roster {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Roster::Robot => write!(f, "robot"),
            Roster::Fish => write!(f, "fish"),
            Roster::Fixed(m) => write!(f, "{}", Fixed(*m).name()),
            Roster::Cycle(pattern) => {
                write!(f, "cycle:")?;
                pattern.iter().try_for_each(|m| write!(f, "{}", m))
            }
            Roster::Mirror => write!(f, "mirror"),
            Roster::Beater => write!(f, "beater"),
        }
    }
}
