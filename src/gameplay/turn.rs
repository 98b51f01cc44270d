use super::*;

/// One completed round: what we threw and what they threw.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Turn {
    mine: Move,
    theirs: Move,
}

impl Turn {
    pub fn mine(&self) -> Move {
        self.mine
    }
    pub fn theirs(&self) -> Move {
        self.theirs
    }
}

/// (mine, theirs) isomorphism
impl From<(Move, Move)> for Turn {
    fn from((mine, theirs): (Move, Move)) -> Self {
        Self { mine, theirs }
    }
}
impl From<Turn> for (Move, Move) {
    fn from(turn: Turn) -> Self {
        (turn.mine, turn.theirs)
    }
}

impl std::fmt::Display for Turn {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.mine, self.theirs)
    }
}
