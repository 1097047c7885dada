//! Entrants and the head-to-head winner rule

use serde::Serialize;

/// Display name shared by every bye placeholder
pub const BYE_NAME: &str = "BYE";

/// Rank carried by byes (worse than any real entrant)
pub const BYE_RANK: i32 = i32::MAX;

/// A named, ranked competitor. Lower rank is the stronger seed.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Entrant {
    pub name: String,
    pub rank: i32,
    #[serde(skip)]
    bye: bool,
}

impl Entrant {
    pub fn new(name: impl Into<String>, rank: i32) -> Self {
        Self {
            name: name.into(),
            rank,
            bye: false,
        }
    }

    /// Bye placeholder used to pad a field to a power of two
    pub fn bye() -> Self {
        Self {
            name: BYE_NAME.to_string(),
            rank: BYE_RANK,
            bye: true,
        }
    }

    pub fn is_bye(&self) -> bool {
        self.bye
    }

    /// Does this entrant win a direct match against `other`?
    ///
    /// A bye always loses to a real entrant; otherwise the strictly lower
    /// rank wins. Equal ranks (and bye vs bye) go to `self`, the upper slot.
    pub fn beats(&self, other: &Entrant) -> bool {
        match (self.bye, other.bye) {
            (false, true) => true,
            (true, false) => false,
            _ => self.rank <= other.rank,
        }
    }
}

/// Slot of a match: entrant A (upper) or entrant B (lower)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}

/// Apply the winner rule to a pairing
pub fn decide(a: &Entrant, b: &Entrant) -> Side {
    if a.beats(b) {
        Side::A
    } else {
        Side::B
    }
}
