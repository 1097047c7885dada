//! Configuration types for bracket generation
//!
//! Level 4 - Utilities and configuration

/// Field limit for balanced brackets
pub const DEFAULT_MAX_ENTRANTS: usize = 1024;

/// Field limit for first-vs-last brackets (n(n+1)/2 matches, n levels deep)
pub const CUSTOM_MAX_ENTRANTS: usize = 64;

/// Pairing policy used to build the tree
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BracketKind {
    /// Balanced single elimination with standard seeding
    #[default]
    Standard,
    /// First remaining winner meets last remaining winner, one contest per round
    Custom,
}

/// Bracket generation configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BracketConfig {
    /// Pairing policy
    pub kind: BracketKind,
    /// Round number given to opening matches
    pub starting_round: u32,
    /// Largest accepted field
    pub max_entrants: usize,
    /// Reject fields where two entrants share a rank
    pub unique_ranks: bool,
}

impl Default for BracketConfig {
    fn default() -> Self {
        Self {
            kind: BracketKind::Standard,
            starting_round: 1,
            max_entrants: DEFAULT_MAX_ENTRANTS,
            unique_ranks: false,
        }
    }
}

impl BracketConfig {
    /// Balanced bracket with default settings
    pub fn standard() -> Self {
        Self::default()
    }

    /// First-vs-last bracket with default settings and the smaller field limit
    pub fn custom() -> Self {
        Self {
            kind: BracketKind::Custom,
            max_entrants: CUSTOM_MAX_ENTRANTS,
            ..Default::default()
        }
    }

    /// Default settings for `kind`
    pub fn for_kind(kind: BracketKind) -> Self {
        match kind {
            BracketKind::Standard => Self::standard(),
            BracketKind::Custom => Self::custom(),
        }
    }

    pub fn with_starting_round(mut self, round: u32) -> Self {
        self.starting_round = round;
        self
    }

    pub fn with_max_entrants(mut self, max: usize) -> Self {
        self.max_entrants = max;
        self
    }

    pub fn with_unique_ranks(mut self, unique: bool) -> Self {
        self.unique_ranks = unique;
        self
    }
}
