//! Entrant list validation, run once before any tree is built

use rustc_hash::FxHashMap;

use crate::config::BracketConfig;
use crate::entrant::{Entrant, BYE_NAME};

/// Violated entrant-list invariant
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("no entrants provided")]
    Empty,

    #[error("entrant #{index} has an empty name")]
    EmptyName { index: usize },

    #[error("duplicate entrant name: {0}")]
    DuplicateName(String),

    #[error("entrant name {0:?} is reserved for byes")]
    ReservedName(String),

    #[error("rank {rank} is shared by {first} and {second}")]
    DuplicateRank {
        rank: i32,
        first: String,
        second: String,
    },

    #[error("{count} entrants exceeds the limit of {max}")]
    TooManyEntrants { count: usize, max: usize },
}

/// Check the whole field against `config`, reporting the first violation
pub fn validate_entrants(entrants: &[Entrant], config: &BracketConfig) -> Result<(), ValidationError> {
    if entrants.is_empty() {
        return Err(ValidationError::Empty);
    }
    if entrants.len() > config.max_entrants {
        return Err(ValidationError::TooManyEntrants {
            count: entrants.len(),
            max: config.max_entrants,
        });
    }

    let mut names: FxHashMap<&str, usize> = FxHashMap::default();
    let mut ranks: FxHashMap<i32, &str> = FxHashMap::default();

    for (index, entrant) in entrants.iter().enumerate() {
        let name = entrant.name.as_str();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName { index });
        }
        if entrant.is_bye() || name.eq_ignore_ascii_case(BYE_NAME) {
            return Err(ValidationError::ReservedName(entrant.name.clone()));
        }
        if names.insert(name, index).is_some() {
            return Err(ValidationError::DuplicateName(entrant.name.clone()));
        }
        if config.unique_ranks {
            if let Some(first) = ranks.insert(entrant.rank, name) {
                return Err(ValidationError::DuplicateRank {
                    rank: entrant.rank,
                    first: first.to_string(),
                    second: entrant.name.clone(),
                });
            }
        }
    }

    Ok(())
}
