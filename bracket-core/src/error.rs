//! Umbrella error type for the bracket pipeline

use std::path::PathBuf;

use crate::source::ParseError;
use crate::update::UpdateError;
use crate::validate::ValidationError;

#[derive(Debug, thiserror::Error)]
pub enum BracketError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Update(#[from] UpdateError),

    #[error("cannot write bracket to {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode bracket: {0}")]
    Encode(#[from] serde_json::Error),
}
