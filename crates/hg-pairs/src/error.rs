//! Error types for pair generation.

use hg_core::HgError;
use thiserror::Error;

/// Errors that can occur while setting up a pair generator.
#[derive(Error, Debug)]
pub enum PairError {
    #[error("Invalid pair configuration: {what}")]
    InvalidConfig { what: String },

    #[error("Numeric error: {0}")]
    Numeric(#[from] HgError),
}

pub type PairResult<T> = Result<T, PairError>;

impl From<PairError> for HgError {
    fn from(e: PairError) -> Self {
        match e {
            PairError::InvalidConfig { what: _ } => HgError::InvalidArg {
                what: "pair configuration",
            },
            PairError::Numeric(inner) => inner,
        }
    }
}
