use thiserror::Error;

use super::BracketError;

/// Errors that can occur during a real-valued search.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("invalid bracket: {0}")]
    InvalidBracket(#[from] BracketError),
}
