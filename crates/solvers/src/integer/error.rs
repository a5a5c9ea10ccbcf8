use thiserror::Error;

/// Errors that can occur during an integer search.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error<T> {
    #[error("invalid domain: lower bound {lo} exceeds upper bound {hi}")]
    InvalidDomain { lo: T, hi: T },
}
