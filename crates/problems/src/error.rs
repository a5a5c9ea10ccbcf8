use thiserror::Error;

use monosearch_solvers::{integer, real};

/// Errors that can occur when solving a problem.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("input must contain at least one value")]
    EmptyInput,

    #[error("{name} must be greater than zero")]
    ZeroParameter { name: &'static str },

    #[error("input is not sorted as required")]
    Unsorted,

    #[error("input values overflow u64")]
    Overflow,

    #[error("search did not reach the requested precision within {iters} iterations")]
    NotConverged { iters: usize },

    #[error("search failed: {0}")]
    Search(#[from] integer::Error<u64>),

    #[error("cut search failed: {0}")]
    CutSearch(#[from] integer::Error<usize>),

    #[error("real search failed: {0}")]
    RealSearch(#[from] real::Error),
}
