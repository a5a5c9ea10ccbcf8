use std::fmt;

use thiserror::Error;

/// Errors that can occur when validating bracket bounds.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BracketError {
    /// One or both endpoints are non-finite.
    #[error("non-finite endpoint(s)")]
    NonFinite,
    /// The lower bound exceeds the upper bound.
    #[error("lower bound exceeds upper bound")]
    Inverted,
}

/// Current search interval `[lo, hi]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    lo: f64,
    hi: f64,
}

impl Bracket {
    /// Creates a validated bracket.
    ///
    /// A zero-width bracket is allowed and holds a single candidate.
    ///
    /// # Errors
    ///
    /// Returns `BracketError` if an endpoint is non-finite or `lo > hi`.
    pub fn new(bounds: [f64; 2]) -> Result<Self, BracketError> {
        let [lo, hi] = bounds;

        if !lo.is_finite() || !hi.is_finite() {
            return Err(BracketError::NonFinite);
        }

        if lo > hi {
            return Err(BracketError::Inverted);
        }

        Ok(Self { lo, hi })
    }

    /// Returns the lower bound.
    #[must_use]
    pub fn lo(&self) -> f64 {
        self.lo
    }

    /// Returns the upper bound.
    #[must_use]
    pub fn hi(&self) -> f64 {
        self.hi
    }

    /// Returns the bracket bounds as an array.
    #[must_use]
    pub fn as_array(&self) -> [f64; 2] {
        [self.lo, self.hi]
    }

    /// Returns the midpoint of the bracket.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.lo + self.hi)
    }

    /// Returns the bracket width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.hi - self.lo
    }

    /// Returns true if the bracket is no wider than `epsilon`.
    #[must_use]
    pub fn is_converged(&self, epsilon: f64) -> bool {
        self.width() <= epsilon
    }

    /// Returns true if `x` lies strictly inside the bracket.
    ///
    /// Once the bounds are adjacent floats the midpoint rounds onto one of
    /// them and no further progress is possible.
    #[must_use]
    pub fn splits_at(&self, x: f64) -> bool {
        self.lo < x && x < self.hi
    }

    /// Moves the lower bound up to `x`.
    pub(super) fn raise_lo(&mut self, x: f64) {
        self.lo = x;
    }

    /// Moves the upper bound down to `x`.
    pub(super) fn lower_hi(&mut self, x: f64) {
        self.hi = x;
    }
}

impl fmt::Display for Bracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lo, self.hi)
    }
}
