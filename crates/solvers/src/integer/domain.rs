use std::fmt;

use monosearch_core::DomainInt;

use super::Error;

/// A non-empty inclusive integer interval `[lo, hi]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Domain<T> {
    lo: T,
    hi: T,
}

impl<T: DomainInt> Domain<T> {
    /// Creates a validated domain from `[lo, hi]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDomain`] if `lo > hi`.
    pub fn new(bounds: [T; 2]) -> Result<Self, Error<T>> {
        let [lo, hi] = bounds;
        if lo > hi {
            return Err(Error::InvalidDomain { lo, hi });
        }
        Ok(Self { lo, hi })
    }

    /// Returns the lower bound.
    #[must_use]
    pub fn lo(&self) -> T {
        self.lo
    }

    /// Returns the upper bound.
    #[must_use]
    pub fn hi(&self) -> T {
        self.hi
    }

    /// Returns the bounds as an array.
    #[must_use]
    pub fn as_array(&self) -> [T; 2] {
        [self.lo, self.hi]
    }

    /// Returns true if `x` lies inside the domain.
    #[must_use]
    pub fn contains(&self, x: T) -> bool {
        self.lo <= x && x <= self.hi
    }

    /// Returns the candidate the engine tests next.
    #[must_use]
    pub fn split_point(&self) -> T {
        T::split_point(self.lo, self.hi)
    }

    /// Keeps the candidates strictly below `x`.
    ///
    /// Returns `None` when no candidate remains.
    pub(super) fn below(&self, x: T) -> Option<Self> {
        let hi = x.checked_prev()?;
        (self.lo <= hi).then_some(Self { lo: self.lo, hi })
    }

    /// Keeps the candidates strictly above `x`.
    ///
    /// Returns `None` when no candidate remains.
    pub(super) fn above(&self, x: T) -> Option<Self> {
        let lo = x.checked_next()?;
        (lo <= self.hi).then_some(Self { lo, hi: self.hi })
    }
}

impl<T: fmt::Display> fmt::Display for Domain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lo, self.hi)
    }
}
