/// Which end of the feasible region a search reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TieBreak {
    /// Report the smallest feasible candidate.
    ///
    /// The predicate must be false-then-true as candidates increase.
    SmallestFeasible,

    /// Report the largest feasible candidate.
    ///
    /// The predicate must be true-then-false as candidates increase.
    LargestFeasible,
}

impl TieBreak {
    /// Returns the tie-break that reports the other end of the feasible region.
    #[must_use]
    pub fn reversed(self) -> Self {
        match self {
            Self::SmallestFeasible => Self::LargestFeasible,
            Self::LargestFeasible => Self::SmallestFeasible,
        }
    }

    /// Returns true if a feasible candidate means the answer lies at or below it.
    #[must_use]
    pub fn searches_below_feasible(self) -> bool {
        matches!(self, Self::SmallestFeasible)
    }
}
