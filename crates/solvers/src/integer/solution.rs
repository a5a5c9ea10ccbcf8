/// Indicates how the integer search finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The window was exhausted; `value` is the boundary candidate.
    Converged,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of an integer search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Solution<T> {
    /// Final search status.
    pub status: Status,

    /// The extremal feasible candidate, or `None` if no candidate was feasible.
    pub value: Option<T>,

    /// Number of predicate evaluations performed.
    pub iters: usize,
}

impl<T: Copy> Solution<T> {
    pub(super) fn new(status: Status, value: Option<T>, iters: usize) -> Self {
        Self {
            status,
            value,
            iters,
        }
    }

    /// Returns the found candidate, or `sentinel` if none was feasible.
    #[must_use]
    pub fn value_or(&self, sentinel: T) -> T {
        self.value.unwrap_or(sentinel)
    }
}
