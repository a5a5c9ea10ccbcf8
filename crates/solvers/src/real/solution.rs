/// Indicates how the real-valued search finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The bracket shrank to within epsilon, or to adjacent floats.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a real-valued search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final search status.
    pub status: Status,

    /// Feasible edge of the final bracket, or `None` if the domain has no
    /// feasible candidate.
    pub value: Option<f64>,

    /// Final bracket bounds.
    pub bracket: [f64; 2],

    /// Number of midpoint evaluations performed.
    pub iters: usize,
}

impl Solution {
    /// Returns the found value, or `sentinel` if none was feasible.
    #[must_use]
    pub fn value_or(&self, sentinel: f64) -> f64 {
        self.value.unwrap_or(sentinel)
    }
}
