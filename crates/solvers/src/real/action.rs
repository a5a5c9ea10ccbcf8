/// Control actions supported by the real-valued search engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the search early and return the current bracket edge.
    StopEarly,

    /// Treat the evaluated midpoint as feasible regardless of the predicate.
    AssumeFeasible,

    /// Treat the evaluated midpoint as infeasible regardless of the predicate.
    AssumeInfeasible,
}
