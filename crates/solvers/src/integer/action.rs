/// Control actions supported by the integer search engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the search early and return the best candidate found so far.
    StopEarly,

    /// Treat the evaluated candidate as feasible regardless of the predicate.
    ///
    /// The candidate becomes the best so far and the window moves as if the
    /// predicate had returned `true`.
    AssumeFeasible,

    /// Treat the evaluated candidate as infeasible regardless of the predicate.
    ///
    /// The candidate is not recorded and the window moves as if the predicate
    /// had returned `false`.
    AssumeInfeasible,
}
