/// A feasibility test over a single candidate answer.
///
/// Search engines assume the predicate is monotone over the searched domain
/// in the direction implied by the chosen [`TieBreak`]:
///
/// - [`TieBreak::SmallestFeasible`]: once a candidate is feasible, every
///   larger candidate is feasible too.
/// - [`TieBreak::LargestFeasible`]: once a candidate is feasible, every
///   smaller candidate is feasible too.
///
/// Monotonicity is not checked at runtime. A predicate that flips more than
/// once yields an unspecified boundary.
///
/// Implementations must not mutate shared state; an engine may evaluate the
/// same candidate more than once and expects the same verdict.
///
/// Closures of the form `Fn(T) -> bool` implement this trait automatically.
///
/// [`TieBreak`]: crate::TieBreak
/// [`TieBreak::SmallestFeasible`]: crate::TieBreak::SmallestFeasible
/// [`TieBreak::LargestFeasible`]: crate::TieBreak::LargestFeasible
pub trait Predicate<T> {
    /// Returns `true` if `candidate` is a feasible answer.
    fn is_feasible(&self, candidate: T) -> bool;
}

/// Blanket implementation for predicate closures.
impl<T, F> Predicate<T> for F
where
    F: Fn(T) -> bool,
{
    fn is_feasible(&self, candidate: T) -> bool {
        self(candidate)
    }
}
