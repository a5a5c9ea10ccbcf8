use super::Domain;

/// Event emitted by the integer search engine after each evaluation.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a, T> {
    /// Evaluation counter (1-based).
    pub iter: usize,

    /// Window the candidate was drawn from.
    pub domain: &'a Domain<T>,

    /// The evaluated candidate.
    pub candidate: T,

    /// The predicate's verdict for `candidate`.
    pub feasible: bool,

    /// Best feasible candidate recorded before this evaluation.
    pub best: Option<T>,
}
