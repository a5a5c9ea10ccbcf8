use super::Bracket;

/// Event emitted by the real-valued search engine after each midpoint evaluation.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// Iteration counter (1-based).
    pub iter: usize,

    /// Bracket the midpoint was drawn from.
    pub bracket: &'a Bracket,

    /// The evaluated midpoint.
    pub x: f64,

    /// The predicate's verdict at `x`.
    pub feasible: bool,
}
