/// Hook called by a search engine after every predicate evaluation.
///
/// The engine passes an event describing the candidate it just tested and the
/// interval still under consideration. Returning `Some(action)` asks the
/// engine to act on it (each engine defines its own action type, such as
/// stopping early or overriding the verdict); returning `None` leaves the
/// search untouched.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer. Pass `()` when no
/// observation is wanted.
pub trait Observer<E, A> {
    /// Inspects one evaluation and optionally steers the search.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

/// Observes nothing.
impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_observer_never_acts() {
        let mut observer = ();
        let action: Option<()> = observer.observe(&42_u64);
        assert!(action.is_none());
    }

    #[test]
    fn closure_observer_sees_every_event() {
        let mut seen = Vec::new();
        let mut observer = |event: &u64| {
            seen.push(*event);
            (*event > 1).then_some(())
        };

        assert!(observer.observe(&1).is_none());
        assert!(observer.observe(&2).is_some());
        assert_eq!(seen, vec![1, 2]);
    }
}
