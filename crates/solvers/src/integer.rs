//! Binary search on the answer over a bounded integer domain.
//!
//! # Algorithm
//!
//! The engine keeps a window `[lo, hi]` of candidates that may still hold the
//! answer. Each iteration tests the split point `lo + (hi - lo) / 2`:
//!
//! - With [`TieBreak::SmallestFeasible`], a feasible candidate is recorded and
//!   the window moves strictly below it; an infeasible one moves it strictly
//!   above.
//! - With [`TieBreak::LargestFeasible`], the directions are mirrored.
//!
//! The window shrinks by at least one candidate per iteration, so the search
//! finishes after at most `⌈log₂(hi - lo + 1)⌉ + 1` predicate evaluations.
//! The last recorded candidate is the answer; if none was recorded, no
//! candidate in the domain is feasible.
//!
//! # Preconditions
//!
//! The predicate must be monotone over the domain in the direction implied by
//! the tie-break. This is not checked. A non-monotone predicate produces an
//! unspecified (but always in-range or `None`) result.
//!
//! # Observer Events
//!
//! The engine emits one [`Event`] per predicate evaluation. Observers can
//! return [`Action::StopEarly`] to halt with the best candidate so far, or
//! [`Action::AssumeFeasible`] / [`Action::AssumeInfeasible`] to override the
//! verdict for the evaluated candidate.

mod action;
mod domain;
mod error;
mod event;
mod solution;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use domain::Domain;
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use log::{debug, trace};
use monosearch_core::{DomainInt, Observer, Predicate, TieBreak};

/// Searches `[lo, hi]` for the extremal feasible candidate.
///
/// The observer receives an [`Event`] after every predicate evaluation.
/// See the [module docs](self) for the algorithm and observer actions.
///
/// # Errors
///
/// Returns [`Error::InvalidDomain`] if `lo > hi`.
pub fn search<T, P, Obs>(
    domain: [T; 2],
    predicate: &P,
    tie_break: TieBreak,
    mut observer: Obs,
) -> Result<Solution<T>, Error<T>>
where
    T: DomainInt,
    P: Predicate<T> + ?Sized,
    Obs: for<'a> Observer<Event<'a, T>, Action>,
{
    let domain = Domain::new(domain)?;

    let mut window = Some(domain);
    let mut best = None;
    let mut iters = 0;

    while let Some(current) = window {
        iters += 1;

        let candidate = current.split_point();
        let evaluated = predicate.is_feasible(candidate);

        let event = Event {
            iter: iters,
            domain: &current,
            candidate,
            feasible: evaluated,
            best,
        };

        let feasible = match observer.observe(&event) {
            Some(Action::StopEarly) => {
                debug!(
                    "integer search over {domain} stopped by observer after {iters} iters, best = {best:?}"
                );
                return Ok(Solution::new(Status::StoppedByObserver, best, iters));
            }
            Some(Action::AssumeFeasible) => true,
            Some(Action::AssumeInfeasible) => false,
            None => evaluated,
        };

        trace!("iter {iters}: window {current}, candidate {candidate}, feasible = {feasible}");

        if feasible {
            best = Some(candidate);
        }

        window = if feasible == tie_break.searches_below_feasible() {
            current.below(candidate)
        } else {
            current.above(candidate)
        };
    }

    debug!("integer search over {domain} ({tie_break:?}) finished after {iters} iters: {best:?}");

    Ok(Solution::new(Status::Converged, best, iters))
}

/// Searches `[lo, hi]` without observer support.
///
/// This is a convenience wrapper around [`search`] that uses a no-op observer.
///
/// # Errors
///
/// Returns [`Error::InvalidDomain`] if `lo > hi`.
pub fn search_unobserved<T, P>(
    domain: [T; 2],
    predicate: &P,
    tie_break: TieBreak,
) -> Result<Solution<T>, Error<T>>
where
    T: DomainInt,
    P: Predicate<T> + ?Sized,
{
    search(domain, predicate, tie_break, ())
}

/// Returns the smallest feasible candidate in `[lo, hi]`, if any.
///
/// The predicate must be false-then-true as candidates increase.
///
/// # Errors
///
/// Returns [`Error::InvalidDomain`] if `lo > hi`.
pub fn smallest_feasible<T, P>(domain: [T; 2], predicate: &P) -> Result<Option<T>, Error<T>>
where
    T: DomainInt,
    P: Predicate<T> + ?Sized,
{
    search_unobserved(domain, predicate, TieBreak::SmallestFeasible).map(|s| s.value)
}

/// Returns the largest feasible candidate in `[lo, hi]`, if any.
///
/// The predicate must be true-then-false as candidates increase.
///
/// # Errors
///
/// Returns [`Error::InvalidDomain`] if `lo > hi`.
pub fn largest_feasible<T, P>(domain: [T; 2], predicate: &P) -> Result<Option<T>, Error<T>>
where
    T: DomainInt,
    P: Predicate<T> + ?Sized,
{
    search_unobserved(domain, predicate, TieBreak::LargestFeasible).map(|s| s.value)
}
