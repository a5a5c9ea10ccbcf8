//! Binary search on the answer over a bounded real interval.
//!
//! # Algorithm
//!
//! The engine first checks the anchor endpoint: `hi` for
//! [`TieBreak::SmallestFeasible`], `lo` for [`TieBreak::LargestFeasible`].
//! An infeasible anchor means the interval holds no feasible value and the
//! search reports `None` without bisecting.
//!
//! Otherwise it bisects `[lo, hi]` at `(lo + hi) / 2` while `hi - lo > epsilon`.
//! With `SmallestFeasible` a feasible midpoint becomes the new `hi` and an
//! infeasible one the new `lo`; `LargestFeasible` mirrors this. The reported
//! value is the bracket edge known to be feasible (`hi` or `lo`
//! respectively), within `epsilon` of the true boundary.
//!
//! Each iteration halves the bracket, so convergence takes about
//! `log₂((hi - lo) / epsilon)` predicate evaluations. The precision lives in
//! [`Config`]: a smaller epsilon buys accuracy with more evaluations.
//!
//! # When to Use
//!
//! Use this engine when the answer is not guaranteed to be an integer.
//! For integral answers prefer [`integer`](crate::integer), which is exact.
//!
//! # Observer Events
//!
//! The engine emits one [`Event`] per midpoint evaluation. The anchor check is
//! not reported. Observers can return [`Action::StopEarly`] to halt with the
//! current feasible edge, or [`Action::AssumeFeasible`] /
//! [`Action::AssumeInfeasible`] to override the verdict at the midpoint.

mod action;
mod bracket;
mod config;
mod error;
mod event;
mod solution;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use bracket::{Bracket, BracketError};
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use log::{debug, trace};
use monosearch_core::{Observer, Predicate, TieBreak};

/// Searches `[lo, hi]` for the extremal feasible value to within `epsilon`.
///
/// The observer receives an [`Event`] after every midpoint evaluation.
/// See the [module docs](self) for the algorithm and observer actions.
///
/// # Errors
///
/// Returns [`Error::InvalidBracket`] if an endpoint is non-finite or `lo > hi`.
pub fn search<P, Obs>(
    bracket: [f64; 2],
    predicate: &P,
    tie_break: TieBreak,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    P: Predicate<f64> + ?Sized,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let mut bracket = Bracket::new(bracket)?;
    let below = tie_break.searches_below_feasible();

    let anchor = feasible_edge(&bracket, below);
    if !predicate.is_feasible(anchor) {
        debug!("real search over {bracket} ({tie_break:?}): anchor {anchor} is infeasible");
        return Ok(Solution {
            status: Status::Converged,
            value: None,
            bracket: bracket.as_array(),
            iters: 0,
        });
    }

    let finish = |status: Status, bracket: &Bracket, iters: usize| {
        let value = feasible_edge(bracket, below);
        debug!("real search finished with {status:?} after {iters} iters: {value}");
        Solution {
            status,
            value: Some(value),
            bracket: bracket.as_array(),
            iters,
        }
    };

    let mut iters = 0;
    while !bracket.is_converged(config.epsilon()) {
        if iters == config.max_iters() {
            return Ok(finish(Status::MaxIters, &bracket, iters));
        }

        let x = bracket.midpoint();
        if !bracket.splits_at(x) {
            break;
        }
        iters += 1;

        let evaluated = predicate.is_feasible(x);
        let event = Event {
            iter: iters,
            bracket: &bracket,
            x,
            feasible: evaluated,
        };

        let feasible = match observer.observe(&event) {
            Some(Action::StopEarly) => {
                return Ok(finish(Status::StoppedByObserver, &bracket, iters));
            }
            Some(Action::AssumeFeasible) => true,
            Some(Action::AssumeInfeasible) => false,
            None => evaluated,
        };

        trace!("iter {iters}: bracket {bracket}, x = {x}, feasible = {feasible}");

        if feasible == below {
            bracket.lower_hi(x);
        } else {
            bracket.raise_lo(x);
        }
    }

    Ok(finish(Status::Converged, &bracket, iters))
}

/// Searches `[lo, hi]` without observer support.
///
/// This is a convenience wrapper around [`search`] that uses a no-op observer.
///
/// # Errors
///
/// Returns [`Error::InvalidBracket`] if an endpoint is non-finite or `lo > hi`.
pub fn search_unobserved<P>(
    bracket: [f64; 2],
    predicate: &P,
    tie_break: TieBreak,
    config: &Config,
) -> Result<Solution, Error>
where
    P: Predicate<f64> + ?Sized,
{
    search(bracket, predicate, tie_break, config, ())
}

/// The bracket edge that is known to be feasible.
fn feasible_edge(bracket: &Bracket, below: bool) -> f64 {
    if below { bracket.hi() } else { bracket.lo() }
}
