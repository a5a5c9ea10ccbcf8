//! Minimum eating speed (Koko eating bananas).
//!
//! Piles of bananas must be finished within `hours`. Each hour one pile is
//! eaten from at speed `k`; a pile smaller than `k` still takes the whole
//! hour. The answer is the smallest `k` that fits the budget.

use log::debug;
use monosearch_core::Predicate;
use monosearch_solvers::integer;

use crate::{Error, bounds};

/// Returns the hours needed to finish every pile at `speed`.
///
/// A zero speed never finishes a non-empty pile and yields `u64::MAX`.
#[must_use]
pub fn hours_needed(piles: &[u64], speed: u64) -> u64 {
    if speed == 0 {
        return if piles.iter().all(|&p| p == 0) { 0 } else { u64::MAX };
    }
    piles
        .iter()
        .fold(0_u64, |hours, &pile| hours.saturating_add(pile.div_ceil(speed)))
}

/// Feasible when every pile can be finished within the hour budget.
///
/// Monotone: a faster speed never needs more hours.
#[derive(Debug, Clone, Copy)]
pub struct EatingSpeed<'a> {
    piles: &'a [u64],
    hours: u64,
}

impl<'a> EatingSpeed<'a> {
    #[must_use]
    pub fn new(piles: &'a [u64], hours: u64) -> Self {
        Self { piles, hours }
    }
}

impl Predicate<u64> for EatingSpeed<'_> {
    fn is_feasible(&self, speed: u64) -> bool {
        hours_needed(self.piles, speed) <= self.hours
    }
}

/// Returns the minimum eating speed that finishes all piles within `hours`.
///
/// Returns `Ok(None)` when even the largest pile per hour is too slow, which
/// happens when there are more piles than hours.
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] if there are no piles.
pub fn min_eating_speed(piles: &[u64], hours: u64) -> Result<Option<u64>, Error> {
    let max = bounds::max_value(piles)?;

    let speed = integer::smallest_feasible([1, max.max(1)], &EatingSpeed::new(piles, hours))?;

    debug!("min_eating_speed: {} piles, {hours} hours -> {speed:?}", piles.len());
    Ok(speed)
}
