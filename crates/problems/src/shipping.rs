//! Minimum ship capacity to deliver packages within a day budget.
//!
//! Packages ship in the given order. Each day the ship is loaded greedily
//! until the next package would exceed its capacity.

use log::debug;
use monosearch_core::Predicate;
use monosearch_solvers::integer;

use crate::{Error, bounds, partition};

/// Returns the days needed to ship every package at `capacity`.
///
/// A package heavier than `capacity` can never ship and yields `u64::MAX`.
#[must_use]
pub fn days_needed(weights: &[u64], capacity: u64) -> u64 {
    partition::parts_needed(weights, capacity)
}

/// Feasible when all packages ship within the day budget.
///
/// Monotone: a larger capacity never needs more days.
#[derive(Debug, Clone, Copy)]
pub struct ShipWithinDays<'a> {
    weights: &'a [u64],
    days: u64,
}

impl<'a> ShipWithinDays<'a> {
    #[must_use]
    pub fn new(weights: &'a [u64], days: u64) -> Self {
        Self { weights, days }
    }
}

impl Predicate<u64> for ShipWithinDays<'_> {
    fn is_feasible(&self, capacity: u64) -> bool {
        days_needed(self.weights, capacity) <= self.days
    }
}

/// Returns the least capacity that ships every package within `days` days.
///
/// The search runs over `[heaviest package, total weight]`. Returns
/// `Ok(None)` only when `days == 0`.
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] for no packages and [`Error::Overflow`] if the
/// total weight overflows `u64`.
pub fn ship_within_days(weights: &[u64], days: u64) -> Result<Option<u64>, Error> {
    let (max, total) = bounds::max_and_sum(weights)?;

    let capacity = integer::smallest_feasible([max, total], &ShipWithinDays::new(weights, days))?;

    debug!(
        "ship_within_days: {} packages, {days} days -> {capacity:?}",
        weights.len()
    );
    Ok(capacity)
}
