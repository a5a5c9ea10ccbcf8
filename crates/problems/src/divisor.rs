//! Smallest divisor whose rounded-up quotient sum stays within a limit.

use log::debug;
use monosearch_core::Predicate;
use monosearch_solvers::integer;

use crate::{Error, bounds};

/// Returns `Σ ceil(v / divisor)` over all values, saturating at `u64::MAX`.
///
/// A zero divisor yields `u64::MAX` unless every value is zero.
#[must_use]
pub fn quotient_sum(values: &[u64], divisor: u64) -> u64 {
    if divisor == 0 {
        return if values.iter().all(|&v| v == 0) { 0 } else { u64::MAX };
    }
    values
        .iter()
        .fold(0_u64, |sum, &v| sum.saturating_add(v.div_ceil(divisor)))
}

/// Feasible when the quotient sum does not exceed the limit.
///
/// Monotone: a larger divisor never increases the sum.
#[derive(Debug, Clone, Copy)]
pub struct DivisorLimit<'a> {
    values: &'a [u64],
    limit: u64,
}

impl<'a> DivisorLimit<'a> {
    #[must_use]
    pub fn new(values: &'a [u64], limit: u64) -> Self {
        Self { values, limit }
    }
}

impl Predicate<u64> for DivisorLimit<'_> {
    fn is_feasible(&self, divisor: u64) -> bool {
        quotient_sum(self.values, divisor) <= self.limit
    }
}

/// Returns the smallest positive divisor keeping the quotient sum within `limit`.
///
/// The search runs over `[1, max value]`: dividing by the largest value makes
/// every positive quotient one. Returns `Ok(None)` when `limit` is below the
/// number of positive values.
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] if there are no values.
pub fn smallest_divisor(values: &[u64], limit: u64) -> Result<Option<u64>, Error> {
    let max = bounds::max_value(values)?;

    let divisor = integer::smallest_feasible([1, max.max(1)], &DivisorLimit::new(values, limit))?;

    debug!(
        "smallest_divisor: {} values, limit {limit} -> {divisor:?}",
        values.len()
    );
    Ok(divisor)
}
