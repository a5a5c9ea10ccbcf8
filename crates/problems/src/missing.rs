//! Kth positive integer missing from a strictly increasing sequence.

use log::debug;
use monosearch_core::Predicate;
use monosearch_solvers::integer;

use crate::{Error, bounds};

/// Returns how many positive integers in `1..=x` are absent from `values`.
///
/// `values` must be strictly increasing and positive.
#[must_use]
pub fn missing_up_to(values: &[u64], x: u64) -> u64 {
    let present = values.partition_point(|&v| v <= x);
    x.saturating_sub(bounds::len(&values[..present]))
}

/// Feasible when at least `k` positive integers up to the candidate are missing.
///
/// Monotone: the missing count never decreases as the candidate grows.
#[derive(Debug, Clone, Copy)]
pub struct MissingAtLeast<'a> {
    values: &'a [u64],
    k: u64,
}

impl<'a> MissingAtLeast<'a> {
    #[must_use]
    pub fn new(values: &'a [u64], k: u64) -> Self {
        Self { values, k }
    }
}

impl Predicate<u64> for MissingAtLeast<'_> {
    fn is_feasible(&self, x: u64) -> bool {
        missing_up_to(self.values, x) >= self.k
    }
}

/// Returns the `k`-th positive integer not present in `values`.
///
/// The answer is the smallest `x` with `k` missing integers in `1..=x`, which
/// is at most `k + values.len()`.
///
/// # Errors
///
/// Returns [`Error::ZeroParameter`] if `k` is zero, [`Error::Unsorted`] if
/// `values` is not strictly increasing and positive, and [`Error::Overflow`]
/// if the upper bound overflows `u64`.
pub fn kth_missing_positive(values: &[u64], k: u64) -> Result<u64, Error> {
    if k == 0 {
        return Err(Error::ZeroParameter { name: "k" });
    }
    if values.first() == Some(&0) || !bounds::is_strictly_increasing(values) {
        return Err(Error::Unsorted);
    }

    let hi = k.checked_add(bounds::len(values)).ok_or(Error::Overflow)?;
    let found = integer::smallest_feasible([1, hi], &MissingAtLeast::new(values, k))?;

    debug!("kth_missing_positive: {} values, k = {k} -> {found:?}", values.len());
    // At most `len` integers below `hi` are present, so `hi` always qualifies.
    Ok(found.unwrap_or(hi))
}
