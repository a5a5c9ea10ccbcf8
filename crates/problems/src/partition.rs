//! Minimized largest contiguous part.
//!
//! Splitting an ordered sequence into at most `parts` contiguous, non-empty
//! parts so that the largest part sum is as small as possible. The same search
//! answers three classic framings:
//!
//! - [`allocate_books`]: pages per book, each student reads a contiguous run
//! - [`painters_partition`]: board lengths, each painter paints a contiguous run
//! - [`split_array_largest_sum`]: split an array into `k` subarrays
//!
//! The search runs over `[max value, total]`: no part can be smaller than its
//! largest element, and one part holding everything is always enough.

use log::debug;
use monosearch_core::Predicate;
use monosearch_solvers::integer;

use crate::{Error, bounds};

/// Returns the fewest contiguous parts so that no part sums above `max_part`.
///
/// Parts are filled greedily left to right. A value larger than `max_part`
/// fits in no part and yields `u64::MAX`.
#[must_use]
pub fn parts_needed(values: &[u64], max_part: u64) -> u64 {
    let mut parts = 0_u64;
    let mut current = 0_u64;

    for &value in values {
        if value > max_part {
            return u64::MAX;
        }
        if parts == 0 || current.saturating_add(value) > max_part {
            parts += 1;
            current = value;
        } else {
            current += value;
        }
    }

    parts
}

/// Feasible when the values split into at most `parts` parts of sum `<= max_part`.
///
/// Monotone: a larger cap never needs more parts.
#[derive(Debug, Clone, Copy)]
pub struct MaxPartSum<'a> {
    values: &'a [u64],
    parts: u64,
}

impl<'a> MaxPartSum<'a> {
    #[must_use]
    pub fn new(values: &'a [u64], parts: u64) -> Self {
        Self { values, parts }
    }
}

impl Predicate<u64> for MaxPartSum<'_> {
    fn is_feasible(&self, max_part: u64) -> bool {
        parts_needed(self.values, max_part) <= self.parts
    }
}

/// Returns the smallest achievable largest part sum over at most `parts` parts.
///
/// Every part must hold at least one value, so `parts == 0` or more parts than
/// values yields `Ok(None)`.
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] for no values and [`Error::Overflow`] if the
/// total overflows `u64`.
pub fn min_largest_part(values: &[u64], parts: u64) -> Result<Option<u64>, Error> {
    let (max, total) = bounds::max_and_sum(values)?;

    if parts == 0 || parts > bounds::len(values) {
        debug!(
            "min_largest_part: {parts} parts for {} values is infeasible",
            values.len()
        );
        return Ok(None);
    }

    let largest = integer::smallest_feasible([max, total], &MaxPartSum::new(values, parts))?;

    debug!(
        "min_largest_part: {} values, {parts} parts -> {largest:?}",
        values.len()
    );
    Ok(largest)
}

/// Returns the minimum of the maximum pages any student reads.
///
/// Books are allocated in order, each student gets a contiguous non-empty run.
///
/// # Errors
///
/// See [`min_largest_part`].
pub fn allocate_books(pages: &[u64], students: u64) -> Result<Option<u64>, Error> {
    min_largest_part(pages, students)
}

/// Returns the minimum time to paint all boards with `painters` painters.
///
/// Each painter paints a contiguous run of boards, one unit of length per unit
/// of time, and all painters work in parallel.
///
/// # Errors
///
/// See [`min_largest_part`].
pub fn painters_partition(boards: &[u64], painters: u64) -> Result<Option<u64>, Error> {
    min_largest_part(boards, painters)
}

/// Returns the minimized largest subarray sum when splitting into `k` subarrays.
///
/// # Errors
///
/// See [`min_largest_part`].
pub fn split_array_largest_sum(values: &[u64], k: u64) -> Result<Option<u64>, Error> {
    min_largest_part(values, k)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greedy_part_counts() {
        assert_eq!(parts_needed(&[7, 2, 5, 10, 8], 18), 2);
        assert_eq!(parts_needed(&[7, 2, 5, 10, 8], 17), 3);
        assert_eq!(parts_needed(&[7, 2, 5, 10, 8], 32), 1);
        assert_eq!(parts_needed(&[7, 2, 5, 10, 8], 9), u64::MAX);
        assert_eq!(parts_needed(&[], 5), 0);
    }

    #[test]
    fn allocates_books() {
        assert_eq!(allocate_books(&[12, 34, 67, 90], 2), Ok(Some(113)));
        assert_eq!(allocate_books(&[25, 46, 28, 49, 24], 4), Ok(Some(71)));
    }

    #[test]
    fn more_students_than_books_is_infeasible() {
        assert_eq!(allocate_books(&[10, 20], 3), Ok(None));
        assert_eq!(allocate_books(&[10, 20], 0), Ok(None));
    }

    #[test]
    fn partitions_painters() {
        assert_eq!(painters_partition(&[10, 20, 30, 40], 2), Ok(Some(60)));
        assert_eq!(painters_partition(&[5, 5, 5, 5], 4), Ok(Some(5)));
    }

    #[test]
    fn splits_array() {
        assert_eq!(split_array_largest_sum(&[7, 2, 5, 10, 8], 2), Ok(Some(18)));
        assert_eq!(split_array_largest_sum(&[1, 2, 3, 4, 5], 2), Ok(Some(9)));
        assert_eq!(split_array_largest_sum(&[1, 4, 4], 3), Ok(Some(4)));
    }

    #[test]
    fn single_part_takes_everything() {
        assert_eq!(min_largest_part(&[3, 1, 4, 1, 5], 1), Ok(Some(14)));
    }

    #[test]
    fn rejects_empty_and_overflowing_input() {
        assert_eq!(min_largest_part(&[], 1), Err(Error::EmptyInput));
        assert_eq!(min_largest_part(&[u64::MAX, 1], 2), Err(Error::Overflow));
    }
}
