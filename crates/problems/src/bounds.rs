//! Search-bound helpers shared by the problem modules.

use crate::Error;

/// Returns the largest value and the sum of all values.
pub(crate) fn max_and_sum(values: &[u64]) -> Result<(u64, u64), Error> {
    let (&first, rest) = values.split_first().ok_or(Error::EmptyInput)?;
    rest.iter().try_fold((first, first), |(max, sum), &v| {
        let sum = sum.checked_add(v).ok_or(Error::Overflow)?;
        Ok((max.max(v), sum))
    })
}

/// Returns the smallest and largest values.
pub(crate) fn min_and_max(values: &[u64]) -> Result<(u64, u64), Error> {
    let (&first, rest) = values.split_first().ok_or(Error::EmptyInput)?;
    Ok(rest
        .iter()
        .fold((first, first), |(min, max), &v| (min.min(v), max.max(v))))
}

/// Returns the largest value.
pub(crate) fn max_value(values: &[u64]) -> Result<u64, Error> {
    values.iter().copied().max().ok_or(Error::EmptyInput)
}

/// Returns the slice length as a `u64`.
pub(crate) fn len<T>(values: &[T]) -> u64 {
    u64::try_from(values.len()).unwrap_or(u64::MAX)
}

/// Returns true if `values` is sorted in non-decreasing order.
pub(crate) fn is_sorted<T: Ord>(values: &[T]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}

/// Returns true if `values` is sorted in strictly increasing order.
pub(crate) fn is_strictly_increasing<T: Ord>(values: &[T]) -> bool {
    values.windows(2).all(|w| w[0] < w[1])
}
