//! Median of two sorted arrays by searching over a partition cut.
//!
//! Splitting the combined sequence into a left half of `half = ⌈total / 2⌉`
//! elements means taking `cut` elements from the shorter array and
//! `half - cut` from the longer one. The right `cut` is the smallest one where
//! the shorter array's first right element is not below the longer array's
//! last left element; the median then sits at the seam.

use log::debug;
use monosearch_core::Predicate;
use monosearch_solvers::integer;

use crate::{Error, bounds};

/// Feasible when a cut of the shorter array leaves no cross-ordering violation
/// on the right side of the seam.
///
/// Monotone: moving the cut right raises the shorter array's right element
/// and lowers the longer array's left element.
#[derive(Debug, Clone, Copy)]
pub struct CutOrder<'a> {
    short: &'a [i64],
    long: &'a [i64],
    half: usize,
}

impl<'a> CutOrder<'a> {
    /// Creates the predicate for two sorted arrays in either order.
    #[must_use]
    pub fn new(a: &'a [i64], b: &'a [i64]) -> Self {
        let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };
        let half = (short.len() + long.len()).div_ceil(2);
        Self { short, long, half }
    }

    /// Returns the range of valid cuts into the shorter array.
    #[must_use]
    pub fn cut_range(&self) -> [usize; 2] {
        [self.half.saturating_sub(self.long.len()), self.short.len()]
    }

    /// Returns the largest element on the left of the seam.
    fn left_max(&self, cut: usize) -> Option<i64> {
        let from_short = cut.checked_sub(1).and_then(|i| self.short.get(i));
        let from_long = (self.half - cut)
            .checked_sub(1)
            .and_then(|i| self.long.get(i));
        from_short.max(from_long).copied()
    }

    /// Returns the smallest element on the right of the seam.
    fn right_min(&self, cut: usize) -> Option<i64> {
        let from_short = self.short.get(cut);
        let from_long = self.long.get(self.half - cut);
        match (from_short, from_long) {
            (Some(a), Some(b)) => Some(*a.min(b)),
            (a, b) => a.or(b).copied(),
        }
    }
}

impl Predicate<usize> for CutOrder<'_> {
    fn is_feasible(&self, cut: usize) -> bool {
        let Some(right) = self.short.get(cut) else {
            return true;
        };
        match (self.half - cut).checked_sub(1) {
            Some(i) => self.long.get(i).is_none_or(|left| right >= left),
            None => true,
        }
    }
}

/// Returns the median of the combined contents of two sorted arrays.
///
/// Returns `Ok(None)` when both arrays are empty.
///
/// # Errors
///
/// Returns [`Error::Unsorted`] if either array is not in non-decreasing order.
#[allow(clippy::cast_precision_loss)]
pub fn median_of_sorted(a: &[i64], b: &[i64]) -> Result<Option<f64>, Error> {
    if !bounds::is_sorted(a) || !bounds::is_sorted(b) {
        return Err(Error::Unsorted);
    }
    if a.is_empty() && b.is_empty() {
        return Ok(None);
    }

    let order = CutOrder::new(a, b);
    let [lo, hi] = order.cut_range();
    // The full shorter array always satisfies the predicate.
    let cut = integer::smallest_feasible([lo, hi], &order)?.unwrap_or(hi);

    let Some(left) = order.left_max(cut) else {
        return Ok(None);
    };
    let median = if (a.len() + b.len()) % 2 == 1 {
        left as f64
    } else {
        let right = order.right_min(cut).unwrap_or(left);
        (left as f64 + right as f64) / 2.0
    };

    debug!(
        "median_of_sorted: {} + {} values, cut {cut} -> {median}",
        a.len(),
        b.len()
    );
    Ok(Some(median))
}
