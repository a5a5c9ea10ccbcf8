//! Aggressive cows: maximize the minimum distance between placed cows.
//!
//! Cows go into stalls at fixed positions. Placing them as far apart as
//! possible means finding the largest distance `d` such that every pair of
//! placed cows is at least `d` apart.

use log::debug;
use monosearch_core::Predicate;
use monosearch_solvers::integer;

use crate::{Error, bounds};

/// Returns how many cows fit when consecutive cows must be `distance` apart.
///
/// `sorted_stalls` must be in non-decreasing order. The first cow always goes
/// into the first stall, and each later cow into the first stall far enough
/// from the previous one.
#[must_use]
pub fn cows_placeable(sorted_stalls: &[u64], distance: u64) -> u64 {
    let Some((&first, rest)) = sorted_stalls.split_first() else {
        return 0;
    };

    let mut placed = 1_u64;
    let mut last = first;
    for &stall in rest {
        if stall - last >= distance {
            placed += 1;
            last = stall;
        }
    }
    placed
}

/// Feasible when `cows` cows fit with at least the candidate distance between them.
///
/// Monotone: a larger distance never fits more cows, so the predicate turns
/// false as the distance grows.
#[derive(Debug, Clone)]
pub struct CowSpacing {
    stalls: Vec<u64>,
    cows: u64,
}

impl CowSpacing {
    /// Creates the predicate from stall positions in any order.
    #[must_use]
    pub fn new(stalls: &[u64], cows: u64) -> Self {
        let mut stalls = stalls.to_vec();
        stalls.sort_unstable();
        Self { stalls, cows }
    }

    /// Returns the distance between the outermost stalls.
    #[must_use]
    pub fn span(&self) -> u64 {
        match (self.stalls.first(), self.stalls.last()) {
            (Some(first), Some(last)) => last - first,
            _ => 0,
        }
    }
}

impl Predicate<u64> for CowSpacing {
    fn is_feasible(&self, distance: u64) -> bool {
        cows_placeable(&self.stalls, distance) >= self.cows
    }
}

/// Returns the largest minimum distance achievable between `cows` cows.
///
/// Stall positions may be given in any order; they are not modified. Returns
/// `Ok(None)` when there are more cows than stalls. A single cow places at
/// every distance, so it reports the full span between the outermost stalls.
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] for no stalls and [`Error::ZeroParameter`]
/// if `cows` is zero.
pub fn aggressive_cows(stalls: &[u64], cows: u64) -> Result<Option<u64>, Error> {
    if stalls.is_empty() {
        return Err(Error::EmptyInput);
    }
    if cows == 0 {
        return Err(Error::ZeroParameter { name: "cows" });
    }
    if cows > bounds::len(stalls) {
        debug!("aggressive_cows: {cows} cows for {} stalls is infeasible", stalls.len());
        return Ok(None);
    }

    let predicate = CowSpacing::new(stalls, cows);
    let distance = integer::largest_feasible([0, predicate.span()], &predicate)?;

    debug!(
        "aggressive_cows: {} stalls, {cows} cows -> {distance:?}",
        stalls.len()
    );
    Ok(distance)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greedy_placement() {
        let stalls = [1, 2, 4, 8, 9];
        assert_eq!(cows_placeable(&stalls, 3), 3);
        assert_eq!(cows_placeable(&stalls, 4), 2);
        assert_eq!(cows_placeable(&stalls, 0), 5);
        assert_eq!(cows_placeable(&[], 1), 0);
    }

    #[test]
    fn maximizes_minimum_distance() {
        assert_eq!(aggressive_cows(&[1, 2, 4, 8, 9], 3), Ok(Some(3)));
        assert_eq!(aggressive_cows(&[0, 3, 4, 7, 10, 9], 4), Ok(Some(3)));
        assert_eq!(aggressive_cows(&[4, 2, 1, 3, 6], 2), Ok(Some(5)));
    }

    #[test]
    fn unsorted_input_is_left_untouched() {
        let stalls = vec![9, 1, 8, 4, 2];
        assert_eq!(aggressive_cows(&stalls, 3), Ok(Some(3)));
        assert_eq!(stalls, vec![9, 1, 8, 4, 2]);
    }

    #[test]
    fn shared_stall_positions_allow_zero_distance() {
        assert_eq!(aggressive_cows(&[5, 5, 5], 3), Ok(Some(0)));
    }

    #[test]
    fn single_cow_spans_every_stall() {
        assert_eq!(aggressive_cows(&[7, 1, 4], 1), Ok(Some(6)));
        assert_eq!(aggressive_cows(&[3], 1), Ok(Some(0)));
    }

    #[test]
    fn more_cows_than_stalls_is_infeasible() {
        assert_eq!(aggressive_cows(&[1, 2], 3), Ok(None));
    }

    #[test]
    fn rejects_degenerate_input() {
        assert_eq!(aggressive_cows(&[], 2), Err(Error::EmptyInput));
        assert_eq!(
            aggressive_cows(&[1, 2, 3], 0),
            Err(Error::ZeroParameter { name: "cows" })
        );
    }
}
