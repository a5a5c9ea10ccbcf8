//! Minimize the largest gap between gas stations after adding new ones.
//!
//! New stations may go anywhere on the line, so the answer is real-valued and
//! the search runs on the real engine. Its precision is the caller's
//! [`Config`] epsilon.

use log::debug;
use monosearch_core::{Predicate, TieBreak};
use monosearch_solvers::real::{self, Config, Status};

use crate::{Error, bounds};

/// Returns the new stations needed so that no gap exceeds `max_gap`.
///
/// A gap of length `g` needs `ceil(g / max_gap) - 1` extra stations. A
/// non-positive `max_gap` is unreachable for any non-zero gap and yields
/// `u64::MAX`.
#[must_use]
pub fn stations_needed(sorted_stations: &[u64], max_gap: f64) -> u64 {
    sorted_stations
        .windows(2)
        .map(|pair| pair[1] - pair[0])
        .fold(0_u64, |total, gap| {
            total.saturating_add(stations_in_gap(gap, max_gap))
        })
}

#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn stations_in_gap(gap: u64, max_gap: f64) -> u64 {
    if gap == 0 {
        return 0;
    }
    if max_gap <= 0.0 {
        return u64::MAX;
    }
    // Float-to-int casts saturate, so huge ratios clamp to u64::MAX.
    let sections = (gap as f64 / max_gap).ceil() as u64;
    sections.saturating_sub(1)
}

/// Feasible when at most `added` new stations bring every gap down to the candidate.
///
/// Monotone: a larger allowed gap never needs more stations.
#[derive(Debug, Clone, Copy)]
pub struct MaxGap<'a> {
    stations: &'a [u64],
    added: u64,
}

impl<'a> MaxGap<'a> {
    /// Creates the predicate over station positions in non-decreasing order.
    #[must_use]
    pub fn new(sorted_stations: &'a [u64], added: u64) -> Self {
        Self {
            stations: sorted_stations,
            added,
        }
    }
}

impl Predicate<f64> for MaxGap<'_> {
    fn is_feasible(&self, max_gap: f64) -> bool {
        stations_needed(self.stations, max_gap) <= self.added
    }
}

/// Returns the smallest achievable largest gap after adding `added` stations.
///
/// The search runs over `[0, largest existing gap]` and reports a value at
/// most `config.epsilon()` above the true optimum.
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] for no stations, [`Error::Unsorted`] if
/// positions are not in non-decreasing order, and [`Error::NotConverged`] if
/// `config.max_iters()` runs out before the bracket narrows to epsilon.
#[allow(clippy::cast_precision_loss)]
pub fn minimize_max_distance(
    sorted_stations: &[u64],
    added: u64,
    config: &Config,
) -> Result<f64, Error> {
    if sorted_stations.is_empty() {
        return Err(Error::EmptyInput);
    }
    if !bounds::is_sorted(sorted_stations) {
        return Err(Error::Unsorted);
    }

    let widest = sorted_stations
        .windows(2)
        .map(|pair| pair[1] - pair[0])
        .max()
        .unwrap_or(0) as f64;

    let solution = real::search_unobserved(
        [0.0, widest],
        &MaxGap::new(sorted_stations, added),
        TieBreak::SmallestFeasible,
        config,
    )?;

    debug!(
        "minimize_max_distance: {} stations, {added} added -> {:?} ({:?}, {} iters)",
        sorted_stations.len(),
        solution.value,
        solution.status,
        solution.iters
    );

    if solution.status == Status::MaxIters {
        return Err(Error::NotConverged {
            iters: solution.iters,
        });
    }

    // The widest existing gap needs no new stations, so the anchor is always
    // feasible and the search always reports a value.
    Ok(solution.value_or(widest))
}
