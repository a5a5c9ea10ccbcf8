//! Minimum number of days to make bouquets from adjacent bloomed flowers.
//!
//! Flower `i` blooms on day `bloom_days[i]`. A bouquet takes
//! `flowers_per_bouquet` adjacent bloomed flowers, and each flower goes into at
//! most one bouquet.

use log::debug;
use monosearch_core::Predicate;
use monosearch_solvers::integer;

use crate::{Error, bounds};

/// Returns how many bouquets can be made on `day`.
///
/// Each run of adjacent flowers that have bloomed by `day` contributes
/// `run / flowers_per_bouquet` bouquets. A zero bouquet size yields zero.
#[must_use]
pub fn bouquets_by_day(bloom_days: &[u64], day: u64, flowers_per_bouquet: u64) -> u64 {
    if flowers_per_bouquet == 0 {
        return 0;
    }

    let mut bouquets = 0_u64;
    let mut run = 0_u64;
    for &bloom in bloom_days {
        if bloom <= day {
            run += 1;
        } else {
            bouquets += run / flowers_per_bouquet;
            run = 0;
        }
    }
    bouquets + run / flowers_per_bouquet
}

/// Feasible when enough bouquets can be made by the candidate day.
///
/// Monotone: flowers never wilt, so later days never make fewer bouquets.
#[derive(Debug, Clone, Copy)]
pub struct BouquetsByDay<'a> {
    bloom_days: &'a [u64],
    bouquets: u64,
    flowers_per_bouquet: u64,
}

impl<'a> BouquetsByDay<'a> {
    #[must_use]
    pub fn new(bloom_days: &'a [u64], bouquets: u64, flowers_per_bouquet: u64) -> Self {
        Self {
            bloom_days,
            bouquets,
            flowers_per_bouquet,
        }
    }
}

impl Predicate<u64> for BouquetsByDay<'_> {
    fn is_feasible(&self, day: u64) -> bool {
        bouquets_by_day(self.bloom_days, day, self.flowers_per_bouquet) >= self.bouquets
    }
}

/// Returns the first day on which `bouquets` bouquets can be made.
///
/// The search runs over `[earliest bloom, latest bloom]`. Returns `Ok(None)`
/// when the bouquets need more flowers than there are.
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] for no flowers and [`Error::ZeroParameter`]
/// if `flowers_per_bouquet` is zero.
pub fn min_days(
    bloom_days: &[u64],
    bouquets: u64,
    flowers_per_bouquet: u64,
) -> Result<Option<u64>, Error> {
    if flowers_per_bouquet == 0 {
        return Err(Error::ZeroParameter {
            name: "flowers_per_bouquet",
        });
    }
    let (first, last) = bounds::min_and_max(bloom_days)?;

    let enough_flowers = bouquets
        .checked_mul(flowers_per_bouquet)
        .is_some_and(|needed| needed <= bounds::len(bloom_days));
    if !enough_flowers {
        debug!(
            "min_days: {bouquets} x {flowers_per_bouquet} flowers exceeds {} flowers",
            bloom_days.len()
        );
        return Ok(None);
    }

    let predicate = BouquetsByDay::new(bloom_days, bouquets, flowers_per_bouquet);
    let day = integer::smallest_feasible([first, last], &predicate)?;

    debug!(
        "min_days: {} flowers, {bouquets} x {flowers_per_bouquet} -> {day:?}",
        bloom_days.len()
    );
    Ok(day)
}
