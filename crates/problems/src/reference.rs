//! Brute-force oracles for checking the searches.
//!
//! Every function here enumerates candidates one at a time, so costs are
//! linear in the answer range. Inputs are expected to be valid and small.

use monosearch_core::{DomainInt, Predicate, TieBreak};

/// Scans `[lo, hi]` one candidate at a time for the preferred feasible value.
///
/// Scans upward for [`TieBreak::SmallestFeasible`] and downward for
/// [`TieBreak::LargestFeasible`], returning the first feasible candidate.
pub fn linear_scan<T, P>(domain: [T; 2], predicate: &P, tie_break: TieBreak) -> Option<T>
where
    T: DomainInt,
    P: Predicate<T> + ?Sized,
{
    let [lo, hi] = domain;
    if lo > hi {
        return None;
    }

    let (start, end) = match tie_break {
        TieBreak::SmallestFeasible => (lo, hi),
        TieBreak::LargestFeasible => (hi, lo),
    };
    let mut x = start;
    loop {
        if predicate.is_feasible(x) {
            return Some(x);
        }
        if x == end {
            return None;
        }
        x = match tie_break {
            TieBreak::SmallestFeasible => x.checked_next()?,
            TieBreak::LargestFeasible => x.checked_prev()?,
        };
    }
}

/// Returns true if the verdicts over `[lo, hi]` flip at most once, in the
/// direction `tie_break` expects.
///
/// Smallest-feasible searches need `false…false true…true`; largest-feasible
/// searches need `true…true false…false`.
pub fn is_monotone<T, P>(domain: [T; 2], predicate: &P, tie_break: TieBreak) -> bool
where
    T: DomainInt,
    P: Predicate<T> + ?Sized,
{
    let [lo, hi] = domain;
    let mut previous: Option<bool> = None;
    let mut x = lo;
    while x <= hi {
        let verdict = predicate.is_feasible(x);
        let flipped_back = match (tie_break, previous) {
            (TieBreak::SmallestFeasible, Some(true)) => !verdict,
            (TieBreak::LargestFeasible, Some(false)) => verdict,
            _ => false,
        };
        if flipped_back {
            return false;
        }
        previous = Some(verdict);
        match x.checked_next() {
            Some(next) if x < hi => x = next,
            _ => break,
        }
    }
    true
}

/// Tries every speed from 1 up to the largest pile.
pub fn min_eating_speed(piles: &[u64], hours: u64) -> Option<u64> {
    let max = piles.iter().copied().max()?.max(1);
    (1..=max).find(|&speed| piles.iter().map(|p| p.div_ceil(speed)).sum::<u64>() <= hours)
}

/// Tries every capacity from the heaviest package up to the total weight.
pub fn ship_within_days(weights: &[u64], days: u64) -> Option<u64> {
    let max = weights.iter().copied().max()?;
    let total: u64 = weights.iter().sum();
    (max..=total).find(|&capacity| greedy_parts(weights, capacity) <= days)
}

/// Tries every largest-part bound from the largest value up to the total.
pub fn min_largest_part(values: &[u64], parts: u64) -> Option<u64> {
    if parts == 0 || parts > values.len() as u64 {
        return None;
    }
    let max = values.iter().copied().max()?;
    let total: u64 = values.iter().sum();
    (max..=total).find(|&bound| greedy_parts(values, bound) <= parts)
}

fn greedy_parts(values: &[u64], bound: u64) -> u64 {
    let mut parts = 1;
    let mut load = 0;
    for &v in values {
        if load + v > bound {
            parts += 1;
            load = 0;
        }
        load += v;
    }
    parts
}

/// Raises the distance from 1 until the cows no longer fit.
pub fn aggressive_cows(stalls: &[u64], cows: u64) -> Option<u64> {
    if cows == 0 || cows > stalls.len() as u64 {
        return None;
    }
    let mut sorted = stalls.to_vec();
    sorted.sort_unstable();
    let span = sorted.last()? - sorted.first()?;

    let fits = |distance: u64| {
        let mut placed = 1;
        let mut last = sorted[0];
        for &stall in &sorted[1..] {
            if stall - last >= distance {
                placed += 1;
                last = stall;
            }
        }
        placed >= cows
    };

    for distance in 1..=span {
        if !fits(distance) {
            return Some(distance - 1);
        }
    }
    Some(span)
}

/// Tries every divisor from 1 up to the largest value.
pub fn smallest_divisor(values: &[u64], limit: u64) -> Option<u64> {
    let max = values.iter().copied().max()?.max(1);
    (1..=max).find(|&d| values.iter().map(|v| v.div_ceil(d)).sum::<u64>() <= limit)
}

/// Tries every day from the earliest bloom to the latest.
pub fn min_days(bloom_days: &[u64], bouquets: u64, flowers_per_bouquet: u64) -> Option<u64> {
    if bouquets.checked_mul(flowers_per_bouquet)? > bloom_days.len() as u64 {
        return None;
    }
    let first = bloom_days.iter().copied().min()?;
    let last = bloom_days.iter().copied().max()?;

    (first..=last).find(|&day| {
        let mut made = 0;
        let mut run = 0;
        for &bloom in bloom_days {
            if bloom <= day {
                run += 1;
                if run == flowers_per_bouquet {
                    made += 1;
                    run = 0;
                }
            } else {
                run = 0;
            }
        }
        made >= bouquets
    })
}

/// Counts upward while the next square still fits.
pub fn floor_sqrt(n: u64) -> u64 {
    let mut x = 0_u64;
    while (x + 1).checked_mul(x + 1).is_some_and(|square| square <= n) {
        x += 1;
    }
    x
}

/// Tries every candidate from 0 up to `m` for an exact power.
pub fn nth_root(exponent: u32, m: u64) -> Option<u64> {
    for x in 0..=m {
        match x.checked_pow(exponent) {
            Some(power) if power == m => return Some(x),
            Some(power) if power < m => {}
            _ => return None,
        }
    }
    None
}

/// Walks the positive integers, counting the ones absent from `values`.
pub fn kth_missing_positive(values: &[u64], k: u64) -> u64 {
    let mut missing = 0;
    let mut x = 0;
    while missing < k {
        x += 1;
        if !values.contains(&x) {
            missing += 1;
        }
    }
    x
}

/// Merges both arrays and reads the median off the result.
#[allow(clippy::cast_precision_loss)]
pub fn median_of_sorted(a: &[i64], b: &[i64]) -> Option<f64> {
    let mut merged = Vec::with_capacity(a.len() + b.len());
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        if a[i] <= b[j] {
            merged.push(a[i]);
            i += 1;
        } else {
            merged.push(b[j]);
            j += 1;
        }
    }
    merged.extend_from_slice(&a[i..]);
    merged.extend_from_slice(&b[j..]);

    let n = merged.len();
    if n == 0 {
        return None;
    }
    if n % 2 == 1 {
        Some(merged[n / 2] as f64)
    } else {
        Some((merged[n / 2 - 1] as f64 + merged[n / 2] as f64) / 2.0)
    }
}

/// Lowers the allowed gap from the full span in fixed steps until `added`
/// stations no longer suffice.
///
/// Accurate only to within `step`, and the cost grows with `span / step`.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn gas_stations_step_scan(sorted_stations: &[u64], added: u64, step: f64) -> f64 {
    let (Some(first), Some(last)) = (sorted_stations.first(), sorted_stations.last()) else {
        return 0.0;
    };
    let high = (last - first) as f64;
    let steps = (high / step).floor() as u64;

    for i in 0..=steps {
        let d = high - i as f64 * step;
        if crate::gas_stations::stations_needed(sorted_stations, d) > added {
            return d + step;
        }
    }
    0.0
}

/// Places stations one at a time into the gap with the longest current section.
///
/// Splitting a gap of length `g` into `s` equal sections gives sections of
/// `g / s`, so this greedy allocation is exact.
#[allow(clippy::cast_precision_loss)]
pub fn gas_stations_greedy(sorted_stations: &[u64], added: u64) -> f64 {
    let gaps: Vec<f64> = sorted_stations
        .windows(2)
        .map(|pair| (pair[1] - pair[0]) as f64)
        .collect();
    let mut sections = vec![1_u64; gaps.len()];
    let section = |i: usize, sections: &[u64]| gaps[i] / sections[i] as f64;

    for _ in 0..added {
        let widest = (0..gaps.len())
            .max_by(|&i, &j| section(i, &sections).total_cmp(&section(j, &sections)));
        match widest {
            Some(i) => sections[i] += 1,
            None => break,
        }
    }

    (0..gaps.len())
        .map(|i| section(i, &sections))
        .fold(0.0, f64::max)
}
