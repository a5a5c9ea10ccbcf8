//! Integer roots found by searching over the root itself.

use log::debug;
use monosearch_core::Predicate;
use monosearch_solvers::integer;

use crate::Error;

/// Feasible when the candidate squared does not exceed the target.
#[derive(Debug, Clone, Copy)]
pub struct SquareAtMost(pub u64);

impl Predicate<u64> for SquareAtMost {
    fn is_feasible(&self, x: u64) -> bool {
        x.checked_mul(x).is_some_and(|square| square <= self.0)
    }
}

/// Feasible when the candidate raised to `exponent` reaches the target.
///
/// Powers that overflow `u64` count as reaching it.
#[derive(Debug, Clone, Copy)]
pub struct PowerAtLeast {
    exponent: u32,
    target: u64,
}

impl PowerAtLeast {
    #[must_use]
    pub fn new(exponent: u32, target: u64) -> Self {
        Self { exponent, target }
    }
}

impl Predicate<u64> for PowerAtLeast {
    fn is_feasible(&self, x: u64) -> bool {
        x.checked_pow(self.exponent)
            .is_none_or(|power| power >= self.target)
    }
}

/// Returns `⌊√n⌋`, the largest `x` with `x² <= n`.
#[must_use]
pub fn floor_sqrt(n: u64) -> u64 {
    // √u64::MAX < 2³², so larger candidates are never needed.
    let hi = n.min(u64::from(u32::MAX));

    // `[0, hi]` is never inverted, and zero always qualifies.
    let root = integer::largest_feasible([0, hi], &SquareAtMost(n))
        .ok()
        .flatten()
        .unwrap_or(0);

    debug!("floor_sqrt({n}) -> {root}");
    root
}

/// Returns the exact `exponent`-th root of `m`, if it is an integer.
///
/// Finds the smallest `x` with `x^exponent >= m` and reports it only when the
/// power hits `m` exactly.
///
/// # Errors
///
/// Returns [`Error::ZeroParameter`] if `exponent` is zero.
pub fn nth_root(exponent: u32, m: u64) -> Result<Option<u64>, Error> {
    if exponent == 0 {
        return Err(Error::ZeroParameter { name: "exponent" });
    }

    let candidate = integer::smallest_feasible([0, m], &PowerAtLeast::new(exponent, m))?;
    let root = candidate.filter(|x| x.checked_pow(exponent) == Some(m));

    debug!("nth_root({exponent}, {m}) -> {root:?}");
    Ok(root)
}
