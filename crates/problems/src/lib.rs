//! Classic binary-search-on-the-answer problems.
//!
//! Each module pairs a pure feasibility computation with a predicate type and
//! a single entry point that picks the search bounds and tie-break, then hands
//! the predicate to an engine from [`monosearch_solvers`].
//!
//! | Module | Answer | Tie-break |
//! |---|---|---|
//! | [`koko`] | minimum eating speed | smallest feasible |
//! | [`shipping`] | minimum ship capacity | smallest feasible |
//! | [`partition`] | minimized largest contiguous part | smallest feasible |
//! | [`cows`] | maximized minimum spacing | largest feasible |
//! | [`divisor`] | smallest divisor under a sum limit | smallest feasible |
//! | [`bouquets`] | minimum day to make bouquets | smallest feasible |
//! | [`gas_stations`] | minimized maximum station gap (real) | smallest feasible |
//! | [`roots`] | integer square and nth roots | largest / smallest feasible |
//! | [`missing`] | kth missing positive integer | smallest feasible |
//! | [`median`] | median of two sorted arrays | smallest feasible cut |
//!
//! Infeasible but well-formed input (more partitions than elements, more cows
//! than stalls, and so on) yields `Ok(None)`. Malformed input yields an
//! [`Error`].
//!
//! The brute-force oracles in `reference` are compiled only for tests or with
//! the `reference` feature.

mod bounds;
mod error;

pub mod bouquets;
pub mod cows;
pub mod divisor;
pub mod gas_stations;
pub mod koko;
pub mod median;
pub mod missing;
pub mod partition;
pub mod roots;
pub mod shipping;

#[cfg(any(test, feature = "reference"))]
pub mod reference;


pub use error::Error;
