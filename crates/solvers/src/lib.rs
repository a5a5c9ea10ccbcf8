//! Binary search engines for monotone feasibility predicates.
//!
//! Both engines search a decision space rather than an array: they bisect an
//! interval of candidate answers and use a caller-supplied [`Predicate`] to
//! decide which half still contains the boundary between infeasible and
//! feasible candidates. A [`TieBreak`] selects which end of the feasible
//! region is reported.
//!
//! # Engines
//!
//! - [`integer`] — exact search over an inclusive integer domain
//! - [`real`] — epsilon-bounded search over a real interval
//!
//! [`Predicate`]: monosearch_core::Predicate
//! [`TieBreak`]: monosearch_core::TieBreak

pub mod integer;
pub mod real;
