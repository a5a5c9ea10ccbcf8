//! Core traits and types for binary search on the answer.
//!
//! This crate defines the shared abstractions that the search engines and the
//! concrete problems build on:
//!
//! - [`Predicate`] — a monotone feasibility test over a single candidate
//! - [`TieBreak`] — whether a search reports the smallest or largest feasible
//!   candidate
//! - [`Observer`] — receives solver events and optionally returns control actions
//! - [`DomainInt`] — overflow-safe midpoint and stepping for integer domains

mod numeric;
mod observer;
mod predicate;
mod tie_break;

pub use numeric::DomainInt;
pub use observer::Observer;
pub use predicate::Predicate;
pub use tie_break::TieBreak;
