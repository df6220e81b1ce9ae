//! Local search operators for improving a route.
//!
//! - [`two_opt`] — Open-path 2-opt segment reversal

mod two_opt;

pub use two_opt::{two_opt, two_opt_improve, TwoOptOutcome};
