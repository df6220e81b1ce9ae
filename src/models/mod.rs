//! Domain model types for single-depot route ordering.
//!
//! Provides evaluated solutions with their legs, the closed set of solving
//! algorithms, and the per-algorithm result set.

mod algorithm;
mod solution;

pub use algorithm::{Algorithm, SolutionSet};
pub use solution::{Leg, Solution};
