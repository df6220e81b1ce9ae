//! # u-tsp
//!
//! Single-depot route ordering over a precomputed travel-cost matrix.
//! Several interchangeable solvers turn a distance/duration matrix into a
//! visiting order that starts at waypoint 0, and a selector reports the best.
//!
//! ## Modules
//!
//! - [`distance`] — Dense tables, validated [`CostMatrix`](distance::CostMatrix), great-circle estimate
//! - [`models`] — Solution, leg, algorithm and result-set types
//! - [`evaluation`] — Route cost evaluation and route checks
//! - [`exact`] — Exhaustive search for small instances
//! - [`constructive`] — Nearest-neighbor construction
//! - [`local_search`] — Open-path 2-opt
//! - [`ga`] — Genetic algorithm with sequential constructive crossover
//! - [`selector`] — Runs requested solvers and picks the best route
//! - [`cache`] — Bounded, lock-protected response cache for routing lookups
//! - [`error`] — Error type

pub mod cache;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod exact;
pub mod ga;
pub mod local_search;
pub mod models;
pub mod selector;

pub use error::{Error, Result};
