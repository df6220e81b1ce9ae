//! Travel-cost matrices.
//!
//! Provides a dense square table, the validated distance/duration
//! [`CostMatrix`], and a great-circle estimate for when no road-network
//! matrix is available.

mod cost;
mod estimate;
mod matrix;

pub use cost::{CostMatrix, MIN_WAYPOINTS};
pub use estimate::{haversine, DEFAULT_SPEED_MPS, EARTH_RADIUS_M};
pub use matrix::DenseMatrix;
