//! Great-circle cost estimate from coordinates.
//!
//! Stands in for a road-network matrix when none is available: distances are
//! haversine arcs on a spherical earth, durations assume a constant speed.

use super::{CostMatrix, DenseMatrix};
use crate::error::Result;

/// Mean earth radius in metres.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Average speed used for estimated durations, in metres per second (~50 km/h).
pub const DEFAULT_SPEED_MPS: f64 = 13.89;

/// Great-circle distance in metres between two `[lng, lat]` points in degrees.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::haversine;
///
/// // One degree of longitude on the equator.
/// let d = haversine([0.0, 0.0], [1.0, 0.0]);
/// assert!((d - 111_194.9).abs() < 1.0);
/// ```
pub fn haversine(a: [f64; 2], b: [f64; 2]) -> f64 {
    let (lat1, lon1) = (a[1].to_radians(), a[0].to_radians());
    let (lat2, lon2) = (b[1].to_radians(), b[0].to_radians());
    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;
    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_M * h.sqrt().min(1.0).asin()
}

impl CostMatrix {
    /// Estimates a cost matrix from `[lng, lat]` coordinates.
    ///
    /// Distances are great-circle metres; durations are distance divided by
    /// `speed_mps`. The result is symmetric with a zero diagonal.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tsp::distance::{CostMatrix, DEFAULT_SPEED_MPS};
    ///
    /// let coords = [[13.40, 52.52], [13.45, 52.50], [13.38, 52.48]];
    /// let m = CostMatrix::from_coordinates(&coords, DEFAULT_SPEED_MPS).expect("valid");
    /// assert_eq!(m.size(), 3);
    /// assert!(m.duration(0, 1) > 0.0);
    /// ```
    pub fn from_coordinates(coords: &[[f64; 2]], speed_mps: f64) -> Result<Self> {
        if !(speed_mps.is_finite() && speed_mps > 0.0) {
            return Err(crate::error::Error::InvalidConfig(format!(
                "speed must be positive, got {speed_mps}"
            )));
        }
        let n = coords.len();
        let mut distances = DenseMatrix::new(n);
        let mut durations = DenseMatrix::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = haversine(coords[i], coords[j]);
                distances.set(i, j, d);
                distances.set(j, i, d);
                durations.set(i, j, d / speed_mps);
                durations.set(j, i, d / speed_mps);
            }
        }
        tracing::trace!("Estimated {n}x{n} matrix at {speed_mps} m/s");
        CostMatrix::new(distances, durations)
    }
}
