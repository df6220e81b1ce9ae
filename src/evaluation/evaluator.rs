//! Route cost evaluation and route checks.

use crate::distance::CostMatrix;
use crate::error::{Error, Result};
use crate::models::{Leg, Solution};

/// Evaluates a visiting order against a cost matrix.
///
/// Builds one [`Leg`] per consecutive pair and sums distances and durations
/// in leg order. The path is open: no leg returns to the origin.
///
/// Returns `None` if `order` has fewer than two entries. Indices are not
/// checked; use [`check_order`] on untrusted input.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::CostMatrix;
/// use u_tsp::evaluation::evaluate;
///
/// let d = vec![
///     vec![0.0, 10.0, 20.0],
///     vec![10.0, 0.0, 5.0],
///     vec![20.0, 5.0, 0.0],
/// ];
/// let t = vec![
///     vec![0.0, 1.0, 2.0],
///     vec![1.0, 0.0, 3.0],
///     vec![2.0, 3.0, 0.0],
/// ];
/// let m = CostMatrix::from_rows(d, t).expect("valid");
/// let sol = evaluate(&[0, 2, 1], &m).expect("long enough");
/// assert_eq!(sol.total_distance, 25.0);
/// assert_eq!(sol.total_duration, 5.0);
/// assert!(evaluate(&[0], &m).is_none());
/// ```
pub fn evaluate(order: &[usize], matrix: &CostMatrix) -> Option<Solution> {
    if order.len() < 2 {
        return None;
    }

    let mut legs = Vec::with_capacity(order.len() - 1);
    let mut total_distance = 0.0;
    let mut total_duration = 0.0;
    for pair in order.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        let distance = matrix.distance(from, to);
        let duration = matrix.duration(from, to);
        total_distance += distance;
        total_duration += duration;
        legs.push(Leg {
            from,
            to,
            distance,
            duration,
        });
    }

    Some(Solution {
        order: order.to_vec(),
        total_distance,
        total_duration,
        legs,
    })
}

/// Total duration of an open path, without building legs.
///
/// Sums in the same order as [`evaluate`], so the two agree exactly.
pub fn order_duration(order: &[usize], matrix: &CostMatrix) -> f64 {
    order
        .windows(2)
        .fold(0.0, |acc, pair| acc + matrix.duration(pair[0], pair[1]))
}

/// Returns `true` if `order` is a permutation of `0..size` starting at 0.
pub fn is_valid_order(order: &[usize], size: usize) -> bool {
    if order.len() != size || order.first() != Some(&0) {
        return false;
    }
    let mut seen = vec![false; size];
    for &w in order {
        if w >= size || seen[w] {
            return false;
        }
        seen[w] = true;
    }
    true
}

/// Checks that `order` is a well-formed route for `matrix`.
pub fn check_order(order: &[usize], matrix: &CostMatrix) -> Result<()> {
    let size = matrix.size();
    if order.len() != size {
        return Err(Error::RouteLength {
            len: order.len(),
            size,
        });
    }
    if !is_valid_order(order, size) {
        return Err(Error::InvalidRoute { size });
    }
    Ok(())
}
