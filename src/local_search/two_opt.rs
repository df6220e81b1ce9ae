//! Open-path 2-opt improvement.
//!
//! # Algorithm
//!
//! The route is an open path starting at the origin; there is no return leg.
//! For positions `1 <= i < k <= n-2`, reversing `r[i..=k]` replaces the
//! edges `(r[i-1], r[i])` and `(r[k], r[k+1])` with `(r[i-1], r[k])` and
//! `(r[i], r[k+1])`:
//!
//! ```text
//! delta = t(r[i-1], r[k]) + t(r[i], r[k+1]) - t(r[i-1], r[i]) - t(r[k], r[k+1])
//! ```
//!
//! With asymmetric durations the interior of the segment is also traversed
//! backwards, so its direction change is added to the delta. On symmetric
//! matrices that term is zero.
//!
//! If delta < 0, the reversal is applied immediately (first-improvement
//! strategy). Sweeps over all `(i, k)` repeat until one applies no move.
//!
//! # Complexity
//!
//! O(n²) per sweep on symmetric input (O(n³) with the asymmetric interior
//! term), O(n³) sweeps worst case for convergence.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use tracing::{debug, trace};

use crate::constructive::nearest_neighbor_order;
use crate::distance::{CostMatrix, DenseMatrix};
use crate::evaluation::evaluate;
use crate::models::Solution;

/// Improvements smaller than this are floating-point noise, not moves.
const IMPROVEMENT_EPS: f64 = 1e-10;

/// Result of a 2-opt run.
#[derive(Debug, Clone, PartialEq)]
pub struct TwoOptOutcome {
    /// The improved visiting order.
    pub order: Vec<usize>,
    /// Number of segment reversals applied.
    pub reversals: usize,
    /// Number of full sweeps performed, including the final one.
    pub sweeps: usize,
}

/// Applies 2-opt improvement to a visiting order.
///
/// Works on a copy of `order`; the caller's route is left untouched. The
/// first entry is never moved.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::CostMatrix;
/// use u_tsp::local_search::two_opt_improve;
///
/// let pos = [0.0_f64, 1.0, 2.0, 3.0];
/// let rows: Vec<Vec<f64>> = pos
///     .iter()
///     .map(|a| pos.iter().map(|b| (a - b).abs()).collect())
///     .collect();
/// let m = CostMatrix::from_rows(rows.clone(), rows).expect("valid");
///
/// // Suboptimal order: 0, 2, 1, 3
/// let out = two_opt_improve(&[0, 2, 1, 3], &m);
/// assert_eq!(out.order, vec![0, 1, 2, 3]);
/// assert_eq!(out.reversals, 1);
/// ```
pub fn two_opt_improve(order: &[usize], matrix: &CostMatrix) -> TwoOptOutcome {
    let mut current = order.to_vec();
    let n = current.len();
    let durations = matrix.durations();
    let symmetric = durations.is_symmetric(0.0);

    let mut reversals = 0;
    let mut sweeps = 0;
    let mut improved = true;

    while improved {
        improved = false;
        sweeps += 1;
        if n < 4 {
            break;
        }

        for i in 1..n - 2 {
            for k in i + 1..n - 1 {
                let mut delta = two_opt_delta(&current, durations, i, k);
                if !symmetric {
                    delta += interior_delta(&current, durations, i, k);
                }
                if delta < -IMPROVEMENT_EPS {
                    current[i..=k].reverse();
                    reversals += 1;
                    improved = true;
                }
            }
        }
        trace!("2-opt sweep {sweeps}: {reversals} reversals so far");
    }

    TwoOptOutcome {
        order: current,
        reversals,
        sweeps,
    }
}

/// Builds a nearest-neighbor route and improves it with 2-opt.
///
/// Returns `None` for matrices with fewer than two waypoints.
pub fn two_opt(matrix: &CostMatrix) -> Option<Solution> {
    let start = nearest_neighbor_order(matrix);
    let outcome = two_opt_improve(&start, matrix);
    let solution = evaluate(&outcome.order, matrix)?;
    debug!(
        "2-opt over {} waypoints: {} reversals in {} sweeps, duration {}",
        matrix.size(),
        outcome.reversals,
        outcome.sweeps,
        solution.total_duration
    );
    Some(solution)
}

/// Change in boundary edge cost from reversing `route[i..=k]`.
///
/// Before: ... - route[i-1] - route[i] - ... - route[k] - route[k+1] - ...
/// After:  ... - route[i-1] - route[k] - ... - route[i] - route[k+1] - ...
fn two_opt_delta(route: &[usize], t: &DenseMatrix, i: usize, k: usize) -> f64 {
    let (a, b) = (route[i - 1], route[i]);
    let (c, d) = (route[k], route[k + 1]);
    (t.get(a, c) + t.get(b, d)) - (t.get(a, b) + t.get(c, d))
}

/// Change in interior cost from traversing `route[i..=k]` backwards.
fn interior_delta(route: &[usize], t: &DenseMatrix, i: usize, k: usize) -> f64 {
    route[i..=k]
        .windows(2)
        .map(|p| t.get(p[1], p[0]) - t.get(p[0], p[1]))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constructive::nearest_neighbor;
    use crate::evaluation::order_duration;

    fn points(coords: &[(f64, f64)]) -> CostMatrix {
        let rows: Vec<Vec<f64>> = coords
            .iter()
            .map(|a| {
                coords
                    .iter()
                    .map(|b| ((a.0 - b.0).powi(2) + (a.1 - b.1).powi(2)).sqrt())
                    .collect()
            })
            .collect();
        CostMatrix::from_rows(rows.clone(), rows).expect("valid")
    }

    #[test]
    fn test_2opt_already_optimal() {
        let m = points(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)]);
        let out = two_opt_improve(&[0, 1, 2, 3], &m);
        assert_eq!(out.order, vec![0, 1, 2, 3]);
        assert_eq!(out.reversals, 0);
        assert_eq!(out.sweeps, 1);
    }

    #[test]
    fn test_2opt_three_waypoints_untouched() {
        let m = points(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
        let out = two_opt_improve(&[0, 1, 2], &m);
        assert_eq!(out.order, vec![0, 1, 2]);
        assert_eq!(out.reversals, 0);
    }

    #[test]
    fn test_2opt_uncrosses() {
        // Square corners visited diagonally: 0 → 2 → 1 → 3 crosses itself.
        let m = points(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
        let before = order_duration(&[0, 2, 1, 3], &m);
        let out = two_opt_improve(&[0, 2, 1, 3], &m);
        let after = order_duration(&out.order, &m);
        assert!(after < before);
        assert!((after - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_2opt_does_not_alias_input() {
        let m = points(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)]);
        let input = vec![0, 3, 2, 1];
        let _ = two_opt_improve(&input, &m);
        assert_eq!(input, vec![0, 3, 2, 1]);
    }

    #[test]
    fn test_2opt_keeps_origin_and_last() {
        let m = points(&[
            (5.0, 5.0),
            (0.0, 0.0),
            (10.0, 0.0),
            (0.0, 10.0),
            (10.0, 10.0),
        ]);
        let out = two_opt_improve(&[0, 1, 4, 2, 3], &m);
        assert_eq!(out.order[0], 0);
        let mut sorted = out.order.clone();
        sorted.sort();
        assert_eq!(sorted, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_2opt_not_worse_than_greedy() {
        let m = points(&[
            (0.0, 0.0),
            (4.0, 1.0),
            (1.0, 3.0),
            (5.0, 5.0),
            (2.0, 0.5),
            (3.0, 4.0),
            (6.0, 2.0),
        ]);
        let greedy = nearest_neighbor(&m).expect("non-trivial");
        let improved = two_opt(&m).expect("non-trivial");
        assert!(improved.total_duration <= greedy.total_duration);
    }

    #[test]
    fn test_2opt_asymmetric_never_worsens() {
        let t = vec![
            vec![0.0, 1.0, 2.0, 9.0, 4.0],
            vec![8.0, 0.0, 1.0, 3.0, 7.0],
            vec![2.0, 9.0, 0.0, 1.0, 2.0],
            vec![5.0, 1.0, 6.0, 0.0, 1.0],
            vec![3.0, 2.0, 8.0, 4.0, 0.0],
        ];
        let m = CostMatrix::from_rows(t.clone(), t).expect("valid");
        let start = vec![0, 4, 3, 2, 1];
        let before = order_duration(&start, &m);
        let out = two_opt_improve(&start, &m);
        assert!(order_duration(&out.order, &m) <= before);
    }

    #[test]
    fn test_2opt_ignores_rounding_noise() {
        // Reversing 1..=2 swaps edges 0.1 + 0.2 for 0.15 + 0.15: equal in
        // exact arithmetic, 5.6e-17 apart in floating point.
        let t = vec![
            vec![0.0, 0.1, 0.15, 1.0],
            vec![0.1, 0.0, 1.0, 0.15],
            vec![0.15, 1.0, 0.0, 0.2],
            vec![1.0, 0.15, 0.2, 0.0],
        ];
        let m = CostMatrix::from_rows(t.clone(), t).expect("valid");
        assert!(two_opt_delta(&[0, 1, 2, 3], m.durations(), 1, 2) < 0.0);
        let out = two_opt_improve(&[0, 1, 2, 3], &m);
        assert_eq!(out.order, vec![0, 1, 2, 3]);
        assert_eq!(out.reversals, 0);
    }

    #[test]
    fn test_interior_delta_zero_when_symmetric() {
        let m = points(&[(0.0, 0.0), (1.0, 2.0), (3.0, 1.0), (2.0, 2.0)]);
        assert_eq!(interior_delta(&[0, 1, 2, 3], m.durations(), 1, 3), 0.0);
    }
}
