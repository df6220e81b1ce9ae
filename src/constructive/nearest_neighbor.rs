//! Nearest-neighbor constructive heuristic.
//!
//! Builds a route greedily: starting from the origin, always move to the
//! unvisited waypoint with the shortest travel duration.
//!
//! # Complexity
//!
//! O(n²) where n = number of waypoints.
//!
//! # Reference
//!
//! This is the simplest constructive heuristic for TSP. While solution
//! quality is typically 15-25% above optimal, it provides a fast baseline
//! and the starting point for 2-opt.

use tracing::debug;

use crate::distance::CostMatrix;
use crate::evaluation::evaluate;
use crate::models::Solution;

/// Constructs a route using the nearest-neighbor heuristic.
///
/// Candidates are scanned in ascending index order and only a strictly
/// shorter duration replaces the current pick, so among equally near
/// waypoints the smallest index is chosen. The result is deterministic.
///
/// Returns `None` for matrices with fewer than two waypoints.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::CostMatrix;
/// use u_tsp::constructive::nearest_neighbor;
///
/// // Waypoints on a line at 0, 3, 1, 2.
/// let pos = [0.0_f64, 3.0, 1.0, 2.0];
/// let rows: Vec<Vec<f64>> = pos
///     .iter()
///     .map(|a| pos.iter().map(|b| (a - b).abs()).collect())
///     .collect();
/// let m = CostMatrix::from_rows(rows.clone(), rows).expect("valid");
///
/// let sol = nearest_neighbor(&m).expect("non-trivial");
/// assert_eq!(sol.order, vec![0, 2, 3, 1]);
/// assert_eq!(sol.total_duration, 3.0);
/// ```
pub fn nearest_neighbor(matrix: &CostMatrix) -> Option<Solution> {
    let order = nearest_neighbor_order(matrix);
    let solution = evaluate(&order, matrix)?;
    debug!(
        "Nearest neighbor over {} waypoints: duration {}",
        matrix.size(),
        solution.total_duration
    );
    Some(solution)
}

/// Returns the nearest-neighbor visiting order without evaluating it.
pub fn nearest_neighbor_order(matrix: &CostMatrix) -> Vec<usize> {
    let n = matrix.size();
    if n == 0 {
        return Vec::new();
    }

    let mut visited = vec![false; n];
    visited[0] = true; // origin
    let mut order = Vec::with_capacity(n);
    order.push(0);
    let mut current = 0;

    while order.len() < n {
        let unvisited = (1..n).filter(|&i| !visited[i]);
        match matrix.durations().nearest(current, unvisited) {
            Some(next) => {
                visited[next] = true;
                order.push(next);
                current = next;
            }
            None => break,
        }
    }

    order
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(pos: &[f64]) -> CostMatrix {
        let rows: Vec<Vec<f64>> = pos
            .iter()
            .map(|a| pos.iter().map(|b| (a - b).abs()).collect())
            .collect();
        CostMatrix::from_rows(rows.clone(), rows).expect("valid")
    }

    #[test]
    fn test_nn_line() {
        let m = line(&[0.0, 1.0, 2.0, 3.0]);
        let sol = nearest_neighbor(&m).expect("non-trivial");
        // Should visit in order 1, 2, 3 (nearest each time)
        assert_eq!(sol.order, vec![0, 1, 2, 3]);
        assert_eq!(sol.total_duration, 3.0);
    }

    #[test]
    fn test_nn_chooses_nearest() {
        let m = line(&[0.0, 10.0, 1.0]);
        let sol = nearest_neighbor(&m).expect("non-trivial");
        // Should pick waypoint 2 first (duration 1) then 1 (duration 9)
        assert_eq!(sol.order, vec![0, 2, 1]);
    }

    #[test]
    fn test_nn_uses_durations_not_distances() {
        let d = vec![
            vec![0.0, 1.0, 9.0],
            vec![1.0, 0.0, 1.0],
            vec![9.0, 1.0, 0.0],
        ];
        let t = vec![
            vec![0.0, 9.0, 1.0],
            vec![9.0, 0.0, 1.0],
            vec![1.0, 1.0, 0.0],
        ];
        let m = CostMatrix::from_rows(d, t).expect("valid");
        assert_eq!(nearest_neighbor_order(&m), vec![0, 2, 1]);
    }

    #[test]
    fn test_nn_ties_pick_lowest_index() {
        let n = 6;
        let rows: Vec<Vec<f64>> = (0..n)
            .map(|i| (0..n).map(|j| if i == j { 0.0 } else { 7.0 }).collect())
            .collect();
        let m = CostMatrix::from_rows(rows.clone(), rows).expect("valid");
        for _ in 0..5 {
            assert_eq!(nearest_neighbor_order(&m), vec![0, 1, 2, 3, 4, 5]);
        }
    }

    #[test]
    fn test_nn_asymmetric() {
        let t = vec![
            vec![0.0, 2.0, 3.0],
            vec![2.0, 0.0, 5.0],
            vec![1.0, 0.5, 0.0],
        ];
        let m = CostMatrix::from_rows(t.clone(), t).expect("valid");
        let sol = nearest_neighbor(&m).expect("non-trivial");
        assert_eq!(sol.order, vec![0, 1, 2]);
        assert_eq!(sol.total_duration, 7.0);
    }

    #[test]
    fn test_nn_trivial() {
        let single = CostMatrix::from_rows(vec![vec![0.0]], vec![vec![0.0]]).expect("valid");
        assert_eq!(nearest_neighbor_order(&single), vec![0]);
        assert!(nearest_neighbor(&single).is_none());
    }
}
