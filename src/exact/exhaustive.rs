//! Exhaustive enumeration of visiting orders.
//!
//! Fixes the origin at position 0 and tries all `(n-1)!` orderings of the
//! remaining waypoints in lexicographic order, keeping the first one with
//! the lowest total duration.
//!
//! # Complexity
//!
//! O(n · (n-1)!). Instances above [`MAX_EXHAUSTIVE_SIZE`] are not attempted.

use tracing::debug;

use crate::distance::CostMatrix;
use crate::evaluation::{evaluate, order_duration};
use crate::models::Solution;

/// Largest instance the exhaustive search will enumerate (10! orderings).
pub const MAX_EXHAUSTIVE_SIZE: usize = 11;

/// Finds the minimum-duration route by trying every ordering.
///
/// Returns `None` when the matrix has more than [`MAX_EXHAUSTIVE_SIZE`]
/// waypoints or fewer than two. Ties keep the lexicographically first order.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::CostMatrix;
/// use u_tsp::exact::exhaustive_search;
///
/// let t = vec![
///     vec![0.0, 9.0, 1.0],
///     vec![9.0, 0.0, 1.0],
///     vec![1.0, 1.0, 0.0],
/// ];
/// let m = CostMatrix::from_rows(t.clone(), t).expect("valid");
/// let sol = exhaustive_search(&m).expect("small instance");
/// assert_eq!(sol.order, vec![0, 2, 1]);
/// assert_eq!(sol.total_duration, 2.0);
/// ```
pub fn exhaustive_search(matrix: &CostMatrix) -> Option<Solution> {
    let n = matrix.size();
    if n > MAX_EXHAUSTIVE_SIZE {
        debug!("Skipping exhaustive search for {n} waypoints (limit {MAX_EXHAUSTIVE_SIZE})");
        return None;
    }
    if n < 2 {
        return None;
    }

    let mut order: Vec<usize> = (0..n).collect();
    let mut best = order.clone();
    let mut best_duration = order_duration(&order, matrix);
    let mut candidates: u64 = 1;

    while next_permutation(&mut order[1..]) {
        candidates += 1;
        let d = order_duration(&order, matrix);
        if d < best_duration {
            best_duration = d;
            best.copy_from_slice(&order);
        }
    }

    debug!("Exhaustive search over {candidates} orders: best duration {best_duration}");
    evaluate(&best, matrix)
}

/// Rearranges `items` into the next lexicographically greater permutation.
///
/// Returns `false` (leaving `items` sorted descending) when it is already
/// the last permutation.
fn next_permutation(items: &mut [usize]) -> bool {
    if items.len() < 2 {
        return false;
    }
    let mut i = items.len() - 1;
    while i > 0 && items[i - 1] >= items[i] {
        i -= 1;
    }
    if i == 0 {
        return false;
    }
    let mut j = items.len() - 1;
    while items[j] <= items[i - 1] {
        j -= 1;
    }
    items.swap(i - 1, j);
    items[i..].reverse();
    true
}
