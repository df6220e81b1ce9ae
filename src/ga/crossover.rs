//! Sequential constructive crossover (SCX).
//!
//! Builds a child tour from the origin outwards. At each step both parents
//! propose the first unvisited waypoint that follows the current one in
//! their own order, and the child takes whichever proposal is cheaper to
//! reach from the current waypoint.
//!
//! # Reference
//!
//! Ahmed, Z.H. (2010). "Genetic algorithm for the traveling salesman problem
//! using sequential constructive crossover operator", *International Journal
//! of Biometrics & Bioinformatics* 3(6), 96-105.

use rand::Rng;

use crate::distance::DenseMatrix;

/// Combines two parent orders into one child order.
///
/// The child has one entry per waypoint of `durations` and starts at 0.
/// Proposal rules for each parent:
///
/// - scan forward from the parent's position of the current waypoint,
///   wrapping around, for the first unvisited entry;
/// - if the current waypoint is absent from the parent, take its first
///   unvisited entry from the start.
///
/// When both parents propose, the lower duration from the current waypoint
/// wins and an exact tie goes to `parent2`. When neither proposes, the
/// unvisited entries of `parent1` are appended in its order, followed by
/// any waypoint neither parent holds, in ascending index.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::DenseMatrix;
/// use u_tsp::ga::sequential_constructive_crossover;
///
/// let t = DenseMatrix::from_rows(&[
///     vec![0.0, 5.0, 1.0, 9.0],
///     vec![5.0, 0.0, 9.0, 1.0],
///     vec![1.0, 9.0, 0.0, 2.0],
///     vec![9.0, 1.0, 2.0, 0.0],
/// ])
/// .expect("square");
/// let child = sequential_constructive_crossover(&[0, 1, 2, 3], &[0, 2, 3, 1], &t);
/// assert_eq!(child, vec![0, 2, 3, 1]);
/// ```
pub fn sequential_constructive_crossover(
    parent1: &[usize],
    parent2: &[usize],
    durations: &DenseMatrix,
) -> Vec<usize> {
    let n = durations.size();
    if n == 0 {
        return Vec::new();
    }

    let mut child = Vec::with_capacity(n);
    let mut visited = vec![false; n];
    child.push(0);
    visited[0] = true;
    let mut current = 0;

    while child.len() < n {
        let c1 = next_unvisited(parent1, current, &visited);
        let c2 = next_unvisited(parent2, current, &visited);

        let chosen = match (c1, c2) {
            (Some(a), Some(b)) => {
                if durations.get(current, a) < durations.get(current, b) {
                    a
                } else {
                    b
                }
            }
            (Some(a), None) => a,
            (None, Some(b)) => b,
            (None, None) => {
                for c in parent1.iter().copied().chain(0..n) {
                    if !visited[c] {
                        visited[c] = true;
                        child.push(c);
                    }
                }
                break;
            }
        };

        visited[chosen] = true;
        child.push(chosen);
        current = chosen;
    }

    child
}

/// First unvisited entry after `current` in `parent`, wrapping around.
fn next_unvisited(parent: &[usize], current: usize, visited: &[bool]) -> Option<usize> {
    match parent.iter().position(|&c| c == current) {
        Some(idx) => (1..=parent.len())
            .map(|offset| parent[(idx + offset) % parent.len()])
            .find(|&c| !visited[c]),
        None => parent.iter().copied().find(|&c| !visited[c]),
    }
}

/// Swaps two distinct positions drawn uniformly from `1..len`.
///
/// Position 0 (the origin) never moves. Orders shorter than three entries
/// are left unchanged.
pub fn swap_mutation<R: Rng>(order: &mut [usize], rng: &mut R) {
    let n = order.len();
    if n < 3 {
        return;
    }
    let i = rng.random_range(1..n);
    let mut j = rng.random_range(1..n - 1);
    if j >= i {
        j += 1;
    }
    order.swap(i, j);
}
