//! Tour chromosome for the population solver.
//!
//! A tour is a complete visiting order with the origin at position 0. Its
//! fitness is the total duration of the order; lower is better.

use rand::Rng;
use u_metaheur::ga::Individual;
use u_numflow::random::shuffle;

use crate::distance::CostMatrix;
use crate::evaluation::order_duration;

/// A visiting order with its cached total duration.
///
/// # Examples
///
/// ```
/// use u_tsp::ga::Tour;
/// use u_metaheur::ga::Individual;
///
/// let tour = Tour::new(vec![0, 3, 1, 2]);
/// assert_eq!(tour.order(), &[0, 3, 1, 2]);
/// assert_eq!(tour.fitness(), f64::INFINITY);
/// ```
#[derive(Debug, Clone)]
pub struct Tour {
    order: Vec<usize>,
    fitness: f64,
}

impl Tour {
    /// Creates an unevaluated tour from a visiting order.
    pub fn new(order: Vec<usize>) -> Self {
        Self {
            order,
            fitness: f64::INFINITY,
        }
    }

    /// Creates `[0, shuffled 1..n]`.
    pub fn random<R: Rng>(n: usize, rng: &mut R) -> Self {
        let mut order: Vec<usize> = (0..n).collect();
        if let Some(rest) = order.get_mut(1..) {
            shuffle(rest, rng);
        }
        Self::new(order)
    }

    /// Returns the visiting order.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Returns a mutable reference to the visiting order.
    ///
    /// Any cached fitness is cleared.
    pub fn order_mut(&mut self) -> &mut Vec<usize> {
        self.fitness = f64::INFINITY;
        &mut self.order
    }

    /// Consumes the tour, returning its order.
    pub fn into_order(self) -> Vec<usize> {
        self.order
    }

    /// Number of waypoints in this tour.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true if the tour has no waypoints.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns `true` once a fitness has been recorded.
    pub fn is_evaluated(&self) -> bool {
        self.fitness.is_finite()
    }

    /// Computes and caches the total duration, if not already known.
    pub fn evaluate(&mut self, matrix: &CostMatrix) -> f64 {
        if !self.is_evaluated() {
            self.fitness = order_duration(&self.order, matrix);
        }
        self.fitness
    }
}

impl Individual for Tour {
    type Fitness = f64;

    fn fitness(&self) -> f64 {
        self.fitness
    }

    fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix() -> CostMatrix {
        let t = vec![
            vec![0.0, 1.0, 2.0],
            vec![1.0, 0.0, 4.0],
            vec![2.0, 4.0, 0.0],
        ];
        CostMatrix::from_rows(t.clone(), t).expect("valid")
    }

    #[test]
    fn test_tour_new() {
        let tour = Tour::new(vec![0, 1, 2]);
        assert_eq!(tour.len(), 3);
        assert!(!tour.is_empty());
        assert!(!tour.is_evaluated());
    }

    #[test]
    fn test_random_keeps_origin() {
        let mut rng = u_numflow::random::create_rng(42);
        for _ in 0..20 {
            let tour = Tour::random(7, &mut rng);
            assert_eq!(tour.order()[0], 0);
            let mut sorted = tour.order().to_vec();
            sorted.sort();
            assert_eq!(sorted, (0..7).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_random_varies() {
        let mut rng = u_numflow::random::create_rng(3);
        let first = Tour::random(8, &mut rng).into_order();
        let differs = (0..20).any(|_| Tour::random(8, &mut rng).order() != first.as_slice());
        assert!(differs);
    }

    #[test]
    fn test_random_tiny() {
        let mut rng = u_numflow::random::create_rng(1);
        assert_eq!(Tour::random(0, &mut rng).order(), &[] as &[usize]);
        assert_eq!(Tour::random(1, &mut rng).order(), &[0]);
        assert_eq!(Tour::random(2, &mut rng).order(), &[0, 1]);
    }

    #[test]
    fn test_evaluate_caches() {
        let m = matrix();
        let mut tour = Tour::new(vec![0, 2, 1]);
        assert_eq!(tour.evaluate(&m), 6.0);
        assert!(tour.is_evaluated());
        assert_eq!(tour.fitness(), 6.0);
    }

    #[test]
    fn test_order_mut_clears_fitness() {
        let m = matrix();
        let mut tour = Tour::new(vec![0, 2, 1]);
        tour.evaluate(&m);
        tour.order_mut().swap(1, 2);
        assert!(!tour.is_evaluated());
        assert_eq!(tour.evaluate(&m), 5.0);
    }

    #[test]
    fn test_set_fitness() {
        let mut tour = Tour::new(vec![0, 1, 2]);
        tour.set_fitness(42.5);
        assert_eq!(tour.fitness(), 42.5);
        assert_eq!(tour.into_order(), vec![0, 1, 2]);
    }
}
