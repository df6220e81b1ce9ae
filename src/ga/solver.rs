//! Generational loop of the population solver.
//!
//! # Algorithm
//!
//! 1. Start from `population_size` random tours, each `[0, shuffled 1..n]`.
//! 2. Each generation: rank by total duration, keep the best quarter (at
//!    least two) unchanged, and refill with SCX children of two distinct
//!    elites picked uniformly. Each child is swap-mutated with probability
//!    `mutation_rate`.
//! 3. After the last generation, return the best tour of the population.
//!
//! Elites are never altered, so the best duration never increases from one
//! generation to the next.

use rand::Rng;
use tracing::{debug, trace};
use u_metaheur::ga::Individual;

use super::chromosome::Tour;
use super::config::GeneticConfig;
use super::crossover::{sequential_constructive_crossover, swap_mutation};
use crate::distance::CostMatrix;
use crate::error::{Error, Result};
use crate::evaluation::evaluate;
use crate::models::Solution;

/// Evolves visiting orders with elitism, SCX crossover and swap mutation.
///
/// All random draws come from `rng`, so a seeded generator makes runs
/// reproducible.
///
/// # Errors
///
/// [`Error::InvalidConfig`] if `config` fails validation and
/// [`Error::TooFewWaypoints`] below three waypoints.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::CostMatrix;
/// use u_tsp::ga::{genetic, GeneticConfig};
///
/// let pos = [0.0_f64, 4.0, 1.0, 3.0, 2.0];
/// let rows: Vec<Vec<f64>> = pos
///     .iter()
///     .map(|a| pos.iter().map(|b| (a - b).abs()).collect())
///     .collect();
/// let m = CostMatrix::from_rows(rows.clone(), rows).expect("valid");
///
/// let config = GeneticConfig::default()
///     .with_generations(30)
///     .with_population_size(20);
/// let mut rng = u_numflow::random::create_rng(42);
/// let sol = genetic(&m, &config, &mut rng).expect("valid input");
/// assert_eq!(sol.order, vec![0, 2, 4, 3, 1]);
/// ```
pub fn genetic<R: Rng>(matrix: &CostMatrix, config: &GeneticConfig, rng: &mut R) -> Result<Solution> {
    config.validate()?;
    matrix.ensure_solvable()?;

    let n = matrix.size();
    let size = config.population_size();
    let elites = config.elite_count();
    debug!(
        "Genetic search over {n} waypoints: {} generations, population {size}, {elites} elites",
        config.generations()
    );

    let mut population: Vec<Tour> = (0..size).map(|_| Tour::random(n, rng)).collect();

    for generation in 0..config.generations() {
        rank(&mut population, matrix);
        trace!("Generation {generation}: best duration {}", population[0].fitness());

        population.truncate(elites);
        while population.len() < size {
            let picks = rand::seq::index::sample(rng, elites, 2);
            let mut child = sequential_constructive_crossover(
                population[picks.index(0)].order(),
                population[picks.index(1)].order(),
                matrix.durations(),
            );
            if rng.random_bool(config.mutation_rate()) {
                swap_mutation(&mut child, rng);
            }
            population.push(Tour::new(child));
        }
    }

    rank(&mut population, matrix);
    let best = population.swap_remove(0);
    debug!("Genetic search finished: best duration {}", best.fitness());
    evaluate(best.order(), matrix).ok_or(Error::TooFewWaypoints {
        min: crate::distance::MIN_WAYPOINTS,
        got: n,
    })
}

/// Evaluates unscored tours and sorts the population by ascending duration.
///
/// The sort is stable, so equally good tours keep their relative order.
fn rank(population: &mut [Tour], matrix: &CostMatrix) {
    for tour in population.iter_mut() {
        tour.evaluate(matrix);
    }
    population.sort_by(|a, b| a.fitness().total_cmp(&b.fitness()));
}
