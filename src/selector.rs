//! Runs the requested solvers and picks the best route.
//!
//! Each requested algorithm runs once, sequentially, on the same read-only
//! matrix. The best solution is the one with the lowest total duration; exact
//! ties go to the algorithm earliest in [`Algorithm::ALL`].

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::constructive::nearest_neighbor;
use crate::distance::CostMatrix;
use crate::error::Result;
use crate::exact::exhaustive_search;
use crate::ga::{genetic, GeneticConfig};
use crate::local_search::two_opt;
use crate::models::{Algorithm, Solution, SolutionSet};

/// Which algorithms to run and how to tune them.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Algorithm;
/// use u_tsp::selector::SolveOptions;
///
/// let options = SolveOptions::default()
///     .with_algorithms([Algorithm::Population, Algorithm::Greedy, Algorithm::Greedy])
///     .with_seed(42);
/// assert_eq!(options.requested(), vec![Algorithm::Greedy, Algorithm::Population]);
/// assert_eq!(SolveOptions::default().requested(), vec![Algorithm::Greedy]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SolveOptions {
    algorithms: Vec<Algorithm>,
    genetic: GeneticConfig,
    seed: Option<u64>,
}

impl SolveOptions {
    /// Sets the algorithms to run. Duplicates are ignored.
    pub fn with_algorithms<I>(mut self, algorithms: I) -> Self
    where
        I: IntoIterator<Item = Algorithm>,
    {
        self.algorithms = algorithms.into_iter().collect();
        self
    }

    /// Sets the population solver parameters.
    pub fn with_genetic(mut self, genetic: GeneticConfig) -> Self {
        self.genetic = genetic;
        self
    }

    /// Seeds the random source of the population solver.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Population solver parameters.
    pub fn genetic(&self) -> &GeneticConfig {
        &self.genetic
    }

    /// Seed for the population solver, if fixed.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Distinct requested algorithms in priority order.
    ///
    /// Falls back to [`Algorithm::Greedy`] when none were requested.
    pub fn requested(&self) -> Vec<Algorithm> {
        if self.algorithms.is_empty() {
            return vec![Algorithm::Greedy];
        }
        Algorithm::ALL
            .into_iter()
            .filter(|a| self.algorithms.contains(a))
            .collect()
    }
}

/// Solutions of one request and the winning algorithm.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolveResponse {
    /// Result of every algorithm; absent when not requested or infeasible.
    pub solutions: SolutionSet,
    /// Algorithm whose solution has the lowest total duration, if any.
    pub best: Option<Algorithm>,
}

impl SolveResponse {
    fn new(solutions: SolutionSet) -> Self {
        let best = solutions.best().map(|(a, _)| a);
        Self { solutions, best }
    }

    /// The winning solution, if any algorithm produced one.
    pub fn best_solution(&self) -> Option<&Solution> {
        self.best.and_then(|a| self.solutions.get(a))
    }

    /// The winning visiting order, for handoff to geometry lookup.
    pub fn best_order(&self) -> Option<&[usize]> {
        self.best_solution().map(|s| s.order.as_slice())
    }
}

/// Runs the requested solvers with an explicit random source.
///
/// # Errors
///
/// Fails before any solver runs if the matrix has fewer than three
/// waypoints or the population parameters are invalid while the population
/// solver is requested.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::CostMatrix;
/// use u_tsp::models::Algorithm;
/// use u_tsp::selector::{solve_with_rng, SolveOptions};
///
/// let pos = [0.0_f64, 2.0, 1.0, 3.0];
/// let rows: Vec<Vec<f64>> = pos
///     .iter()
///     .map(|a| pos.iter().map(|b| (a - b).abs()).collect())
///     .collect();
/// let m = CostMatrix::from_rows(rows.clone(), rows).expect("valid");
///
/// let options = SolveOptions::default()
///     .with_algorithms([Algorithm::Exhaustive, Algorithm::Greedy]);
/// let mut rng = u_numflow::random::create_rng(1);
/// let response = solve_with_rng(&m, &options, &mut rng).expect("valid input");
/// assert_eq!(response.best, Some(Algorithm::Exhaustive));
/// assert_eq!(response.best_order(), Some(&[0, 2, 1, 3][..]));
/// ```
pub fn solve_with_rng<R: Rng>(
    matrix: &CostMatrix,
    options: &SolveOptions,
    rng: &mut R,
) -> Result<SolveResponse> {
    matrix.ensure_solvable()?;
    let requested = options.requested();
    if requested.contains(&Algorithm::Population) {
        options.genetic.validate()?;
    }
    debug!("Solving {} waypoints with {requested:?}", matrix.size());

    let mut solutions = SolutionSet::new();
    for algorithm in requested {
        let solution = match algorithm {
            Algorithm::Exhaustive => exhaustive_search(matrix),
            Algorithm::Greedy => nearest_neighbor(matrix),
            Algorithm::LocalSearch => two_opt(matrix),
            Algorithm::Population => Some(genetic(matrix, &options.genetic, rng)?),
        };
        if solution.is_none() {
            debug!("{algorithm} produced no solution");
        }
        solutions.insert(algorithm, solution);
    }

    let response = SolveResponse::new(solutions);
    match response.best_solution() {
        Some(best) => info!(
            "Best route from {}: duration {}, distance {}",
            response.best.map_or("none", |a| a.as_str()),
            best.total_duration,
            best.total_distance
        ),
        None => info!("No algorithm produced a route"),
    }
    Ok(response)
}

/// Runs the requested solvers, seeding the random source from the options.
///
/// Without a seed the generator is seeded from the operating system.
pub fn solve(matrix: &CostMatrix, options: &SolveOptions) -> Result<SolveResponse> {
    match options.seed {
        Some(seed) => {
            let mut rng = u_numflow::random::create_rng(seed);
            solve_with_rng(matrix, options, &mut rng)
        }
        None => {
            let mut rng = StdRng::from_os_rng();
            solve_with_rng(matrix, options, &mut rng)
        }
    }
}

/// A solve request as received at the service boundary.
///
/// ```json
/// {
///   "matrix": {"durations": [[0, 1, 2], [1, 0, 1], [2, 1, 0]],
///              "distances": [[0, 10, 20], [10, 0, 10], [20, 10, 0]]},
///   "sourceIndex": 0,
///   "algorithms": ["greedy", "population"],
///   "genetic": {"generations": 100},
///   "seed": 7
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveRequest {
    /// Travel costs between the waypoints.
    pub matrix: CostMatrix,
    /// Waypoint every route starts at.
    #[serde(default)]
    pub source_index: usize,
    /// Algorithms to run; empty means greedy only.
    #[serde(default)]
    pub algorithms: Vec<Algorithm>,
    /// Population solver parameters.
    #[serde(default)]
    pub genetic: GeneticConfig,
    /// Seed for the population solver.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl SolveRequest {
    /// Parses a request from JSON, validating the matrix.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Solver options carried by this request.
    pub fn options(&self) -> SolveOptions {
        SolveOptions {
            algorithms: self.algorithms.clone(),
            genetic: self.genetic.clone(),
            seed: self.seed,
        }
    }

    /// Solves the request.
    ///
    /// The matrix is re-rooted so that `source_index` is the origin, and
    /// every returned route is expressed in the request's own indices.
    pub fn run(&self) -> Result<SolveResponse> {
        self.matrix.ensure_solvable()?;
        let options = self.options();
        if self.source_index == 0 {
            return solve(&self.matrix, &options);
        }

        let (rooted, mapping) = self.matrix.rerooted(self.source_index)?;
        let response = solve(&rooted, &options)?;
        Ok(SolveResponse {
            solutions: response.solutions.map_solutions(|s| s.remap(&mapping)),
            best: response.best,
        })
    }
}
