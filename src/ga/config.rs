//! Population solver parameters.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Tuning parameters for [`genetic`](super::genetic).
///
/// Missing fields fall back to the defaults when deserialized.
///
/// # Examples
///
/// ```
/// use u_tsp::ga::GeneticConfig;
///
/// let config = GeneticConfig::default()
///     .with_generations(50)
///     .with_population_size(20)
///     .with_mutation_rate(0.2);
/// assert_eq!(config.generations(), 50);
/// assert_eq!(config.elite_count(), 5);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneticConfig {
    generations: usize,
    population_size: usize,
    mutation_rate: f64,
}

impl GeneticConfig {
    /// Default number of generations.
    pub const DEFAULT_GENERATIONS: usize = 200;
    /// Default population size.
    pub const DEFAULT_POPULATION_SIZE: usize = 64;
    /// Default per-child mutation probability.
    pub const DEFAULT_MUTATION_RATE: f64 = 0.1;

    /// Sets the number of generations.
    pub fn with_generations(mut self, generations: usize) -> Self {
        self.generations = generations;
        self
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, size: usize) -> Self {
        self.population_size = size;
        self
    }

    /// Sets the probability that a new child is mutated.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Number of generations to evolve.
    pub fn generations(&self) -> usize {
        self.generations
    }

    /// Number of tours kept in each generation.
    pub fn population_size(&self) -> usize {
        self.population_size
    }

    /// Probability that a new child receives a swap mutation.
    pub fn mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    /// Number of elites carried over unchanged: a quarter of the population,
    /// at least two, at most the whole population.
    pub fn elite_count(&self) -> usize {
        (self.population_size / 4).max(2).min(self.population_size)
    }

    /// Checks that the parameters can drive a run.
    pub fn validate(&self) -> Result<()> {
        if self.population_size < 2 {
            return Err(Error::InvalidConfig(format!(
                "population size must be at least 2, got {}",
                self.population_size
            )));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(Error::InvalidConfig(format!(
                "mutation rate must lie in [0, 1], got {}",
                self.mutation_rate
            )));
        }
        Ok(())
    }
}

impl Default for GeneticConfig {
    fn default() -> Self {
        Self {
            generations: Self::DEFAULT_GENERATIONS,
            population_size: Self::DEFAULT_POPULATION_SIZE,
            mutation_rate: Self::DEFAULT_MUTATION_RATE,
        }
    }
}
