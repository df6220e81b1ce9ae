//! Genetic algorithm for route ordering.
//!
//! - [`Tour`] — Visiting-order chromosome with cached duration
//! - [`sequential_constructive_crossover`] — SCX crossover (Ahmed, 2010)
//! - [`swap_mutation`] — Origin-preserving swap mutation
//! - [`GeneticConfig`] — Generations, population size, mutation rate
//! - [`genetic`] — Elitist generational loop

mod chromosome;
mod config;
mod crossover;
mod solver;

pub use chromosome::Tour;
pub use config::GeneticConfig;
pub use crossover::{sequential_constructive_crossover, swap_mutation};
pub use solver::genetic;
