//! A genetic algorithm that approximates the Travelling Salesman Problem.
//!
//! A population of random tours is evolved for a fixed number of generations
//! with elitist and roulette selection, ordered crossover and swap mutation.
//! The run returns the final population, the best tour ever seen and three
//! per-generation convergence series.
pub mod crossover;
pub mod error;
pub mod evolution;
pub mod fitness;
pub mod geometry;
pub mod individual;
pub mod mutation;
pub mod persistence;
pub mod population;
pub mod rng;
pub mod selection;
pub mod strategy;

// Re-export commonly used types for convenience
pub use error::{GeneticError, OptionExt, Result, ResultExt};
pub use evolution::{EvolutionLauncher, EvolutionOptions, EvolutionResult, LogLevel};
pub use geometry::City;
pub use individual::Individual;
pub use rng::RandomNumberGenerator;
pub use strategy::{BreedStrategy, OrderedCrossoverStrategy};
