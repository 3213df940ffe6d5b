//! # BreedStrategy
//!
//! The `BreedStrategy` trait defines the interface for strategies responsible for breeding
//! offspring tours from a selection pool.
pub mod ordered;

use std::fmt::Debug;

use crate::{
    error::Result, evolution::options::EvolutionOptions, geometry::City, individual::Individual,
    rng::RandomNumberGenerator,
};

/// # BreedStrategy
///
/// Produces the offspring of one generation. Elites are carried over by the
/// launcher; a strategy only supplies the `num_offspring` remaining members.
pub trait BreedStrategy
where
    Self: Debug + Clone + Send + Sync,
{
    /// Breeds `num_offspring` new individuals from `pool`.
    ///
    /// ## Parameters
    ///
    /// - `pool`: The selection pool, elites first.
    /// - `num_offspring`: How many children to return.
    /// - `cities`: The full city set, for generating fresh random partners.
    /// - `evol_options`: The run's options (mutation rate, parallel threshold).
    /// - `rng`: The run's random number generator.
    ///
    /// ## Errors
    ///
    /// This method fails if `pool` is empty while offspring are requested.
    fn breed(
        &self,
        pool: &[Individual],
        num_offspring: usize,
        cities: &[City],
        evol_options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Individual>>;
}

pub use ordered::OrderedCrossoverStrategy;
