//! # Breeding pool
//!
//! Two-tier selection: the `elitism_size` fittest individuals are taken
//! unconditionally, then roulette draws fill the pool up to `pool_size`.

use crate::error::{GeneticError, Result};
use crate::individual::Individual;
use crate::rng::RandomNumberGenerator;
use crate::selection::{ElitistSelection, RouletteWheelSelection, SelectionStrategy};

/// Builds a breeding pool of exactly `pool_size` individuals, elites first.
///
/// `population` must already be normalized against itself.
///
/// # Errors
///
/// Returns an error if the population is empty or `elitism_size` exceeds
/// either the population or the pool size.
pub fn select_pool(
    population: &[Individual],
    elitism_size: usize,
    pool_size: usize,
    rng: &mut RandomNumberGenerator,
) -> Result<Vec<Individual>> {
    if elitism_size > pool_size || elitism_size > population.len() {
        return Err(GeneticError::Configuration(format!(
            "Elitism size ({}) exceeds pool size ({}) or population size ({})",
            elitism_size,
            pool_size,
            population.len()
        )));
    }

    let mut pool = ElitistSelection::new().select(population, elitism_size, None)?;
    pool.extend(RouletteWheelSelection::new().select(
        population,
        pool_size - elitism_size,
        Some(rng),
    )?);

    Ok(pool)
}
