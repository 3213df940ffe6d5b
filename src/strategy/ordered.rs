//! # OrderedCrossoverStrategy
//!
//! Pairs the pool consecutively, breeds children with ordered crossover and
//! mutates every child.
use rayon::prelude::*;

use super::BreedStrategy;
use crate::{
    crossover::{crossover, select_parents},
    error::{GeneticError, Result},
    evolution::options::EvolutionOptions,
    geometry::City,
    individual::Individual,
    mutation::mutate,
    rng::RandomNumberGenerator,
};

/// # OrderedCrossoverStrategy
///
/// Children are spread evenly over every pair of [`select_parents`], so the
/// whole pool parents the next generation. Child `i` comes from pair
/// `i * pairs / num_offspring`; even children are `crossover(a, b)` and odd
/// children `crossover(b, a)`. Each child is then mutated with the configured
/// rate.
#[derive(Debug, Clone, Default)]
pub struct OrderedCrossoverStrategy {
    // No fields needed
}

impl OrderedCrossoverStrategy {
    /// Creates a new `OrderedCrossoverStrategy` instance.
    pub fn new() -> Self {
        Self {}
    }

    /// Pair that parents child `index` out of `num_offspring`.
    fn pair_index(index: usize, num_offspring: usize, num_pairs: usize) -> usize {
        index * num_pairs / num_offspring
    }

    fn breed_child(
        pairs: &[(Individual, Individual)],
        index: usize,
        num_offspring: usize,
        mutation_rate: f64,
        mut rng: RandomNumberGenerator,
    ) -> Individual {
        let (a, b) = &pairs[Self::pair_index(index, num_offspring, pairs.len())];
        let child = if index % 2 == 0 {
            crossover(a, b, &mut rng)
        } else {
            crossover(b, a, &mut rng)
        };
        mutate(&child, mutation_rate, &mut rng)
    }
}

impl BreedStrategy for OrderedCrossoverStrategy {
    /// ## Performance
    ///
    /// Children are bred on the rayon pool once `num_offspring` reaches the
    /// parallel threshold. Each child draws from its own generator forked from
    /// `rng` in child order, so both paths give the same offspring.
    fn breed(
        &self,
        pool: &[Individual],
        num_offspring: usize,
        cities: &[City],
        evol_options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Individual>> {
        if num_offspring == 0 {
            return Ok(Vec::new());
        }

        if pool.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        let pairs = select_parents(pool, cities, rng);
        let child_rngs: Vec<RandomNumberGenerator> =
            (0..num_offspring).map(|_| rng.fork()).collect();
        let mutation_rate = evol_options.get_mutation_rate();

        let children: Vec<Individual> = if num_offspring >= evol_options.get_parallel_threshold() {
            child_rngs
                .into_par_iter()
                .enumerate()
                .map(|(index, child_rng)| {
                    Self::breed_child(&pairs, index, num_offspring, mutation_rate, child_rng)
                })
                .collect()
        } else {
            child_rngs
                .into_iter()
                .enumerate()
                .map(|(index, child_rng)| {
                    Self::breed_child(&pairs, index, num_offspring, mutation_rate, child_rng)
                })
                .collect()
        };

        Ok(children)
    }
}
