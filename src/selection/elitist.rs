use std::cmp::Ordering;

use crate::error::{GeneticError, Result};
use crate::individual::Individual;
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::SelectionStrategy;

/// A selection strategy that selects the best individuals based on raw fitness.
///
/// Individuals are ordered by fitness, descending. The sort is stable, so ties
/// keep their original population order; NaN fitness sorts last. At most
/// `population.len()` individuals are returned and none is returned twice.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct ElitistSelection;

impl ElitistSelection {
    pub fn new() -> Self {
        Self
    }

    /// Population indices ordered from fittest to least fit.
    pub(crate) fn ranked_indices(population: &[Individual]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..population.len()).collect();
        indices.sort_by(|&a, &b| {
            descending(population[a].fitness(), population[b].fitness())
        });
        indices
    }
}

/// Orders `a` before `b` when `a` is larger, with NaN last.
pub(crate) fn descending(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or_else(|| {
        if a.is_nan() && b.is_nan() {
            Ordering::Equal
        } else if a.is_nan() {
            Ordering::Greater
        } else {
            Ordering::Less
        }
    })
}

impl SelectionStrategy for ElitistSelection {
    fn select(
        &self,
        population: &[Individual],
        num_to_select: usize,
        _rng: Option<&mut RandomNumberGenerator>,
    ) -> Result<Vec<Individual>> {
        if population.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        Ok(Self::ranked_indices(population)
            .into_iter()
            .take(num_to_select)
            .map(|idx| population[idx].clone())
            .collect())
    }
}
