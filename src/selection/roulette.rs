use crate::error::{GeneticError, Result};
use crate::individual::Individual;
use crate::rng::RandomNumberGenerator;
use crate::selection::elitist::descending;
use crate::selection::selection_strategy::SelectionStrategy;

/// A threshold-based roulette wheel (fitness proportionate) selection.
///
/// Each draw samples a threshold `r` uniformly from `[0, 1)` and picks
/// uniformly among the individuals whose normalized fitness exceeds `r`, so
/// an individual survives a draw with probability equal to its normalized
/// fitness. Draws are independent and may repeat an individual.
///
/// When no individual clears the threshold the draw falls back to a uniform
/// pick from the whole population.
///
/// # Examples
///
/// ```
/// use genalg_tsp::error::Result;
/// use genalg_tsp::fitness::{normalize_population, FitnessNormalization};
/// use genalg_tsp::geometry::City;
/// use genalg_tsp::population::initial_population;
/// use genalg_tsp::rng::RandomNumberGenerator;
/// use genalg_tsp::selection::{RouletteWheelSelection, SelectionStrategy};
///
/// fn main() -> Result<()> {
///     let cities = vec![
///         City::new("a", 0.0, 0.0),
///         City::new("b", 0.0, 1.0),
///         City::new("c", 1.0, 1.0),
///     ];
///     let mut rng = RandomNumberGenerator::from_seed(42);
///     let population = normalize_population(
///         initial_population(4, &cities, &mut rng, 1000),
///         FitnessNormalization::Max,
///     );
///
///     let selected = RouletteWheelSelection::new().select(&population, 10, Some(&mut rng))?;
///     assert_eq!(selected.len(), 10);
///
///     Ok(())
/// }
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct RouletteWheelSelection;

impl RouletteWheelSelection {
    pub fn new() -> Self {
        Self
    }

    /// Draws one population index.
    ///
    /// `ranked` holds population indices sorted by normalized fitness,
    /// descending, so the survivors of a threshold are always a prefix.
    fn select_individual(
        &self,
        population: &[Individual],
        ranked: &[usize],
        rng: &mut RandomNumberGenerator,
    ) -> usize {
        let threshold = rng.gen_unit();
        let survivors =
            ranked.partition_point(|&idx| population[idx].normalized_fitness() > threshold);

        if survivors == 0 {
            tracing::trace!(threshold, "no individual cleared the roulette threshold");
            return rng.gen_index(population.len());
        }

        ranked[rng.gen_index(survivors)]
    }
}

impl SelectionStrategy for RouletteWheelSelection {
    fn select(
        &self,
        population: &[Individual],
        num_to_select: usize,
        rng: Option<&mut RandomNumberGenerator>,
    ) -> Result<Vec<Individual>> {
        if population.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        let rng = match rng {
            Some(rng) => rng,
            None => {
                return Err(GeneticError::Configuration(
                    "Roulette wheel selection requires a random number generator".to_string(),
                ))
            }
        };

        let mut ranked: Vec<usize> = (0..population.len()).collect();
        ranked.sort_by(|&a, &b| {
            descending(
                population[a].normalized_fitness(),
                population[b].normalized_fitness(),
            )
        });

        Ok((0..num_to_select)
            .map(|_| population[self.select_individual(population, &ranked, rng)].clone())
            .collect())
    }
}
