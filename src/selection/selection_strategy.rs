use std::fmt::Debug;

use crate::error::Result;
use crate::individual::Individual;
use crate::rng::RandomNumberGenerator;

/// Trait for selection strategies.
///
/// Selection strategies choose individuals from a population that has already
/// been normalized against itself (see
/// [`normalize_population`](crate::fitness::normalize_population)). Higher
/// fitness is always better.
///
/// # Examples
///
/// ```
/// use genalg_tsp::error::Result;
/// use genalg_tsp::fitness::{normalize_population, FitnessNormalization};
/// use genalg_tsp::geometry::City;
/// use genalg_tsp::population::initial_population;
/// use genalg_tsp::rng::RandomNumberGenerator;
/// use genalg_tsp::selection::{ElitistSelection, SelectionStrategy};
///
/// fn main() -> Result<()> {
///     let cities = vec![
///         City::new("a", 0.0, 0.0),
///         City::new("b", 0.0, 1.0),
///         City::new("c", 1.0, 1.0),
///         City::new("d", 1.0, 0.0),
///     ];
///     let mut rng = RandomNumberGenerator::from_seed(1);
///     let population = normalize_population(
///         initial_population(6, &cities, &mut rng, 1000),
///         FitnessNormalization::Max,
///     );
///
///     let selected = ElitistSelection::new().select(&population, 2, None)?;
///     assert_eq!(selected.len(), 2);
///     assert!(selected[0].fitness() >= selected[1].fitness());
///
///     Ok(())
/// }
/// ```
pub trait SelectionStrategy: Debug + Send + Sync {
    /// Selects individuals from the population.
    ///
    /// # Arguments
    ///
    /// * `population` - The current, normalized population.
    /// * `num_to_select` - The number of individuals to select.
    /// * `rng` - A random number generator for strategies that use randomness.
    ///           If a strategy requires randomness but `rng` is `None`, an error is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The population is empty
    /// - The selection process requires randomness but `rng` is `None`
    fn select(
        &self,
        population: &[Individual],
        num_to_select: usize,
        rng: Option<&mut RandomNumberGenerator>,
    ) -> Result<Vec<Individual>>;
}
