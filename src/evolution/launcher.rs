use std::collections::HashSet;

use tracing::instrument;

use super::{
    history::{GenerationReport, RunHistory},
    options::{EvolutionOptions, LogLevel},
};
use crate::{
    error::{GeneticError, OptionExt, Result},
    fitness::normalize_population,
    geometry::City,
    individual::Individual,
    population::initial_population,
    rng::RandomNumberGenerator,
    selection::select_pool,
    strategy::{BreedStrategy, OrderedCrossoverStrategy},
};

/// The outcome of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionResult {
    /// The last generation, normalized against itself.
    pub final_population: Vec<Individual>,
    /// The fittest individual seen in any generation.
    pub global_best: Individual,
    /// One entry per generation in each series.
    pub history: RunHistory,
}

/// Loop state threaded through the run by value.
struct EvolutionState {
    generation: usize,
    population: Vec<Individual>,
    global_best: Individual,
    history: RunHistory,
}

impl EvolutionState {
    /// The global best starts as the first individual of generation zero.
    fn new(population: Vec<Individual>, generations: usize) -> Result<Self> {
        let global_best = population
            .first()
            .cloned()
            .ok_or_else_genetic(|| GeneticError::EmptyPopulation)?;

        Ok(Self {
            generation: 0,
            population,
            global_best,
            history: RunHistory::with_capacity(generations),
        })
    }

    /// Normalizes the current population, folds its best individual into the
    /// global best and appends one history entry.
    fn record(self, options: &EvolutionOptions) -> Result<Self> {
        let generation = self.generation + 1;
        let population = normalize_population(self.population, options.get_normalization());

        let generation_best = population
            .iter()
            .reduce(|best, candidate| {
                if candidate.fitness() > best.fitness() {
                    candidate
                } else {
                    best
                }
            })
            .cloned()
            .ok_or_else_genetic(|| {
                GeneticError::Evolution(format!("Generation {} is empty", generation))
            })?;

        let global_best = if generation_best.fitness() > self.global_best.fitness() {
            generation_best.clone()
        } else {
            self.global_best
        };

        let mut history = self.history;
        history.record(
            global_best.total_distance(),
            generation_best.total_distance(),
            generation_best.fitness(),
        );

        match options.get_log_level() {
            LogLevel::Minimal => log_generation(generation, &global_best),
            LogLevel::Verbose => {
                log_generation(generation, &global_best);
                population.iter().for_each(|individual| {
                    tracing::debug!(
                        generation,
                        route = ?individual.city_names(),
                        distance = individual.total_distance(),
                        fitness = individual.fitness(),
                        normalized_fitness = individual.normalized_fitness(),
                        "individual"
                    );
                });
            }
            LogLevel::None => {}
        }

        Ok(Self {
            generation,
            population,
            global_best,
            history,
        })
    }

    fn report(&self) -> GenerationReport {
        GenerationReport {
            generation: self.generation,
            best_distance: self.global_best.total_distance(),
            best_fitness: self.global_best.fitness(),
        }
    }
}

fn log_generation(generation: usize, global_best: &Individual) {
    tracing::info!(
        generation,
        best_distance = global_best.total_distance(),
        best_fitness = global_best.fitness(),
        "generation complete"
    );
}

/// Runs the genetic algorithm over a city set.
///
/// Each generation is normalized, recorded, and, unless the generation count
/// is spent, replaced by `elitism_size` unchanged elites plus offspring bred
/// by the strategy from a two-tier selection pool.
///
/// # Example
///
/// ```rust
/// use genalg_tsp::evolution::{EvolutionLauncher, EvolutionOptions};
/// use genalg_tsp::geometry::City;
/// use genalg_tsp::rng::RandomNumberGenerator;
/// use genalg_tsp::strategy::OrderedCrossoverStrategy;
///
/// let cities = vec![
///     City::new("a", 0.0, 0.0),
///     City::new("b", 0.0, 10.0),
///     City::new("c", 10.0, 10.0),
///     City::new("d", 10.0, 0.0),
/// ];
/// let options = EvolutionOptions::builder()
///     .num_generations(20)
///     .population_size(20)
///     .elitism_size(4)
///     .build();
///
/// let launcher = EvolutionLauncher::new(OrderedCrossoverStrategy::new(), options);
/// let result = launcher
///     .evolve(&cities, &mut RandomNumberGenerator::from_seed(1))
///     .unwrap();
///
/// assert_eq!(result.history.len(), 20);
/// assert!(result.global_best.is_valid_tour(&cities));
/// ```
#[derive(Debug, Clone)]
pub struct EvolutionLauncher<Strategy = OrderedCrossoverStrategy>
where
    Strategy: BreedStrategy,
{
    strategy: Strategy,
    options: EvolutionOptions,
}

impl<Strategy> EvolutionLauncher<Strategy>
where
    Strategy: BreedStrategy,
{
    pub fn new(strategy: Strategy, options: EvolutionOptions) -> Self {
        Self { strategy, options }
    }

    pub fn options(&self) -> &EvolutionOptions {
        &self.options
    }

    /// Evolves a random initial population over `cities`.
    ///
    /// # Errors
    ///
    /// This method will return an error if:
    /// - The options fail [`EvolutionOptions::validate`]
    /// - `cities` is empty, repeats a name or holds a non-finite coordinate
    pub fn evolve(
        &self,
        cities: &[City],
        rng: &mut RandomNumberGenerator,
    ) -> Result<EvolutionResult> {
        self.evolve_with_progress(cities, rng, |_| {})
    }

    /// Like [`evolve`](Self::evolve), calling `progress` after every generation.
    pub fn evolve_with_progress<F>(
        &self,
        cities: &[City],
        rng: &mut RandomNumberGenerator,
        progress: F,
    ) -> Result<EvolutionResult>
    where
        F: FnMut(&GenerationReport),
    {
        self.options.validate()?;
        validate_cities(cities)?;

        let population = initial_population(
            self.options.get_population_size(),
            cities,
            rng,
            self.options.get_parallel_threshold(),
        );
        self.run(population, cities, rng, progress)
    }

    /// Evolves a caller-supplied generation zero.
    ///
    /// # Errors
    ///
    /// In addition to the checks of [`evolve`](Self::evolve), the population
    /// must hold exactly `population_size` valid tours over `cities`.
    pub fn evolve_from<F>(
        &self,
        population: Vec<Individual>,
        cities: &[City],
        rng: &mut RandomNumberGenerator,
        progress: F,
    ) -> Result<EvolutionResult>
    where
        F: FnMut(&GenerationReport),
    {
        self.options.validate()?;
        validate_cities(cities)?;

        if population.len() != self.options.get_population_size() {
            return Err(GeneticError::Configuration(format!(
                "Initial population has {} individuals, expected {}",
                population.len(),
                self.options.get_population_size()
            )));
        }

        if let Some(idx) = population.iter().position(|i| !i.is_valid_tour(cities)) {
            return Err(GeneticError::Configuration(format!(
                "Individual {} of the initial population is not a tour over the given cities",
                idx
            )));
        }

        self.run(population, cities, rng, progress)
    }

    #[instrument(level = "debug", skip_all, fields(cities = cities.len()))]
    fn run<F>(
        &self,
        population: Vec<Individual>,
        cities: &[City],
        rng: &mut RandomNumberGenerator,
        mut progress: F,
    ) -> Result<EvolutionResult>
    where
        F: FnMut(&GenerationReport),
    {
        let generations = self.options.get_num_generations();
        tracing::info!(
            cities = cities.len(),
            generations,
            population_size = self.options.get_population_size(),
            "evolution started"
        );

        let mut state = EvolutionState::new(population, generations)?;
        loop {
            state = state.record(&self.options)?;
            progress(&state.report());

            if state.generation >= generations {
                break;
            }

            let next = self.next_generation(&state.population, cities, rng)?;
            state.population = next;
        }

        tracing::info!(
            generations = state.generation,
            best_distance = state.global_best.total_distance(),
            best_fitness = state.global_best.fitness(),
            "evolution finished"
        );

        Ok(EvolutionResult {
            final_population: state.population,
            global_best: state.global_best,
            history: state.history,
        })
    }

    /// Elites carried over unchanged, then bred offspring.
    fn next_generation(
        &self,
        population: &[Individual],
        cities: &[City],
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Individual>> {
        let elitism_size = self.options.get_elitism_size();
        let population_size = self.options.get_population_size();

        let pool = select_pool(population, elitism_size, population_size, rng)?;
        let offspring = self.strategy.breed(
            &pool,
            self.options.get_num_offspring(),
            cities,
            &self.options,
            rng,
        )?;

        let mut next: Vec<Individual> = pool.into_iter().take(elitism_size).collect();
        next.extend(offspring);

        if next.len() != population_size {
            return Err(GeneticError::Evolution(format!(
                "Next generation has {} individuals, expected {}",
                next.len(),
                population_size
            )));
        }

        Ok(next)
    }
}

/// Rejects empty city sets, repeated names and non-finite coordinates.
pub fn validate_cities(cities: &[City]) -> Result<()> {
    if cities.is_empty() {
        return Err(GeneticError::Configuration(
            "City list cannot be empty".to_string(),
        ));
    }

    let mut names = HashSet::with_capacity(cities.len());
    for city in cities {
        if !names.insert(city.name()) {
            return Err(GeneticError::Configuration(format!(
                "Duplicate city name: {}",
                city.name()
            )));
        }

        if !city.x().is_finite() || !city.y().is_finite() {
            return Err(GeneticError::InvalidNumericValue(format!(
                "City {} has a non-finite coordinate",
                city
            )));
        }
    }

    Ok(())
}
