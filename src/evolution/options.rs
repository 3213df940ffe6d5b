//! # EvolutionOptions
//!
//! The `EvolutionOptions` struct holds the hyperparameters of a run: the
//! generation count, population and elite sizes, mutation rate, logging
//! level, parallel threshold and fitness normalization.
//!
//! ## Example
//!
//! ```rust
//! use genalg_tsp::evolution::options::{EvolutionOptions, LogLevel};
//!
//! // Create a new EvolutionOptions instance with custom parameters
//! let custom_options = EvolutionOptions::new(200, LogLevel::Minimal, 50, 10, 0.02);
//! assert!(custom_options.validate().is_ok());
//!
//! // Create a new EvolutionOptions instance with default parameters
//! let default_options = EvolutionOptions::default();
//! assert_eq!(default_options.get_population_size(), 100);
//! ```
//!
//! ### `LogLevel`
//!
//! Controls the per-generation `tracing` events a run emits.
//!
//! - `Verbose`: One `info` event per generation plus a `debug` event per individual.
//! - `Minimal`: One `info` event per generation.
//! - `None`: No per-generation events.

use crate::error::{GeneticError, Result};
use crate::fitness::FitnessNormalization;

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogLevel {
    Verbose,
    Minimal,
    None,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionOptions {
    num_generations: usize,
    log_level: LogLevel,
    population_size: usize,
    elitism_size: usize,
    mutation_rate: f64,
    /// Minimum number of items to process in parallel
    parallel_threshold: usize,
    normalization: FitnessNormalization,
}

const DEFAULT_GENERATIONS: usize = 500;
const DEFAULT_POPULATION_SIZE: usize = 100;
const DEFAULT_ELITISM_SIZE: usize = 20;
const DEFAULT_MUTATION_RATE: f64 = 0.01;
const DEFAULT_PARALLEL_THRESHOLD: usize = 1000;

impl EvolutionOptions {
    pub fn new(
        num_generations: usize,
        log_level: LogLevel,
        population_size: usize,
        elitism_size: usize,
        mutation_rate: f64,
    ) -> Self {
        Self {
            num_generations,
            log_level,
            population_size,
            elitism_size,
            mutation_rate,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            normalization: FitnessNormalization::default(),
        }
    }

    pub fn get_num_generations(&self) -> usize {
        self.num_generations
    }

    pub fn get_log_level(&self) -> &LogLevel {
        &self.log_level
    }

    pub fn get_population_size(&self) -> usize {
        self.population_size
    }

    pub fn get_elitism_size(&self) -> usize {
        self.elitism_size
    }

    pub fn get_mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    /// Returns the minimum number of items to process in parallel.
    pub fn get_parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    pub fn get_normalization(&self) -> FitnessNormalization {
        self.normalization
    }

    /// Number of children bred per generation, after the elites.
    pub fn get_num_offspring(&self) -> usize {
        self.population_size.saturating_sub(self.elitism_size)
    }

    /// Sets the number of generations.
    pub fn set_num_generations(&mut self, num_generations: usize) {
        self.num_generations = num_generations;
    }

    /// Sets the log level.
    pub fn set_log_level(&mut self, log_level: LogLevel) {
        self.log_level = log_level;
    }

    /// Sets the population size.
    pub fn set_population_size(&mut self, population_size: usize) {
        self.population_size = population_size;
    }

    /// Sets the number of elites carried into every generation.
    pub fn set_elitism_size(&mut self, elitism_size: usize) {
        self.elitism_size = elitism_size;
    }

    /// Sets the per-position swap probability.
    pub fn set_mutation_rate(&mut self, mutation_rate: f64) {
        self.mutation_rate = mutation_rate;
    }

    /// Sets the parallel threshold.
    pub fn set_parallel_threshold(&mut self, threshold: usize) {
        self.parallel_threshold = threshold;
    }

    pub fn set_normalization(&mut self, normalization: FitnessNormalization) {
        self.normalization = normalization;
    }

    /// Checks the hyperparameters.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if the generation count or
    /// population size is zero, the elite count exceeds the population size,
    /// or the mutation rate lies outside `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        if self.num_generations == 0 {
            return Err(GeneticError::Configuration(
                "Number of generations cannot be zero".to_string(),
            ));
        }

        if self.population_size == 0 {
            return Err(GeneticError::Configuration(
                "Population size cannot be zero".to_string(),
            ));
        }

        if self.elitism_size > self.population_size {
            return Err(GeneticError::Configuration(format!(
                "Elitism size ({}) cannot exceed population size ({})",
                self.elitism_size, self.population_size
            )));
        }

        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(GeneticError::Configuration(format!(
                "Mutation rate must be within [0, 1], got {}",
                self.mutation_rate
            )));
        }

        Ok(())
    }

    /// Returns a builder for creating an `EvolutionOptions` instance.
    ///
    /// # Example
    ///
    /// ```rust
    /// use genalg_tsp::evolution::options::{EvolutionOptions, LogLevel};
    ///
    /// let options = EvolutionOptions::builder()
    ///     .num_generations(200)
    ///     .log_level(LogLevel::Minimal)
    ///     .population_size(50)
    ///     .elitism_size(5)
    ///     .mutation_rate(0.02)
    ///     .parallel_threshold(500)
    ///     .build();
    ///
    /// assert_eq!(options.get_num_offspring(), 45);
    /// ```
    pub fn builder() -> EvolutionOptionsBuilder {
        EvolutionOptionsBuilder::default()
    }
}

impl Default for EvolutionOptions {
    fn default() -> Self {
        Self {
            num_generations: DEFAULT_GENERATIONS,
            log_level: LogLevel::None,
            population_size: DEFAULT_POPULATION_SIZE,
            elitism_size: DEFAULT_ELITISM_SIZE,
            mutation_rate: DEFAULT_MUTATION_RATE,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            normalization: FitnessNormalization::default(),
        }
    }
}

/// Builder for `EvolutionOptions`.
///
/// Provides a fluent interface for constructing `EvolutionOptions` instances.
/// Unset values fall back to [`EvolutionOptions::default`].
#[derive(Debug, Clone, Default)]
pub struct EvolutionOptionsBuilder {
    num_generations: Option<usize>,
    log_level: Option<LogLevel>,
    population_size: Option<usize>,
    elitism_size: Option<usize>,
    mutation_rate: Option<f64>,
    parallel_threshold: Option<usize>,
    normalization: Option<FitnessNormalization>,
}

impl EvolutionOptionsBuilder {
    /// Sets the number of generations.
    pub fn num_generations(mut self, value: usize) -> Self {
        self.num_generations = Some(value);
        self
    }

    /// Sets the log level.
    pub fn log_level(mut self, value: LogLevel) -> Self {
        self.log_level = Some(value);
        self
    }

    /// Sets the population size.
    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    /// Sets the number of elites.
    pub fn elitism_size(mut self, value: usize) -> Self {
        self.elitism_size = Some(value);
        self
    }

    /// Sets the mutation rate.
    pub fn mutation_rate(mut self, value: f64) -> Self {
        self.mutation_rate = Some(value);
        self
    }

    /// Sets the parallel threshold.
    pub fn parallel_threshold(mut self, value: usize) -> Self {
        self.parallel_threshold = Some(value);
        self
    }

    pub fn normalization(mut self, value: FitnessNormalization) -> Self {
        self.normalization = Some(value);
        self
    }

    /// Builds the `EvolutionOptions` instance.
    pub fn build(self) -> EvolutionOptions {
        let default = EvolutionOptions::default();
        EvolutionOptions {
            num_generations: self.num_generations.unwrap_or(default.num_generations),
            log_level: self.log_level.unwrap_or(default.log_level),
            population_size: self.population_size.unwrap_or(default.population_size),
            elitism_size: self.elitism_size.unwrap_or(default.elitism_size),
            mutation_rate: self.mutation_rate.unwrap_or(default.mutation_rate),
            parallel_threshold: self.parallel_threshold.unwrap_or(default.parallel_threshold),
            normalization: self.normalization.unwrap_or(default.normalization),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(EvolutionOptions::default().validate().is_ok());
    }

    #[test]
    fn test_builder_overrides_defaults() {
        let options = EvolutionOptions::builder()
            .num_generations(10)
            .population_size(30)
            .elitism_size(3)
            .mutation_rate(0.5)
            .normalization(FitnessNormalization::Sum)
            .build();

        assert_eq!(options.get_num_generations(), 10);
        assert_eq!(options.get_population_size(), 30);
        assert_eq!(options.get_elitism_size(), 3);
        assert_eq!(options.get_mutation_rate(), 0.5);
        assert_eq!(options.get_normalization(), FitnessNormalization::Sum);
        assert_eq!(options.get_log_level(), &LogLevel::None);
        assert_eq!(options.get_parallel_threshold(), DEFAULT_PARALLEL_THRESHOLD);
        assert_eq!(options.get_num_offspring(), 27);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let cases = [
            EvolutionOptions::new(0, LogLevel::None, 10, 2, 0.1),
            EvolutionOptions::new(10, LogLevel::None, 0, 0, 0.1),
            EvolutionOptions::new(10, LogLevel::None, 10, 11, 0.1),
            EvolutionOptions::new(10, LogLevel::None, 10, 2, -0.1),
            EvolutionOptions::new(10, LogLevel::None, 10, 2, 1.5),
            EvolutionOptions::new(10, LogLevel::None, 10, 2, f64::NAN),
        ];

        for options in cases {
            assert!(
                matches!(options.validate(), Err(GeneticError::Configuration(_))),
                "{:?} should be rejected",
                options
            );
        }
    }

    #[test]
    fn test_validate_accepts_edges() {
        assert!(EvolutionOptions::new(1, LogLevel::None, 1, 0, 0.0).validate().is_ok());
        assert!(EvolutionOptions::new(1, LogLevel::None, 5, 5, 1.0).validate().is_ok());
    }

    #[test]
    fn test_setters() {
        let mut options = EvolutionOptions::default();
        options.set_num_generations(3);
        options.set_population_size(4);
        options.set_elitism_size(1);
        options.set_mutation_rate(0.2);
        options.set_log_level(LogLevel::Verbose);
        options.set_parallel_threshold(2);
        options.set_normalization(FitnessNormalization::Sum);

        assert_eq!(
            options,
            EvolutionOptions::builder()
                .num_generations(3)
                .population_size(4)
                .elitism_size(1)
                .mutation_rate(0.2)
                .log_level(LogLevel::Verbose)
                .parallel_threshold(2)
                .normalization(FitnessNormalization::Sum)
                .build()
        );
    }
}
