//! # Fitness Model
//!
//! Raw fitness is a steep inverse power of the tour length,
//! `1 / (1 + distance^8)`, so short tours dominate selection even while the
//! population is still mostly random.
//!
//! Normalized fitness rescales raw fitness relative to one population
//! snapshot and feeds the roulette threshold. It is only meaningful for the
//! population it was computed against and is recomputed every generation.

use crate::individual::Individual;

const FITNESS_EXPONENT: i32 = 8;

/// How raw fitness is rescaled across a population before roulette selection.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FitnessNormalization {
    /// Divide by the population's maximum fitness. The fittest individual
    /// (and anything tied with it) normalizes to exactly `1.0`.
    #[default]
    Max,
    /// Divide by the sum of the population's fitness, giving selection
    /// probabilities that add up to `1.0`.
    Sum,
}

/// Converts a tour length into a fitness score in `(0, 1]`.
///
/// Tours long enough for `distance^8` to overflow (around `1e38`) would score
/// `0.0`; those are floored at `f64::MIN_POSITIVE` so fitness stays positive.
///
/// ```rust
/// use genalg_tsp::fitness::fitness;
///
/// assert_eq!(fitness(0.0), 1.0);
/// assert!(fitness(2.0) < fitness(1.0));
/// ```
pub fn fitness(total_distance: f64) -> f64 {
    (1.0 / (1.0 + total_distance.powi(FITNESS_EXPONENT))).max(f64::MIN_POSITIVE)
}

/// Normalizes `individual`'s raw fitness against the maximum raw fitness in
/// `population`.
pub fn normalize_fitness(individual: &Individual, population: &[Individual]) -> f64 {
    let max = population
        .iter()
        .map(Individual::fitness)
        .fold(f64::NEG_INFINITY, f64::max);
    scale(individual.fitness(), max)
}

/// Recomputes `normalized_fitness` for every individual against this
/// population.
///
/// If the divisor is zero or not finite each individual receives `1.0`, which
/// makes selection uniform.
pub fn normalize_population(
    population: Vec<Individual>,
    normalization: FitnessNormalization,
) -> Vec<Individual> {
    let divisor = match normalization {
        FitnessNormalization::Max => population
            .iter()
            .map(Individual::fitness)
            .fold(f64::NEG_INFINITY, f64::max),
        FitnessNormalization::Sum => population.iter().map(Individual::fitness).sum(),
    };

    population
        .into_iter()
        .map(|individual| {
            let normalized = scale(individual.fitness(), divisor);
            individual.with_normalized_fitness(normalized)
        })
        .collect()
}

fn scale(value: f64, divisor: f64) -> f64 {
    if divisor > 0.0 && divisor.is_finite() {
        value / divisor
    } else {
        1.0
    }
}
