//! # Population Factory
//!
//! Builds generation zero: independent, uniformly random permutations of the
//! city set, each wrapped as a scored [`Individual`].

use rayon::prelude::*;

use crate::{geometry::City, individual::Individual, rng::RandomNumberGenerator};

/// A uniformly random permutation of `cities`.
pub fn random_route(cities: &[City], rng: &mut RandomNumberGenerator) -> Vec<City> {
    let mut route = cities.to_vec();
    rng.shuffle(&mut route);
    route
}

/// Scores a route. Equivalent to [`Individual::new`].
pub fn build_individual(route: Vec<City>) -> Individual {
    Individual::new(route)
}

/// Creates `size` random individuals.
///
/// Routes are drawn from `rng` in order; scoring runs on the rayon pool once
/// `size` reaches `parallel_threshold`.
pub fn initial_population(
    size: usize,
    cities: &[City],
    rng: &mut RandomNumberGenerator,
    parallel_threshold: usize,
) -> Vec<Individual> {
    let routes: Vec<Vec<City>> = (0..size).map(|_| random_route(cities, rng)).collect();

    if size >= parallel_threshold {
        routes.into_par_iter().map(build_individual).collect()
    } else {
        routes.into_iter().map(build_individual).collect()
    }
}
