//! # Crossover
//!
//! Ordered crossover for permutations. A child keeps a prefix of its first
//! parent verbatim and takes every remaining city in the order it appears in
//! the second parent, so each city appears exactly once.
//!
//! ```rust
//! use genalg_tsp::crossover::crossover;
//! use genalg_tsp::geometry::City;
//! use genalg_tsp::individual::Individual;
//! use genalg_tsp::rng::RandomNumberGenerator;
//!
//! let cities: Vec<City> = (0..5).map(|i| City::new(i.to_string(), i as f64, 0.0)).collect();
//! let mut reversed = cities.clone();
//! reversed.reverse();
//!
//! let mut rng = RandomNumberGenerator::from_seed(4);
//! let child = crossover(
//!     &Individual::new(cities.clone()),
//!     &Individual::new(reversed),
//!     &mut rng,
//! );
//! assert!(child.is_valid_tour(&cities));
//! ```

use std::collections::HashSet;

use crate::{
    geometry::City, individual::Individual, population::random_route, rng::RandomNumberGenerator,
};

/// Splits the pool into consecutive pairs `(pool[0], pool[1])`,
/// `(pool[2], pool[3])`, ...
///
/// An unpaired last member is matched with a freshly generated random
/// individual over `cities`.
pub fn select_parents(
    pool: &[Individual],
    cities: &[City],
    rng: &mut RandomNumberGenerator,
) -> Vec<(Individual, Individual)> {
    let mut pairs: Vec<(Individual, Individual)> = pool
        .chunks_exact(2)
        .map(|pair| (pair[0].clone(), pair[1].clone()))
        .collect();

    if let [odd] = pool.chunks_exact(2).remainder() {
        let stranger = Individual::new(random_route(cities, rng));
        pairs.push((odd.clone(), stranger));
    }

    pairs
}

/// Breeds one child with a random cut point in `[0, route length)`.
pub fn crossover(
    parent1: &Individual,
    parent2: &Individual,
    rng: &mut RandomNumberGenerator,
) -> Individual {
    let len = parent1.route().len();
    let cut = if len == 0 { 0 } else { rng.gen_index(len) };
    crossover_at(parent1, parent2, cut)
}

/// Ordered crossover with an explicit cut point.
///
/// The child is the first `cut` cities of `parent1` followed by `parent2`'s
/// cities minus those, in `parent2`'s order.
pub fn crossover_at(parent1: &Individual, parent2: &Individual, cut: usize) -> Individual {
    let head = &parent1.route()[..cut.min(parent1.route().len())];
    let taken: HashSet<&str> = head.iter().map(City::name).collect();

    let mut child = Vec::with_capacity(parent2.route().len());
    child.extend_from_slice(head);
    child.extend(
        parent2
            .route()
            .iter()
            .filter(|city| !taken.contains(city.name()))
            .cloned(),
    );

    Individual::new(child)
}
