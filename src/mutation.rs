//! # Mutation
//!
//! Per-position swap mutation. Every position independently triggers, with
//! probability `mutation_rate`, a swap with another uniformly drawn position
//! (possibly itself). Later swaps may undo earlier ones within the same pass.

use crate::{individual::Individual, rng::RandomNumberGenerator};

/// Returns a mutated copy of `individual`, rescored from its new route.
///
/// A rate of `0.0` never swaps and returns an identical individual.
pub fn mutate(
    individual: &Individual,
    mutation_rate: f64,
    rng: &mut RandomNumberGenerator,
) -> Individual {
    let mut route = individual.route().to_vec();
    let len = route.len();
    let mut swapped = false;

    for i in 0..len {
        if rng.gen_bool_with(mutation_rate) {
            let j = rng.gen_index(len);
            route.swap(i, j);
            swapped = true;
        }
    }

    if swapped {
        Individual::new(route)
    } else {
        individual.clone()
    }
}
