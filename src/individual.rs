//! # Individual
//!
//! A scored tour. `total_distance` and `fitness` are caches of pure functions
//! of the route, so the only way to obtain an `Individual` with a given route
//! is [`Individual::new`], which computes both. Operators that change a route
//! build a fresh `Individual` rather than editing one in place.

use crate::fitness::fitness;
use crate::geometry::{tour_length, City};

// Serialize only: a deserialized individual could carry a stale score.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Individual {
    route: Vec<City>,
    total_distance: f64,
    fitness: f64,
    /// Relative to the population snapshot it was last normalized against.
    normalized_fitness: f64,
}

impl Individual {
    /// Scores `route`. The normalized fitness starts at `0.0` until the
    /// individual is normalized against a population.
    pub fn new(route: Vec<City>) -> Self {
        let total_distance = tour_length(&route);
        Self {
            route,
            total_distance,
            fitness: fitness(total_distance),
            normalized_fitness: 0.0,
        }
    }

    pub fn route(&self) -> &[City] {
        &self.route
    }

    pub fn into_route(self) -> Vec<City> {
        self.route
    }

    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    pub fn normalized_fitness(&self) -> f64 {
        self.normalized_fitness
    }

    pub(crate) fn with_normalized_fitness(mut self, normalized_fitness: f64) -> Self {
        self.normalized_fitness = normalized_fitness;
        self
    }

    /// City names in visiting order.
    pub fn city_names(&self) -> Vec<&str> {
        self.route.iter().map(City::name).collect()
    }

    /// Whether the route visits every city of `cities` exactly once.
    pub fn is_valid_tour(&self, cities: &[City]) -> bool {
        if self.route.len() != cities.len() {
            return false;
        }
        let mut visited: Vec<&str> = self.city_names();
        let mut expected: Vec<&str> = cities.iter().map(City::name).collect();
        visited.sort_unstable();
        expected.sort_unstable();
        visited.windows(2).all(|pair| pair[0] != pair[1]) && visited == expected
    }
}
