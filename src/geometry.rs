//! # Geometry
//!
//! Cities are points in the plane identified by name. A route is a slice of
//! cities visited in order and implicitly closed: the last city connects back
//! to the first.
//!
//! ```rust
//! use genalg_tsp::geometry::{tour_length, City};
//!
//! let square = vec![
//!     City::new("a", 0.0, 0.0),
//!     City::new("b", 0.0, 10.0),
//!     City::new("c", 10.0, 10.0),
//!     City::new("d", 10.0, 0.0),
//! ];
//!
//! assert_eq!(tour_length(&square), 40.0);
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};

/// A named point in the plane.
///
/// Two cities are the same city iff their names match, regardless of
/// coordinates. Equality and hashing follow that rule.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct City {
    name: String,
    x: f64,
    y: f64,
}

impl City {
    pub fn new(name: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            name: name.into(),
            x,
            y,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }
}

impl PartialEq for City {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for City {}

impl Hash for City {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.x, self.y)
    }
}

/// Euclidean distance between two cities.
pub fn distance(a: &City, b: &City) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

/// Length of the closed tour through `route`.
///
/// Routes with fewer than two cities have length `0.0`.
pub fn tour_length(route: &[City]) -> f64 {
    if route.len() < 2 {
        return 0.0;
    }

    let open: f64 = route.windows(2).map(|pair| distance(&pair[0], &pair[1])).sum();
    // closing edge
    open + distance(&route[route.len() - 1], &route[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<City> {
        vec![
            City::new("a", 0.0, 0.0),
            City::new("b", 0.0, 10.0),
            City::new("c", 10.0, 10.0),
            City::new("d", 10.0, 0.0),
        ]
    }

    #[test]
    fn test_distance() {
        let a = City::new("a", 0.0, 0.0);
        let b = City::new("b", 3.0, 4.0);
        assert_eq!(distance(&a, &b), 5.0);
        assert_eq!(distance(&b, &a), 5.0);
        assert_eq!(distance(&a, &a), 0.0);
    }

    #[test]
    fn test_tour_length_square() {
        assert_eq!(tour_length(&square()), 40.0);
    }

    #[test]
    fn test_tour_length_crossing_route() {
        let cities = square();
        let crossing = vec![
            cities[0].clone(),
            cities[2].clone(),
            cities[1].clone(),
            cities[3].clone(),
        ];
        let expected = 20.0 + 2.0 * 200f64.sqrt();
        assert!((tour_length(&crossing) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_tour_length_degenerate() {
        assert_eq!(tour_length(&[]), 0.0);
        assert_eq!(tour_length(&[City::new("solo", 5.0, 5.0)]), 0.0);
    }

    #[test]
    fn test_tour_length_two_cities_goes_there_and_back() {
        let route = vec![City::new("a", 0.0, 0.0), City::new("b", 0.0, 2.5)];
        assert_eq!(tour_length(&route), 5.0);
    }

    #[test]
    fn test_tour_length_invariant_under_rotation_and_reversal() {
        let route = vec![
            City::new("a", 1.0, 7.0),
            City::new("b", 4.5, -2.0),
            City::new("c", 9.0, 3.0),
            City::new("d", -3.0, 8.0),
            City::new("e", 0.5, 0.5),
        ];
        let base = tour_length(&route);

        for shift in 0..route.len() {
            let mut rotated = route.clone();
            rotated.rotate_left(shift);
            assert!((tour_length(&rotated) - base).abs() < 1e-9);

            rotated.reverse();
            assert!((tour_length(&rotated) - base).abs() < 1e-9);
        }
    }

    #[test]
    fn test_city_identity_is_by_name() {
        let a = City::new("Berlin", 1.0, 2.0);
        let moved = City::new("Berlin", 5.0, 6.0);
        let other = City::new("Paris", 1.0, 2.0);

        assert_eq!(a, moved);
        assert_ne!(a, other);
    }
}
