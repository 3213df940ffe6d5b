#![cfg(feature = "serde")]

use genalg_tsp::{
    evolution::{EvolutionOptions, LogLevel},
    fitness::FitnessNormalization,
    geometry::City,
    individual::Individual,
};

#[test]
fn test_options_round_trip() {
    let options = EvolutionOptions::builder()
        .num_generations(42)
        .log_level(LogLevel::Minimal)
        .normalization(FitnessNormalization::Sum)
        .build();

    let json = serde_json::to_string(&options).unwrap();
    let restored: EvolutionOptions = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, options);
}

#[test]
fn test_cities_load_from_json() {
    let json = r#"[
        {"name": "a", "x": 0.0, "y": 0.0},
        {"name": "b", "x": 0.0, "y": 10.0},
        {"name": "c", "x": 10.0, "y": 10.0},
        {"name": "d", "x": 10.0, "y": 0.0}
    ]"#;

    let cities: Vec<City> = serde_json::from_str(json).unwrap();
    let individual = Individual::new(cities);

    assert_eq!(individual.total_distance(), 40.0);
}
