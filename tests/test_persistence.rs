use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use genalg_tsp::{
    evolution::{
        history::{BEST_DISTANCE_FILE, GENERATION_DISTANCE_FILE, GENERATION_FITNESS_FILE},
        EvolutionLauncher, EvolutionOptions,
    },
    geometry::City,
    persistence::HistoryWriter,
    rng::RandomNumberGenerator,
    strategy::OrderedCrossoverStrategy,
};

fn scratch_dir() -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("genalg-tsp-history-{}-{}", std::process::id(), nanos))
}

fn read_values(path: &PathBuf) -> Vec<f64> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(|line| line.parse().unwrap())
        .collect()
}

#[test]
fn test_persist_run_history() {
    let cities = vec![
        City::new("a", 0.0, 0.0),
        City::new("b", 3.0, 0.0),
        City::new("c", 3.0, 4.0),
        City::new("d", 0.0, 4.0),
        City::new("e", 1.5, 6.0),
    ];
    let options = EvolutionOptions::builder()
        .num_generations(12)
        .population_size(10)
        .elitism_size(2)
        .build();
    let launcher = EvolutionLauncher::new(OrderedCrossoverStrategy::new(), options);
    let result = launcher
        .evolve(&cities, &mut RandomNumberGenerator::from_seed(8))
        .unwrap();

    let dir = scratch_dir();
    let writer = HistoryWriter::new(dir.join("run"));
    let paths = result.history.persist(&writer).unwrap();

    assert_eq!(
        paths,
        vec![
            writer.dir().join(BEST_DISTANCE_FILE),
            writer.dir().join(GENERATION_DISTANCE_FILE),
            writer.dir().join(GENERATION_FITNESS_FILE),
        ]
    );
    assert_eq!(read_values(&paths[0]), result.history.best_distance());
    assert_eq!(read_values(&paths[1]), result.history.generation_distance());
    assert_eq!(read_values(&paths[2]), result.history.generation_fitness());

    // a second persist appends
    result.history.persist(&writer).unwrap();
    assert_eq!(read_values(&paths[0]).len(), 24);

    fs::remove_dir_all(dir).unwrap();
}
