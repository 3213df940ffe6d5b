use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use genalg_tsp::{
    evolution::EvolutionOptions,
    geometry::City,
    population::initial_population,
    rng::RandomNumberGenerator,
    strategy::{BreedStrategy, OrderedCrossoverStrategy},
};

fn cities(n: usize) -> Vec<City> {
    let mut rng = RandomNumberGenerator::from_seed(1);
    (0..n)
        .map(|i| City::new(format!("c{}", i), rng.gen_unit() * 200.0, rng.gen_unit() * 200.0))
        .collect()
}

fn bench_breeding(c: &mut Criterion) {
    let strategy = OrderedCrossoverStrategy::new();
    let all = cities(50);
    let mut rng = RandomNumberGenerator::from_seed(2);

    let mut group = c.benchmark_group("ordered_breeding");
    for size in [10, 100, 1000, 5000].iter() {
        let pool = initial_population(*size, &all, &mut rng, usize::MAX);

        // Sequential: threshold above the offspring count
        let sequential = EvolutionOptions::builder()
            .population_size(*size)
            .elitism_size(0)
            .mutation_rate(0.01)
            .parallel_threshold(usize::MAX)
            .build();
        group.bench_with_input(BenchmarkId::new("sequential", size), size, |b, &size| {
            b.iter(|| {
                let result = strategy.breed(
                    black_box(&pool),
                    size,
                    &all,
                    black_box(&sequential),
                    black_box(&mut rng),
                );
                assert!(result.is_ok());
            })
        });

        // Parallel: always above the threshold
        let parallel = EvolutionOptions::builder()
            .population_size(*size)
            .elitism_size(0)
            .mutation_rate(0.01)
            .parallel_threshold(1)
            .build();
        group.bench_with_input(BenchmarkId::new("parallel", size), size, |b, &size| {
            b.iter(|| {
                let result = strategy.breed(
                    black_box(&pool),
                    size,
                    &all,
                    black_box(&parallel),
                    black_box(&mut rng),
                );
                assert!(result.is_ok());
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_breeding);
criterion_main!(benches);
