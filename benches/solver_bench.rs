//! Criterion benchmarks for the line-search solvers.
//!
//! Instances come from the seeded generator so every run measures the
//! same work.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tunnel_line::enumeration::{PeConfig, PeRunner};
use tunnel_line::ga::{GaParams, GeneticAlgorithm};
use tunnel_line::geometry::fitness;
use tunnel_line::model::{random_instance, InstanceConfig};

fn instance_config() -> InstanceConfig {
    InstanceConfig::default()
        .with_area(0.0, 0.0, 20.0, 20.0)
        .with_width_range(1.0, 3.0)
        .with_height_range(1.0, 3.0)
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_fitness(c: &mut Criterion) {
    let mut group = c.benchmark_group("fitness");

    for &n in &[10usize, 100, 1000] {
        let tunnels = random_instance(n, &instance_config(), Some(0));
        group.bench_with_input(BenchmarkId::from_parameter(n), &tunnels, |b, t| {
            b.iter(|| black_box(fitness(black_box(t), 0.7, 3.0)))
        });
    }
    group.finish();
}

fn bench_partial_enumeration(c: &mut Criterion) {
    let mut group = c.benchmark_group("partial_enumeration");
    group.sample_size(10);

    for &n in &[10usize, 20, 40] {
        let tunnels = random_instance(n, &instance_config(), Some(0));
        let config = PeConfig::default().without_timeout();
        group.bench_with_input(
            BenchmarkId::from_parameter(n),
            &(tunnels, config),
            |b, (t, c)| {
                b.iter(|| {
                    let result = PeRunner::run(black_box(t), black_box(c));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

fn bench_ga(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga");
    group.sample_size(10);

    for (n, pop, gen) in [(10usize, 50usize, 60usize), (40, 50, 60), (40, 120, 60)] {
        let tunnels = random_instance(n, &instance_config(), Some(0));
        let params = GaParams {
            population_size: pop,
            max_generations: gen,
            seed: Some(42),
            ..GaParams::default()
        };
        group.bench_with_input(
            BenchmarkId::new(format!("n{}_m{}_G{}", n, pop, gen), n),
            &(tunnels, params),
            |b, (t, p)| {
                b.iter(|| {
                    let ga = GeneticAlgorithm::new(black_box(t), p.clone()).unwrap();
                    black_box(ga.run())
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_fitness, bench_partial_enumeration, bench_ga);
criterion_main!(benches);
