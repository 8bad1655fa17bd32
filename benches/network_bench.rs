//! Performance benchmarks for network training, relaxation, and energy.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hopfield::AssociativeNetwork;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_pattern(size: usize, rng: &mut StdRng) -> Vec<u8> {
    (0..size).map(|_| rng.gen_range(0..=1)).collect()
}

fn bench_train(c: &mut Criterion) {
    let mut group = c.benchmark_group("train");

    for size in [64, 225, 784].iter() {
        let mut rng = StdRng::seed_from_u64(0);
        let pattern = random_pattern(*size, &mut rng);
        let mut net = AssociativeNetwork::with_seed(*size, 0);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| net.train(black_box(&pattern)).unwrap());
        });
    }
    group.finish();
}

fn bench_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("update");

    for size in [64, 225, 784].iter() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut net = AssociativeNetwork::with_seed(*size, 0);
        for _ in 0..5 {
            net.train(&random_pattern(*size, &mut rng)).unwrap();
        }
        net.initialize(&random_pattern(*size, &mut rng)).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| net.update());
        });
    }
    group.finish();
}

fn bench_energy(c: &mut Criterion) {
    let mut group = c.benchmark_group("energy");

    for size in [64, 225, 784].iter() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut net = AssociativeNetwork::with_seed(*size, 0);
        for _ in 0..5 {
            net.train(&random_pattern(*size, &mut rng)).unwrap();
        }

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| black_box(net.energy()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_train, bench_update, bench_energy);

criterion_main!(benches);
