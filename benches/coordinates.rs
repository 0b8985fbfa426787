//! Benchmarks for coordinate conversion, distance and interning
//!
//! 1. **Conversion**: Cartesian to spheric and back
//! 2. **Distance**: straight-line and spheric distance across representations
//! 3. **Interning**: cache hits and cache misses at growing sizes

#![allow(missing_docs)] // Criterion macros generate undocumented functions

use coordspace::{CartesianCache, CartesianCoordinate, Coordinate, SphericCoordinate};
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::{FRAC_PI_2, PI};
use std::hint::black_box;

const SEED: u64 = 0xC0DE;

fn random_triples(n: usize) -> Vec<[f64; 3]> {
    let mut rng = StdRng::seed_from_u64(SEED);
    (0..n)
        .map(|_| {
            [
                rng.gen_range(-100.0..100.0),
                rng.gen_range(-100.0..100.0),
                rng.gen_range(-100.0..100.0),
            ]
        })
        .collect()
}

fn bench_conversion(c: &mut Criterion) {
    let cartesian = CartesianCoordinate::new(1.0, 2.0, 3.0).unwrap();
    let spheric = SphericCoordinate::new(0.28, 0.37, 5.0).unwrap();

    let mut group = c.benchmark_group("conversion");
    group.bench_function("cartesian_to_spheric", |b| {
        b.iter(|| black_box(&cartesian).as_spheric().unwrap())
    });
    group.bench_function("spheric_construction", |b| {
        b.iter(|| SphericCoordinate::new(black_box(0.28), black_box(0.37), black_box(5.0)).unwrap())
    });
    group.bench_function("spheric_to_cartesian", |b| {
        b.iter(|| black_box(&spheric).as_cartesian())
    });
    group.finish();
}

fn bench_distance(c: &mut Criterion) {
    let a = CartesianCoordinate::new(-2.0, 4.0, -3.0).unwrap();
    let b = CartesianCoordinate::new(1.0, 1.0, 1.0).unwrap();
    let s = SphericCoordinate::new(FRAC_PI_2 / 3.0, PI / 4.0, 5.0).unwrap();

    let mut group = c.benchmark_group("distance");
    group.bench_function("cartesian_cartesian", |bench| {
        bench.iter(|| black_box(&a).cartesian_distance(black_box(&b)).unwrap())
    });
    group.bench_function("cartesian_spheric", |bench| {
        bench.iter(|| black_box(&a).cartesian_distance(black_box(&s)).unwrap())
    });
    group.bench_function("spheric_from_cartesian", |bench| {
        bench.iter(|| black_box(&a).spheric_distance(black_box(&s)).unwrap())
    });
    group.finish();
}

fn bench_interning(c: &mut Criterion) {
    let mut group = c.benchmark_group("interning");

    for &n in &[100usize, 1_000, 10_000] {
        let triples = random_triples(n);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("miss", n), &triples, |b, triples| {
            b.iter_batched(
                CartesianCache::new,
                |cache| {
                    for [x, y, z] in triples {
                        black_box(cache.get(*x, *y, *z).unwrap());
                    }
                    cache
                },
                BatchSize::LargeInput,
            );
        });

        let warm = CartesianCache::new();
        for [x, y, z] in &triples {
            warm.get(*x, *y, *z).unwrap();
        }
        group.bench_with_input(BenchmarkId::new("hit", n), &triples, |b, triples| {
            b.iter(|| {
                for [x, y, z] in triples {
                    black_box(warm.get(*x, *y, *z).unwrap());
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_conversion, bench_distance, bench_interning);
criterion_main!(benches);
