// Unless explicitly stated otherwise all files in this repository are licensed under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2024 Datadog, Inc.

use std::{hint::black_box, time::Duration};

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, SamplingMode};
use pointhash::{collision_stats, CoordinateHash, Domain, HornerHash, Xxh3Hash};
use rand::{thread_rng, Rng};

const PRIMES: [i64; 4] = [31, 193, 389, 769];
const HALF_WIDTHS: [i64; 2] = [10, 50];

fn hash_coordinates(c: &mut Criterion) {
    let mut group = c.benchmark_group("HashCoordinates");
    group.sampling_mode(SamplingMode::Flat);
    group.warm_up_time(Duration::from_millis(300));
    group.measurement_time(Duration::from_millis(1000));
    group.sample_size(1000);

    let mut rng = thread_rng();

    for prime in PRIMES {
        group.bench_with_input(
            BenchmarkId::new("Horner", prime),
            &HornerHash::new(prime),
            |b, hash| {
                let (x, y, z): (i64, i64, i64) = rng.gen();
                b.iter(|| hash.hash(black_box(x), black_box(y), black_box(z)))
            },
        );
    }
    group.bench_function("XXH3", |b| {
        let (x, y, z): (i64, i64, i64) = rng.gen();
        b.iter(|| Xxh3Hash.hash(black_box(x), black_box(y), black_box(z)))
    });
    group.finish();
}

fn measure_collisions(c: &mut Criterion) {
    let mut group = c.benchmark_group("CollisionStats");
    group.sampling_mode(SamplingMode::Flat);
    group.sample_size(10);

    for half_width in HALF_WIDTHS {
        let domain = Domain::cube(-half_width..half_width);
        for prime in PRIMES {
            group.bench_with_input(
                BenchmarkId::new(format!("Horner({})", prime), format!("{}^3", 2 * half_width)),
                &domain,
                |b, domain| b.iter(|| collision_stats(&HornerHash::new(prime), black_box(domain))),
            );
        }
        group.bench_with_input(
            BenchmarkId::new("XXH3", format!("{}^3", 2 * half_width)),
            &domain,
            |b, domain| b.iter(|| collision_stats(&Xxh3Hash, black_box(domain))),
        );
    }
    group.finish();
}

criterion_group!(benches, hash_coordinates, measure_collisions);
criterion_main!(benches);
