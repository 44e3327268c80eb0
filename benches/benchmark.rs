//! Benchmarks for evocrypt keystream generation.
//!
//! Measures entropy table bootstrap, facade construction, per-variant
//! encryption throughput, and throughput scaling across system profiles.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use evocrypt::{CompositeVariant, CryptoFacade, EntropyTable, ParanoiaLevel, SystemType};

/// Passphrase used consistently across all benchmarks.
const BENCH_PASSPHRASE: &str = "BenchmarkPassphrase2024";

/// Message size in bytes for throughput benchmarks.
const MESSAGE_BYTES: usize = 64;

fn level_one() -> ParanoiaLevel {
    ParanoiaLevel::new(1).unwrap()
}

/// Benchmarks `EntropyTable::new()` for each paranoia level.
///
/// Each level adds one full table rebuild, so cost should grow roughly
/// linearly with the level.
fn bench_table_bootstrap(c: &mut Criterion) {
    let mut group = c.benchmark_group("table_bootstrap");
    group.sample_size(10);

    for level in 1..=3u8 {
        let paranoia = ParanoiaLevel::new(level).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(level), &paranoia, |b, &p| {
            b.iter(|| {
                EntropyTable::new(4096, p, SystemType::Cellphone, black_box(BENCH_PASSPHRASE))
                    .unwrap()
            });
        });
    }

    group.finish();
}

/// Benchmarks facade construction plus the first composite.
fn bench_facade_first_composite(c: &mut Criterion) {
    let mut group = c.benchmark_group("facade_first_composite");
    group.sample_size(10);

    group.bench_function("cellphone_1", |b| {
        b.iter(|| {
            let mut facade =
                CryptoFacade::new(black_box(BENCH_PASSPHRASE), SystemType::Cellphone, level_one())
                    .unwrap();
            facade.next().unwrap()
        });
    });

    group.finish();
}

/// Benchmarks `encrypt()` throughput for each composite variant.
///
/// The composite is built once and its state advances naturally between
/// iterations, reflecting real-world streaming behavior.
fn bench_encrypt_variants(c: &mut Criterion) {
    let message = vec![0x5Au8; MESSAGE_BYTES];
    let mut group = c.benchmark_group("encrypt_variant");
    group.throughput(Throughput::Bytes(MESSAGE_BYTES as u64));

    for variant in CompositeVariant::ALL {
        let mut facade =
            CryptoFacade::new(BENCH_PASSPHRASE, SystemType::Cellphone, level_one()).unwrap();
        let mut composite = facade.build(variant).unwrap();

        group.bench_function(variant.name(), |b| {
            b.iter(|| composite.encrypt(black_box(&message), 1).unwrap());
        });
    }

    group.finish();
}

/// Benchmarks first-composite `encrypt()` throughput across system profiles.
///
/// Larger profiles use more generators and wider integers, trading speed
/// for a larger ensemble.
fn bench_encrypt_profile_scaling(c: &mut Criterion) {
    let message = vec![0x5Au8; MESSAGE_BYTES];
    let mut group = c.benchmark_group("encrypt_profile_scaling");
    group.throughput(Throughput::Bytes(MESSAGE_BYTES as u64));
    group.sample_size(10);

    for system_type in [SystemType::Cellphone, SystemType::Laptop, SystemType::Desktop] {
        let mut facade = CryptoFacade::new(BENCH_PASSPHRASE, system_type, level_one()).unwrap();
        let mut composite = facade.next().unwrap();

        group.bench_with_input(
            BenchmarkId::from_parameter(system_type),
            &system_type,
            |b, _| {
                b.iter(|| composite.encrypt(black_box(&message), 1).unwrap());
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_table_bootstrap,
    bench_facade_first_composite,
    bench_encrypt_variants,
    bench_encrypt_profile_scaling,
);
criterion_main!(benches);
