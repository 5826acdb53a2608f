//! Benchmarks for the Threefry engine.
//!
//! Measures single-sample throughput per output width, the cost of
//! one block encryption across round counts, and constant-time discard.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand_core::RngCore;
use threefry::{Threefry, ThreefryConfig};

/// Seed used consistently across all benchmarks.
const BENCH_SEED: u64 = 0x0123_4567_89AB_CDEF;

/// Benchmarks `next_sample()` for every output width at 20 rounds.
///
/// Each iteration draws one sample; block encryption is amortised over
/// the samples of a block, so narrow widths encrypt less often per call.
fn bench_next_sample(c: &mut Criterion) {
    let mut group = c.benchmark_group("next_sample");

    for bits in [8u32, 16, 32, 64] {
        let config = ThreefryConfig::new(bits, 20, 4, 4).unwrap();
        let mut rng = Threefry::with_seed(config, BENCH_SEED);
        group.throughput(Throughput::Bytes(u64::from(bits / 8)));
        group.bench_with_input(BenchmarkId::from_parameter(bits), &bits, |b, _| {
            b.iter(|| black_box(rng.next_sample()));
        });
    }

    group.finish();
}

/// Benchmarks a full block refill across round counts.
///
/// Discarding exactly one block forces one encryption and nothing else.
fn bench_block_rounds(c: &mut Criterion) {
    let mut group = c.benchmark_group("block_rounds");
    group.throughput(Throughput::Bytes(32));

    for rounds in [13usize, 20, 72] {
        let config = ThreefryConfig::new(64, rounds, 4, 4).unwrap();
        let mut rng = Threefry::with_seed(config, BENCH_SEED);
        group.bench_with_input(BenchmarkId::from_parameter(rounds), &rounds, |b, _| {
            b.iter(|| rng.discard(black_box(4)));
        });
    }

    group.finish();
}

/// Benchmarks `discard()` with a large skip, which must not depend on `n`.
fn bench_discard(c: &mut Criterion) {
    let mut rng = Threefry::with_seed(ThreefryConfig::default(), BENCH_SEED);
    c.bench_function("discard_2^40", |b| {
        b.iter(|| rng.discard(black_box(1 << 40)));
    });
}

/// Benchmarks `fill_bytes()` through `rand_core`.
fn bench_fill_bytes(c: &mut Criterion) {
    let mut rng = Threefry::with_seed(ThreefryConfig::threefry4x64_13_64(), BENCH_SEED);
    let mut buf = [0u8; 1024];

    let mut group = c.benchmark_group("fill_bytes");
    group.throughput(Throughput::Bytes(buf.len() as u64));
    group.bench_function("1KiB_13_rounds", |b| {
        b.iter(|| rng.fill_bytes(black_box(&mut buf)));
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_next_sample,
    bench_block_rounds,
    bench_discard,
    bench_fill_bytes,
);
criterion_main!(benches);
