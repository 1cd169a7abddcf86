use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sieve::{base_sieve, compute, segmented_sieve, SieveMode};

fn bench_base_sieve_1m(c: &mut Criterion) {
    c.bench_function("base_sieve(1_000_000)", |b| {
        b.iter(|| base_sieve(black_box(1_000_000)));
    });
}

fn bench_compute_all_1m(c: &mut Criterion) {
    c.bench_function("compute(All { hi: 1_000_000 })", |b| {
        b.iter(|| compute(black_box(SieveMode::All { hi: 1_000_000 })));
    });
}

fn bench_compute_all_100m(c: &mut Criterion) {
    c.bench_function("compute(All { hi: 100_000_000 })", |b| {
        b.iter(|| compute(black_box(SieveMode::All { hi: 100_000_000 })));
    });
}

fn bench_segmented_sieve_tail_range(c: &mut Criterion) {
    let hi = 10_000_000u64;
    let sqrt_hi = sieve::isqrt(hi);
    let base_primes = base_sieve(sqrt_hi);
    c.bench_function("segmented_sieve(sqrt(hi)..10_000_000)", |b| {
        b.iter(|| {
            segmented_sieve(
                black_box(sqrt_hi + 1),
                black_box(hi),
                black_box(&base_primes),
            )
        });
    });
}

fn bench_compute_narrow_range_near_10_to_9(c: &mut Criterion) {
    c.bench_function("compute(Range { 999_000_000..1_000_000_000 })", |b| {
        b.iter(|| {
            compute(black_box(SieveMode::Range {
                lo: 999_000_000,
                hi: 1_000_000_000,
            }))
        });
    });
}

criterion_group!(
    benches,
    bench_base_sieve_1m,
    bench_compute_all_1m,
    bench_compute_all_100m,
    bench_segmented_sieve_tail_range,
    bench_compute_narrow_range_near_10_to_9,
);
criterion_main!(benches);
