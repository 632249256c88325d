//! Benchmark for the Attempt container.
//!
//! Measures the cost of capturing an outcome and of chaining combinators
//! on both the success and the failure path.

use attempt::control::{Cause, attempt};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

// =============================================================================
// Factory Benchmarks
// =============================================================================

fn benchmark_factory(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("attempt_factory");

    group.bench_function("success", |bencher| {
        bencher.iter(|| attempt(|| Ok::<_, Cause>(black_box(42))).unwrap_or(0));
    });

    group.bench_function("failure", |bencher| {
        bencher.iter(|| attempt(|| Err::<i32, _>(Cause::from(black_box("boom")))).unwrap_or(0));
    });

    group.finish();
}

// =============================================================================
// Combinator Chain Benchmarks
// =============================================================================

fn benchmark_combinator_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("combinator_chain");

    for length in [1_u32, 10, 100] {
        group.bench_with_input(
            BenchmarkId::new("map_chain", length),
            &length,
            |bencher, &length| {
                bencher.iter(|| {
                    let mut outcome = attempt(|| Ok::<_, Cause>(black_box(0_u64)));
                    for _ in 0..length {
                        outcome = outcome.map(|n| Ok::<_, Cause>(n.wrapping_add(1)));
                    }
                    outcome.unwrap_or(0)
                });
            },
        );
    }

    group.bench_function("parse_recover_map", |bencher| {
        bencher.iter(|| {
            attempt(|| black_box("abc").parse::<i32>())
                .recover(|_| Ok::<_, Cause>(-1))
                .map(|n| Ok::<_, Cause>(n.abs()))
                .unwrap_or(0)
        });
    });

    group.bench_function("filter_reject", |bencher| {
        bencher.iter(|| {
            attempt(|| Ok::<_, Cause>(black_box(5)))
                .filter(|n| Ok::<_, Cause>(*n < 0))
                .unwrap_or(0)
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_factory, benchmark_combinator_chain);
criterion_main!(benches);
