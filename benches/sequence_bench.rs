//! Benchmark for the sequence-traversal and arity layers.
//!
//! Compares the generic traversals against hand-written `Option`/`Result`
//! loops over the same data.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use wrapt::control::{Maybe, MaybeKind, Outcome, OutcomeKind};
use wrapt::sequence::{collect, fold, fold_while, map_effectful};
use wrapt::typeclass::Applicative;

// =============================================================================
// Traversal Benchmarks
// =============================================================================

fn benchmark_collect(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("collect");

    for size in [10, 1_000, 100_000] {
        let source: Vec<Maybe<u64>> = (0..size).map(Maybe::of).collect();

        group.bench_with_input(BenchmarkId::new("maybe", size), &source, |bencher, source| {
            let deferred = collect(source.iter().copied());
            bencher.iter(|| black_box(deferred.run()));
        });

        let options: Vec<Option<u64>> = (0..size).map(Some).collect();
        group.bench_with_input(BenchmarkId::new("std_option", size), &options, |bencher, options| {
            bencher.iter(|| black_box(options.iter().copied().collect::<Option<Vec<u64>>>()));
        });
    }

    group.finish();
}

fn benchmark_map_effectful(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("map_effectful");

    for size in [10, 1_000, 100_000] {
        let source: Vec<u64> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("outcome", size), &source, |bencher, source| {
            let deferred = map_effectful(source.iter().copied(), |value| {
                value.checked_mul(3).map_or_else(|| Outcome::from_error("overflow"), Outcome::success)
            });
            bencher.iter(|| black_box(deferred.run()));
        });

        // Failure in the middle: measures short-circuit cost
        group.bench_with_input(BenchmarkId::new("outcome_short_circuit", size), &source, |bencher, source| {
            let midpoint = size / 2;
            let deferred = map_effectful(source.iter().copied(), move |value| {
                if value == midpoint { Outcome::from_error("midpoint") } else { Outcome::success(value) }
            });
            bencher.iter(|| black_box(deferred.run()));
        });
    }

    group.finish();
}

fn benchmark_fold(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("fold");

    for size in [10, 1_000, 100_000] {
        let source: Vec<u64> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("fold", size), &source, |bencher, source| {
            bencher.iter(|| black_box(fold(source.iter().copied(), 0_u64, |sum, value| Maybe::of(sum + value))));
        });

        group.bench_with_input(BenchmarkId::new("fold_while_half", size), &source, |bencher, source| {
            let limit = size / 2;
            bencher.iter(|| {
                black_box(fold_while(
                    source.iter().copied(),
                    0_u64,
                    |count, _| Maybe::of(count + 1),
                    |count| *count.value() < limit,
                ))
            });
        });
    }

    group.finish();
}

// =============================================================================
// Arity Benchmarks
// =============================================================================

fn benchmark_zip(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("zip");

    group.bench_function("zip2_maybe", |bencher| {
        bencher.iter(|| black_box(MaybeKind::zip2(black_box(Maybe::of(1)), black_box(Maybe::of(2)), |a, b| a + b)));
    });

    group.bench_function("zip5_outcome", |bencher| {
        bencher.iter(|| {
            black_box(OutcomeKind::<&str>::zip5(
                black_box(Outcome::success(1)),
                black_box(Outcome::success(2)),
                black_box(Outcome::success(3)),
                black_box(Outcome::success(4)),
                black_box(Outcome::success(5)),
                |a: i32, b: i32, c: i32, d: i32, e: i32| a + b + c + d + e,
            ))
        });
    });

    group.bench_function("lift3_maybe", |bencher| {
        let lifted = MaybeKind::lift3(|a: i32, b: i32, c: i32| a * b + c);
        bencher.iter(|| black_box(lifted(black_box(Maybe::of(3)), black_box(Maybe::of(4)), black_box(Maybe::of(5)))));
    });

    group.finish();
}

criterion_group!(benches, benchmark_collect, benchmark_map_effectful, benchmark_fold, benchmark_zip);

criterion_main!(benches);
