//! Deferred execution and termination behavior of the sequence layer.

#![cfg(feature = "sequence")]

use rstest::rstest;
use std::cell::Cell;
use std::panic::{AssertUnwindSafe, catch_unwind};
use wrapt::control::{Attempt, Either, Maybe, Outcome, PanicError, Verdict};
use wrapt::sequence::{
    EmptySequenceError, collect, filter_effectful, fold, fold_while, map_effectful,
    map_effectful_once, reduce, reduce_while,
};

/// A source that panics as soon as it is enumerated.
#[derive(Clone)]
struct ExplodingSource;

impl IntoIterator for ExplodingSource {
    type Item = Maybe<i32>;
    type IntoIter = std::vec::IntoIter<Maybe<i32>>;

    fn into_iter(self) -> Self::IntoIter {
        panic!("source enumerated")
    }
}

#[rstest]
fn collect_does_not_enumerate_until_run() {
    let deferred = collect(ExplodingSource);
    let outcome = catch_unwind(AssertUnwindSafe(|| deferred.run()));
    assert!(outcome.is_err());
}

#[rstest]
fn map_effectful_does_not_enumerate_until_run() {
    let deferred = map_effectful(ExplodingSource, |value| value);
    let caught = Attempt::catch(|| deferred.run());
    assert_eq!(caught.fault().message(), "source enumerated");
    assert!(caught.fault().downcast_ref::<PanicError>().is_some());
}

#[rstest]
fn map_effectful_stops_pulling_at_first_failure() {
    let pulled = Cell::new(0);
    let source = (1..=10).inspect(|_| pulled.set(pulled.get() + 1));
    let deferred = map_effectful(source, |n| {
        if n == 4 { Outcome::from_error(format!("row {n}")) } else { Outcome::success(n) }
    });
    assert_eq!(pulled.get(), 0);

    assert_eq!(deferred.run(), Outcome::from_error("row 4".to_string()));
    assert_eq!(pulled.get(), 4);

    deferred.run();
    assert_eq!(pulled.get(), 8);
}

#[rstest]
fn map_effectful_once_accepts_non_clone_sources() {
    let source = vec![String::from("a"), String::from("bb")].into_iter();
    let lengths = map_effectful_once(source, |text| Either::<usize, String>::Left(text.len()));
    assert_eq!(lengths, Either::Left(vec![1, 2]));
}

#[rstest]
fn filter_effectful_is_deferred_and_ordered() {
    let calls = Cell::new(0);
    let deferred = filter_effectful(vec![5, 1, 4, 2, 3], |n| {
        calls.set(calls.get() + 1);
        Verdict::success(*n >= 3)
    });
    assert_eq!(calls.get(), 0);
    assert_eq!(deferred.run(), Verdict::success(vec![5, 4, 3]));
    assert_eq!(calls.get(), 5);
}

#[rstest]
fn filter_effectful_with_attempt_predicate_captures_fault() {
    let deferred = filter_effectful(vec!["1", "x", "3"], |text| {
        Attempt::from(text.parse::<i32>()).map(|n| n > 1)
    });
    let result = deferred.run();
    assert!(result.is_failure());
    assert!(result.fault().type_name().ends_with("ParseIntError"));
}

#[rstest]
fn fold_sums_successes() {
    let total = fold(1..=4, 0, |sum, n| Outcome::<i32, String>::success(sum + n));
    assert_eq!(total, Outcome::success(10));
}

#[rstest]
fn fold_while_does_not_step_after_predicate_rejects() {
    let stepped = Cell::new(Vec::new());
    let result = fold_while(
        vec![1, 2, 3, 4, 5],
        0,
        |sum, n| {
            let mut seen = stepped.take();
            seen.push(n);
            stepped.set(seen);
            Maybe::of(sum + n)
        },
        |sum| sum.is_present() && *sum.value() < 5,
    );
    assert_eq!(result, Maybe::of(6));
    assert_eq!(stepped.take(), vec![1, 2, 3]);
}

#[rstest]
fn fold_while_predicate_on_failure_only_can_stop_a_healthy_fold() {
    let result = fold_while(1..=3, 0, |sum, n| Maybe::of(sum + n), |sum| sum.is_absent());
    assert_eq!(result, Maybe::of(0));
}

#[rstest]
fn reduce_while_seeds_from_first_element() {
    let result = reduce_while(vec![10, 20, 30], |a, b| Maybe::of(a + b), |sum| *sum.value() < 25);
    assert_eq!(result, Ok(Maybe::of(30)));
}

#[rstest]
#[case(Vec::new(), Err(EmptySequenceError))]
#[case(vec![2], Ok(Maybe::of(2)))]
#[case(vec![2, 3, 4], Ok(Maybe::of(24)))]
fn reduce_multiplies(#[case] source: Vec<i32>, #[case] expected: Result<Maybe<i32>, EmptySequenceError>) {
    assert_eq!(reduce(source, |a, b| Maybe::of(a * b)), expected);
}
