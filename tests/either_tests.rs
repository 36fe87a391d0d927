//! Unit tests for the left-biased Either<L, R> type.
//!
//! - `Left(L)`: the biased side; `bind`, `map` and `zip` act on it
//! - `Right(R)`: passes through unchanged until `swap` re-biases

use rstest::rstest;
use std::cell::RefCell;
use wrapt::control::{Either, Maybe, Outcome};

// =============================================================================
// Basic Construction and Type Checking
// =============================================================================

#[rstest]
fn either_left_is_left() {
    let value: Either<i32, String> = Either::Left(42);
    assert!(value.is_left());
    assert!(!value.is_right());
}

#[rstest]
fn either_right_is_right() {
    let value: Either<i32, String> = Either::Right("hello".to_string());
    assert!(value.is_right());
    assert!(!value.is_left());
}

// =============================================================================
// Value Extraction
// =============================================================================

#[rstest]
#[case(Either::Left(42), Some(42), None)]
#[case(Either::Right("hello"), None, Some("hello"))]
fn either_extracts_each_side(
    #[case] value: Either<i32, &'static str>,
    #[case] left: Option<i32>,
    #[case] right: Option<&'static str>,
) {
    assert_eq!(value.left(), left);
    assert_eq!(value.right(), right);
    assert_eq!(value.left_ref().copied(), left);
    assert_eq!(value.right_ref().copied(), right);
    assert_eq!(value.into_options(), (left, right));
}

#[rstest]
fn either_value_or_else_uses_right() {
    let value: Either<usize, String> = Either::Right("four".to_string());
    assert_eq!(value.value_or_else(|text| text.len()), 4);
    assert_eq!(Either::<i32, ()>::Right(()).left_or_default(), 0);
}

#[rstest]
#[should_panic(expected = "called `Either::error()` on a `Left` value")]
fn either_error_on_left_panics() {
    let value: Either<i32, String> = Either::Left(1);
    let _ = value.error();
}

// =============================================================================
// Left-biased Combinators
// =============================================================================

#[rstest]
fn either_map_targets_left() {
    let value: Either<i32, String> = Either::Left(20);
    assert_eq!(value.map(|n| n + 1), Either::Left(21));
}

#[rstest]
fn either_bind_chain_stops_at_first_right() {
    let parse = |text: &str| -> Either<i32, String> {
        text.parse::<i32>().map_err(|_| format!("not a number: {text}")).into()
    };
    let result = parse("4").bind(|a| parse("x").map(|b| a + b));
    assert_eq!(result, Either::Right("not a number: x".to_string()));
}

#[rstest]
fn either_flatten_prefers_outer_right() {
    let nested: Either<Either<i32, &str>, &str> = Either::Right("outer");
    assert_eq!(nested.flatten(), Either::Right("outer"));
    let nested: Either<Either<i32, &str>, &str> = Either::Left(Either::Right("inner"));
    assert_eq!(nested.flatten(), Either::Right("inner"));
}

#[rstest]
fn either_swap_rebiases() {
    let value: Either<i32, String> = Either::Right("abc".to_string());
    assert_eq!(value.swap().map(|text| text.len()), Either::Left(3));
}

#[rstest]
fn either_bimap_and_map_right() {
    let value: Either<i32, &str> = Either::Right("abc");
    assert_eq!(value.map_right(str::len), Either::Right(3));
    assert_eq!(value.bimap(|n| n * 2, str::to_uppercase), Either::Right("ABC".to_string()));
}

// =============================================================================
// Elimination and Conversion
// =============================================================================

#[rstest]
fn either_match_with_handles_both_sides() {
    let left: Either<i32, String> = Either::Left(42);
    assert_eq!(left.match_with(|n| n.to_string(), |s| s), "42");
    let right: Either<i32, String> = Either::Right("hello".to_string());
    assert_eq!(right.match_with(|n| n.to_string(), |s| s), "hello");
}

#[rstest]
fn either_do_with_runs_one_side() {
    let seen = RefCell::new(Vec::new());
    let value: Either<i32, &str> = Either::Right("r");
    value.do_with(
        |n| seen.borrow_mut().push(n.to_string()),
        |s| seen.borrow_mut().push((*s).to_string()),
    );
    assert_eq!(seen.into_inner(), vec!["r".to_string()]);
}

#[rstest]
fn either_converts_to_maybe_and_outcome() {
    let left: Either<i32, &str> = Either::Left(1);
    assert_eq!(left.to_maybe(), Maybe::of(1));
    assert_eq!(left.to_outcome(), Outcome::success(1));
    let right: Either<i32, &str> = Either::Right("e");
    assert_eq!(right.to_maybe(), Maybe::none());
    assert_eq!(right.to_outcome(), Outcome::from_error("e"));
}

#[rstest]
fn either_contains_checks_left_only() {
    let left: Either<i32, i32> = Either::Left(3);
    let right: Either<i32, i32> = Either::Right(3);
    assert!(left.contains(&3));
    assert!(!right.contains(&3));
    assert!(left.contains_by(&-3, |a, b| a.abs() == b.abs()));
}
