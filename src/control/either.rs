//! Either type - a value that can be one of two types.
//!
//! `Either<L, R>` is `Left(L)` or `Right(R)`. Unlike `Result`, the biased
//! side is `Left`: `bind`, `map` and `zip` operate on the left value and
//! pass a right value through unchanged. Use [`Either::swap`] to re-bias.
//!
//! # Examples
//!
//! ```rust
//! use wrapt::control::Either;
//!
//! let left: Either<i32, String> = Either::Left(42);
//! assert_eq!(left.map(|n| n + 1), Either::Left(43));
//!
//! let right: Either<i32, String> = Either::Right("stop".to_string());
//! assert_eq!(right.clone().map(|n| n + 1), right);
//!
//! let described = Either::<i32, String>::Right("hello".to_string())
//!     .match_with(|n| format!("Number: {n}"), |s| format!("String: {s}"));
//! assert_eq!(described, "String: hello");
//! ```

use std::error::Error;
use std::fmt;
use std::marker::PhantomData;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::attempt::Attempt;
use super::fault::Fault;
use super::maybe::Maybe;
use super::outcome::Outcome;
use super::verdict::Verdict;
use crate::typeclass::{Kind, TypeConstructor};

/// A value that can be one of two types, biased towards `Left`.
///
/// # Examples
///
/// ```rust
/// use wrapt::control::Either;
///
/// let found: Either<u32, String> = Either::Left(7);
/// let doubled = found.bind(|n| if n < 10 { Either::Left(n * 2) } else { Either::Right("too big".into()) });
/// assert_eq!(doubled, Either::Left(14));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Either<L, R> {
    /// The biased side.
    Left(L),
    /// The other side; passes through `bind`/`map`/`zip` unchanged.
    Right(R),
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Converts an `Option`, using `right` for `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wrapt::control::Either;
    ///
    /// assert_eq!(Either::from_option(Some(1), || "missing"), Either::Left(1));
    /// assert_eq!(Either::<i32, _>::from_option(None, || "missing"), Either::Right("missing"));
    /// ```
    #[inline]
    pub fn from_option<F>(option: Option<L>, right: F) -> Self
    where
        F: FnOnce() -> R,
    {
        match option {
            Some(value) => Self::Left(value),
            None => Self::Right(right()),
        }
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns a reference to the left value.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Right` value.
    #[inline]
    #[track_caller]
    pub fn value(&self) -> &L {
        match self {
            Self::Left(value) => value,
            Self::Right(_) => panic!("called `Either::value()` on a `Right` value"),
        }
    }

    /// Returns a reference to the right value.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Left` value.
    #[inline]
    #[track_caller]
    pub fn error(&self) -> &R {
        match self {
            Self::Left(_) => panic!("called `Either::error()` on a `Left` value"),
            Self::Right(value) => value,
        }
    }

    /// Converts into an `Option<L>`, consuming the either.
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Converts into an `Option<R>`, consuming the either.
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Returns a reference to the left value if present.
    #[inline]
    pub const fn left_ref(&self) -> Option<&L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Returns a reference to the right value if present.
    #[inline]
    pub const fn right_ref(&self) -> Option<&R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Returns the left value or `default`.
    #[inline]
    pub fn value_or(self, default: L) -> L {
        self.value_or_else(|_| default)
    }

    /// Returns the left value or computes one from the right value.
    #[inline]
    pub fn value_or_else<F>(self, factory: F) -> L
    where
        F: FnOnce(R) -> L,
    {
        match self {
            Self::Left(value) => value,
            Self::Right(value) => factory(value),
        }
    }

    /// Returns the left value or raises the right value as a [`Fault`].
    ///
    /// # Panics
    ///
    /// Panics with a `Fault` payload wrapping the right value if this is a
    /// `Right`; [`Attempt::catch`] recovers it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wrapt::control::{Attempt, Either};
    ///
    /// let parsed: Either<i32, std::num::ParseIntError> = "12".parse::<i32>().into();
    /// assert_eq!(parsed.value_or_throw(), 12);
    ///
    /// let failed: Either<i32, std::num::ParseIntError> = "x".parse::<i32>().into();
    /// let caught = Attempt::catch(|| failed.value_or_throw());
    /// assert!(caught.fault().type_name().ends_with("ParseIntError"));
    /// ```
    #[inline]
    #[track_caller]
    pub fn value_or_throw(self) -> L
    where
        R: Error + Send + Sync + 'static,
    {
        match self {
            Self::Left(value) => value,
            Self::Right(error) => Fault::new(error).rethrow(),
        }
    }

    /// Returns `true` if the left value equals `expected`.
    #[inline]
    pub fn contains(&self, expected: &L) -> bool
    where
        L: PartialEq,
    {
        self.contains_by(expected, PartialEq::eq)
    }

    /// Returns `true` if the left value matches `expected` under `comparer`.
    #[inline]
    pub fn contains_by<F>(&self, expected: &L, comparer: F) -> bool
    where
        F: FnOnce(&L, &L) -> bool,
    {
        match self {
            Self::Left(value) => comparer(value, expected),
            Self::Right(_) => false,
        }
    }

    /// Compares two eithers with injected comparers for each side.
    #[inline]
    pub fn eq_by<F, G>(&self, other: &Self, left_comparer: F, right_comparer: G) -> bool
    where
        F: FnOnce(&L, &L) -> bool,
        G: FnOnce(&R, &R) -> bool,
    {
        match (self, other) {
            (Self::Left(value), Self::Left(other)) => left_comparer(value, other),
            (Self::Right(value), Self::Right(other)) => right_comparer(value, other),
            _ => false,
        }
    }

    // =========================================================================
    // Monadic Operations
    // =========================================================================

    /// Sequences a dependent computation on the left value.
    #[inline]
    pub fn bind<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> Either<T, R>,
    {
        match self {
            Self::Left(value) => function(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Transforms the left value.
    #[inline]
    pub fn map<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        self.bind(|value| Either::Left(function(value)))
    }

    /// Combines two left values; the first right value wins.
    #[inline]
    pub fn zip<U, T, F>(self, other: Either<U, R>, function: F) -> Either<T, R>
    where
        F: FnOnce(L, U) -> T,
    {
        self.bind(|value| other.map(|other_value| function(value, other_value)))
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the left value if present. Same as [`map`](Self::map).
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        self.map(function)
    }

    /// Applies a function to the right value if present.
    #[inline]
    pub fn map_right<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Applies one of two functions depending on the side.
    #[inline]
    pub fn bimap<T, U, F, G>(self, left_function: F, right_function: G) -> Either<T, U>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> U,
    {
        match self {
            Self::Left(value) => Either::Left(left_function(value)),
            Self::Right(value) => Either::Right(right_function(value)),
        }
    }

    // =========================================================================
    // Elimination
    // =========================================================================

    /// Eliminates the either by applying one of two functions.
    #[inline]
    pub fn match_with<T, F, G>(self, on_left: F, on_right: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => on_left(value),
            Self::Right(value) => on_right(value),
        }
    }

    /// Runs one of two side effects.
    #[inline]
    pub fn do_with<F, G>(&self, on_left: F, on_right: G)
    where
        F: FnOnce(&L),
        G: FnOnce(&R),
    {
        match self {
            Self::Left(value) => on_left(value),
            Self::Right(value) => on_right(value),
        }
    }

    /// Swaps the sides, re-biasing towards the former right value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wrapt::control::Either;
    ///
    /// let right: Either<i32, &str> = Either::Right("hello");
    /// assert_eq!(right.swap().map(str::len), Either::Left(5));
    /// ```
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }

    /// Converts into a pair of `Option`s.
    #[inline]
    pub fn into_options(self) -> (Option<L>, Option<R>) {
        match self {
            Self::Left(value) => (Some(value), None),
            Self::Right(value) => (None, Some(value)),
        }
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Drops the right value.
    #[inline]
    pub fn to_maybe(self) -> Maybe<L> {
        self.match_with(Maybe::Just, |_| Maybe::Nothing)
    }

    /// Converts into an [`Outcome`] with the right value as error.
    #[inline]
    pub fn to_outcome(self) -> Outcome<L, R> {
        self.match_with(Outcome::Success, Outcome::Failure)
    }

    /// Converts into a [`Verdict`] carrying the right value's text.
    #[inline]
    pub fn to_verdict(self) -> Verdict<L>
    where
        R: fmt::Display,
    {
        self.match_with(Verdict::Success, |value| Verdict::Failure(value.to_string()))
    }

    /// Converts into an [`Attempt`], capturing the right value as the fault.
    #[inline]
    #[track_caller]
    pub fn to_attempt(self) -> Attempt<L>
    where
        R: Error + Send + Sync + 'static,
    {
        match self {
            Self::Left(value) => Attempt::Success(value),
            Self::Right(error) => Attempt::from_error(error),
        }
    }
}

impl<L, R> Either<Either<L, R>, R> {
    /// Removes one level of nesting; an outer right value wins.
    #[inline]
    pub fn flatten(self) -> Either<L, R> {
        self.bind(|inner| inner)
    }
}

impl<L: Default, R> Either<L, R> {
    /// Returns the left value, or default if this is a `Right`.
    #[inline]
    pub fn left_or_default(self) -> L {
        self.value_or_else(|_| L::default())
    }
}

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => write!(formatter, "Left({value})"),
            Self::Right(value) => write!(formatter, "Right({value})"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<L, R> From<Result<L, R>> for Either<L, R> {
    /// `Ok(l)` becomes `Left(l)` and `Err(r)` becomes `Right(r)`.
    #[inline]
    fn from(result: Result<L, R>) -> Self {
        match result {
            Ok(value) => Self::Left(value),
            Err(error) => Self::Right(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<L, R> {
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Ok(value),
            Either::Right(value) => Err(value),
        }
    }
}

// =============================================================================
// Kind
// =============================================================================

/// [`Kind`] marker for [`Either`] with right type `R`.
pub struct EitherKind<R>(PhantomData<fn() -> R>);

impl<R> Kind for EitherKind<R> {
    type Of<T> = Either<T, R>;

    #[inline]
    fn pure<T>(value: T) -> Either<T, R> {
        Either::Left(value)
    }

    #[inline]
    fn branch<A, B>(wrapped: Either<A, R>) -> Result<A, Either<B, R>> {
        match wrapped {
            Either::Left(value) => Ok(value),
            Either::Right(value) => Err(Either::Right(value)),
        }
    }

    #[inline]
    fn is_success<A>(wrapped: &Either<A, R>) -> bool {
        wrapped.is_left()
    }
}

impl<L, R> TypeConstructor for Either<L, R> {
    type Inner = L;
    type Kind = EitherKind<R>;

    #[inline]
    fn into_kind(self) -> Self {
        self
    }

    #[inline]
    fn from_kind(wrapped: Self) -> Self {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn bind_operates_on_left() {
        let value: Either<i32, String> = Either::Left(3);
        assert_eq!(value.bind(|n| Either::Left(n * 10)), Either::Left(30));
    }

    #[rstest]
    fn right_passes_through_unchanged() {
        let value: Either<i32, String> = Either::Right("kept".to_string());
        let mut called = false;
        let result = value.bind(|n| {
            called = true;
            Either::Left(n + 1)
        });
        assert!(!called);
        assert_eq!(result, Either::Right("kept".to_string()));
    }

    #[rstest]
    fn result_conversion_roundtrip() {
        let ok: Result<i32, String> = Ok(42);
        let either: Either<i32, String> = ok.into();
        assert_eq!(either, Either::Left(42));
        let result: Result<i32, String> = either.into();
        assert_eq!(result, Ok(42));

        let err: Result<i32, String> = Err("error".to_string());
        let either: Either<i32, String> = err.into();
        let result: Result<i32, String> = either.into();
        assert_eq!(result, Err("error".to_string()));
    }

    #[rstest]
    #[case(Either::Left(1), Either::Left(2), Either::Left(3))]
    #[case(Either::Right("a"), Either::Left(2), Either::Right("a"))]
    #[case(Either::Left(1), Either::Right("b"), Either::Right("b"))]
    #[case(Either::Right("a"), Either::Right("b"), Either::Right("a"))]
    fn zip_first_right_wins(
        #[case] first: Either<i32, &'static str>,
        #[case] second: Either<i32, &'static str>,
        #[case] expected: Either<i32, &'static str>,
    ) {
        assert_eq!(first.zip(second, |a, b| a + b), expected);
    }

    #[rstest]
    fn swap_twice_is_identity() {
        let value: Either<i32, &str> = Either::Right("x");
        assert_eq!(value.swap().swap(), value);
    }

    #[rstest]
    #[should_panic(expected = "called `Either::value()` on a `Right` value")]
    fn value_on_right_fails_fast() {
        let value: Either<i32, &str> = Either::Right("x");
        let _ = value.value();
    }

    #[rstest]
    fn eq_by_uses_side_comparers() {
        let first: Either<&str, i32> = Either::Left("Alpha");
        let second: Either<&str, i32> = Either::Left("alpha");
        assert!(first.eq_by(&second, |a, b| a.eq_ignore_ascii_case(b), |a, b| a == b));
        assert!(!first.eq_by(&Either::Right(1), |a, b| a == b, |a, b| a == b));
    }

    #[derive(Debug, PartialEq, thiserror::Error)]
    #[error("unknown region {0}")]
    struct RegionError(&'static str);

    #[rstest]
    fn value_or_throw_returns_left() {
        let value: Either<u16, RegionError> = Either::Left(443);
        assert_eq!(value.value_or_throw(), 443);
    }

    #[rstest]
    fn value_or_throw_raises_right_as_fault() {
        let value: Either<u16, RegionError> = Either::Right(RegionError("mars-1"));
        let caught = Attempt::catch(|| value.value_or_throw());
        assert_eq!(caught.fault().message(), "unknown region mars-1");
        assert_eq!(caught.fault().downcast_ref::<RegionError>(), Some(&RegionError("mars-1")));
        assert!(caught.fault().location().file().ends_with("either.rs"));
    }
}
