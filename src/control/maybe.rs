//! Maybe type - a value that may be absent.
//!
//! `Maybe<T>` is either `Just(T)` or `Nothing`. Absence carries no payload;
//! it is a legitimate terminal state rather than an error.
//!
//! Unlike the failure-carrying kinds, `Maybe` also forms a monoid through
//! [`Maybe::or_else`]: the first present value wins and `Nothing` is the
//! identity.
//!
//! # Examples
//!
//! ```rust
//! use wrapt::control::Maybe;
//!
//! let result = Maybe::of(2)
//!     .bind(|x| Maybe::of(x * 3))
//!     .bind(|x| Maybe::of(x + 1));
//! assert_eq!(result, Maybe::of(7));
//!
//! // Constructing from an absent value yields `Nothing`
//! let missing: Maybe<String> = Maybe::from(None);
//! assert_eq!(missing, Maybe::none());
//!
//! // First present value wins
//! assert_eq!(Maybe::none().or_else(Maybe::of(9)), Maybe::of(9));
//! assert_eq!(Maybe::of(1).or_else(Maybe::of(9)), Maybe::of(1));
//! ```

use std::error::Error;
use std::fmt;

use super::attempt::Attempt;
use super::either::Either;
use super::fault::Fault;
use super::outcome::Outcome;
use super::verdict::Verdict;
use crate::typeclass::{Kind, TypeConstructor};

/// A value that is either present (`Just`) or absent (`Nothing`).
///
/// All `Nothing` values are equal to each other, whatever `T` is.
///
/// # Examples
///
/// ```rust
/// use wrapt::control::Maybe;
///
/// let present = Maybe::of(42);
/// assert!(present.is_present());
/// assert_eq!(present.value_or(0), 42);
///
/// let absent: Maybe<i32> = Maybe::none();
/// assert_eq!(absent.value_or(0), 0);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<T> {
    /// No value.
    Nothing,
    /// A present value.
    Just(T),
}

impl<T> Maybe<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a present value.
    #[inline]
    pub const fn of(value: T) -> Self {
        Self::Just(value)
    }

    /// Returns the absent value.
    #[inline]
    pub const fn none() -> Self {
        Self::Nothing
    }

    /// Converts an `Option`, collapsing `None` into `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wrapt::control::Maybe;
    ///
    /// assert_eq!(Maybe::from_option(Some(3)), Maybe::of(3));
    /// assert_eq!(Maybe::<i32>::from_option(None), Maybe::none());
    /// ```
    #[inline]
    pub fn from_option(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Just(value),
            None => Self::Nothing,
        }
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Just(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    /// Returns a reference to the present value.
    ///
    /// # Panics
    ///
    /// Panics if the value is absent.
    #[inline]
    #[track_caller]
    pub fn value(&self) -> &T {
        match self {
            Self::Just(value) => value,
            Self::Nothing => panic!("called `Maybe::value()` on a `Nothing` value"),
        }
    }

    /// Returns the present value, consuming the maybe.
    ///
    /// # Panics
    ///
    /// Panics if the value is absent.
    #[inline]
    #[track_caller]
    pub fn into_value(self) -> T {
        match self {
            Self::Just(value) => value,
            Self::Nothing => panic!("called `Maybe::into_value()` on a `Nothing` value"),
        }
    }

    /// Converts `&Maybe<T>` into `Maybe<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Just(value) => Maybe::Just(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Returns `true` if the present value equals `expected`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wrapt::control::Maybe;
    ///
    /// assert!(Maybe::of(3).contains(&3));
    /// assert!(!Maybe::<i32>::none().contains(&3));
    /// ```
    #[inline]
    pub fn contains(&self, expected: &T) -> bool
    where
        T: PartialEq,
    {
        self.contains_by(expected, PartialEq::eq)
    }

    /// Returns `true` if the present value matches `expected` under `comparer`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wrapt::control::Maybe;
    ///
    /// let name = Maybe::of("Alice".to_string());
    /// assert!(name.contains_by(&"alice".to_string(), |a, b| a.eq_ignore_ascii_case(b)));
    /// ```
    #[inline]
    pub fn contains_by<F>(&self, expected: &T, comparer: F) -> bool
    where
        F: FnOnce(&T, &T) -> bool,
    {
        match self {
            Self::Just(value) => comparer(value, expected),
            Self::Nothing => false,
        }
    }

    /// Structural equality with an injected comparer for the present side.
    ///
    /// Two `Nothing` values are always equal.
    #[inline]
    pub fn eq_by<F>(&self, other: &Self, comparer: F) -> bool
    where
        F: FnOnce(&T, &T) -> bool,
    {
        match (self, other) {
            (Self::Just(left), Self::Just(right)) => comparer(left, right),
            (Self::Nothing, Self::Nothing) => true,
            _ => false,
        }
    }

    /// Returns an iterator over the present value (zero or one element).
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.as_ref().to_option().into_iter()
    }

    // =========================================================================
    // Core Algebra
    // =========================================================================

    /// Sequences a computation that may itself be absent.
    ///
    /// `function` runs exactly once if a value is present and never
    /// otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wrapt::control::Maybe;
    ///
    /// let half = |n: i32| if n % 2 == 0 { Maybe::of(n / 2) } else { Maybe::none() };
    /// assert_eq!(Maybe::of(8).bind(half).bind(half), Maybe::of(2));
    /// assert_eq!(Maybe::of(6).bind(half).bind(half), Maybe::none());
    /// ```
    #[inline]
    pub fn bind<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Just(value) => function(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Transforms the present value.
    #[inline]
    pub fn map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        self.bind(|value| Maybe::of(function(value)))
    }

    /// Combines with another maybe; absent if either is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wrapt::control::Maybe;
    ///
    /// assert_eq!(Maybe::of(2).zip(Maybe::of(3), |a, b| a + b), Maybe::of(5));
    /// assert_eq!(Maybe::of(2).zip(Maybe::<i32>::none(), |a, b| a + b), Maybe::none());
    /// ```
    #[inline]
    pub fn zip<U, R, F>(self, other: Maybe<U>, function: F) -> Maybe<R>
    where
        F: FnOnce(T, U) -> R,
    {
        self.bind(|value| other.map(|other_value| function(value, other_value)))
    }

    /// Keeps the value only if it satisfies `predicate`.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        self.bind(|value| if predicate(&value) { Self::Just(value) } else { Self::Nothing })
    }

    /// Returns `self` if present, otherwise `other`.
    ///
    /// This is the monoid operation: `Nothing` is both left and right
    /// identity and the operation is associative.
    #[inline]
    pub fn or_else(self, other: Self) -> Self {
        match self {
            Self::Just(_) => self,
            Self::Nothing => other,
        }
    }

    /// Returns `self` if present, otherwise the result of `alternative`.
    ///
    /// `alternative` is not called when a value is present.
    #[inline]
    pub fn or_else_with<F>(self, alternative: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Just(_) => self,
            Self::Nothing => alternative(),
        }
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Returns the present value or `default`.
    #[inline]
    pub fn value_or(self, default: T) -> T {
        self.value_or_else(|| default)
    }

    /// Returns the present value or computes one.
    #[inline]
    pub fn value_or_else<F>(self, factory: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Just(value) => value,
            Self::Nothing => factory(),
        }
    }

    /// Returns the present value or raises the error produced by `error`.
    ///
    /// This is an explicit throw boundary: the error is wrapped in a
    /// [`Fault`] and raised with [`Fault::rethrow`], so [`Attempt::catch`]
    /// recovers it as a failure.
    ///
    /// # Panics
    ///
    /// Panics (with a `Fault` payload) if the value is absent.
    #[inline]
    #[track_caller]
    pub fn value_or_throw<X, F>(self, error: F) -> T
    where
        X: Error + Send + Sync + 'static,
        F: FnOnce() -> X,
    {
        match self {
            Self::Just(value) => value,
            Self::Nothing => Fault::new(error()).rethrow(),
        }
    }

    /// Eliminates the maybe with one of two functions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wrapt::control::Maybe;
    ///
    /// let describe = |m: Maybe<i32>| m.match_with(|n| format!("got {n}"), || "nothing".to_string());
    /// assert_eq!(describe(Maybe::of(1)), "got 1");
    /// assert_eq!(describe(Maybe::none()), "nothing");
    /// ```
    #[inline]
    pub fn match_with<R, S, N>(self, on_just: S, on_nothing: N) -> R
    where
        S: FnOnce(T) -> R,
        N: FnOnce() -> R,
    {
        match self {
            Self::Just(value) => on_just(value),
            Self::Nothing => on_nothing(),
        }
    }

    /// Runs one of two side effects depending on presence.
    #[inline]
    pub fn do_with<S, N>(&self, on_just: S, on_nothing: N)
    where
        S: FnOnce(&T),
        N: FnOnce(),
    {
        match self {
            Self::Just(value) => on_just(value),
            Self::Nothing => on_nothing(),
        }
    }

    // =========================================================================
    // Conversions
    // =========================================================================

    /// Converts into an `Option`.
    #[inline]
    pub fn to_option(self) -> Option<T> {
        match self {
            Self::Just(value) => Some(value),
            Self::Nothing => None,
        }
    }

    /// Converts into an [`Outcome`], producing the error with `error` when
    /// absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wrapt::control::{Maybe, Outcome};
    ///
    /// let outcome: Outcome<i32, &str> = Maybe::of(3).to_outcome(|| "missing");
    /// assert_eq!(outcome, Outcome::success(3));
    /// assert_eq!(outcome.to_maybe(), Maybe::of(3));
    /// ```
    #[inline]
    pub fn to_outcome<E, F>(self, error: F) -> Outcome<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Just(value) => Outcome::Success(value),
            Self::Nothing => Outcome::Failure(error()),
        }
    }

    /// Converts into an [`Either`] with the present value on the left.
    #[inline]
    pub fn to_either<R, F>(self, right: F) -> Either<T, R>
    where
        F: FnOnce() -> R,
    {
        match self {
            Self::Just(value) => Either::Left(value),
            Self::Nothing => Either::Right(right()),
        }
    }

    /// Converts into a [`Verdict`], failing with `message` when absent.
    #[inline]
    pub fn to_verdict(self, message: impl Into<String>) -> Verdict<T> {
        match self {
            Self::Just(value) => Verdict::Success(value),
            Self::Nothing => Verdict::Failure(message.into()),
        }
    }

    /// Converts into an [`Attempt`], capturing the error from `error` when
    /// absent.
    #[inline]
    #[track_caller]
    pub fn to_attempt<X, F>(self, error: F) -> Attempt<T>
    where
        X: Error + Send + Sync + 'static,
        F: FnOnce() -> X,
    {
        match self {
            Self::Just(value) => Attempt::Success(value),
            Self::Nothing => Attempt::Failure(Fault::new(error())),
        }
    }
}

impl<T> Maybe<Maybe<T>> {
    /// Removes one level of nesting.
    #[inline]
    pub fn flatten(self) -> Maybe<T> {
        self.bind(|inner| inner)
    }
}

impl<T: Default> Maybe<T> {
    /// Returns the present value or `T::default()`.
    #[inline]
    pub fn value_or_default(self) -> T {
        self.value_or_else(T::default)
    }
}

impl<T> Default for Maybe<T> {
    #[inline]
    fn default() -> Self {
        Self::Nothing
    }
}

// =============================================================================
// Kind
// =============================================================================

/// [`Kind`] marker for [`Maybe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MaybeKind;

impl Kind for MaybeKind {
    type Of<T> = Maybe<T>;

    #[inline]
    fn pure<T>(value: T) -> Maybe<T> {
        Maybe::Just(value)
    }

    #[inline]
    fn branch<A, B>(wrapped: Maybe<A>) -> Result<A, Maybe<B>> {
        match wrapped {
            Maybe::Just(value) => Ok(value),
            Maybe::Nothing => Err(Maybe::Nothing),
        }
    }

    #[inline]
    fn is_success<A>(wrapped: &Maybe<A>) -> bool {
        wrapped.is_present()
    }
}

impl<T> TypeConstructor for Maybe<T> {
    type Inner = T;
    type Kind = MaybeKind;

    #[inline]
    fn into_kind(self) -> Self {
        self
    }

    #[inline]
    fn from_kind(wrapped: Self) -> Self {
        wrapped
    }
}

// =============================================================================
// Formatting
// =============================================================================

impl<T: fmt::Debug> fmt::Debug for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Just(value) => formatter.debug_tuple("Just").field(value).finish(),
            Self::Nothing => formatter.write_str("Nothing"),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Just(value) => write!(formatter, "Just({value})"),
            Self::Nothing => formatter.write_str("Nothing"),
        }
    }
}

// =============================================================================
// Conversions and Iteration
// =============================================================================

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(option: Option<T>) -> Self {
        Self::from_option(option)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.to_option()
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.to_option().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Maybe<T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn nothing_values_are_equal_for_any_payload_type() {
        assert_eq!(Maybe::<f64>::none(), Maybe::none());
        assert_eq!(Maybe::<Vec<String>>::default(), Maybe::none());
    }

    #[rstest]
    #[should_panic(expected = "called `Maybe::value()` on a `Nothing` value")]
    fn value_on_nothing_fails_fast() {
        let absent: Maybe<i32> = Maybe::none();
        let _ = absent.value();
    }

    #[rstest]
    fn or_else_with_is_lazy_when_present() {
        let mut called = false;
        let result = Maybe::of(1).or_else_with(|| {
            called = true;
            Maybe::of(2)
        });
        assert_eq!(result, Maybe::of(1));
        assert!(!called);
    }

    #[rstest]
    fn flatten_removes_one_layer() {
        assert_eq!(Maybe::of(Maybe::of(1)).flatten(), Maybe::of(1));
        assert_eq!(Maybe::of(Maybe::<i32>::none()).flatten(), Maybe::none());
        assert_eq!(Maybe::<Maybe<i32>>::none().flatten(), Maybe::none());
    }

    #[rstest]
    fn eq_by_uses_injected_comparer() {
        let left = Maybe::of("ABC");
        let right = Maybe::of("abc");
        assert!(left.eq_by(&right, |a, b| a.eq_ignore_ascii_case(b)));
        assert!(Maybe::<&str>::none().eq_by(&Maybe::none(), |_, _| false));
    }

    #[rstest]
    fn iteration_yields_zero_or_one_element() {
        assert_eq!(Maybe::of(4).into_iter().collect::<Vec<_>>(), vec![4]);
        assert_eq!(Maybe::<i32>::none().iter().count(), 0);
    }

    #[rstest]
    fn display_formats_both_states() {
        assert_eq!(Maybe::of(3).to_string(), "Just(3)");
        assert_eq!(Maybe::<i32>::none().to_string(), "Nothing");
    }
}
