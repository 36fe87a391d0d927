//! Verdict type - a lightweight success-or-message outcome.
//!
//! `Verdict<T = ()>` is `Success(T)` or `Failure(String)`. The plain
//! `Verdict` (with `T = ()`) is a status flag with a reason, which is what
//! most validation code needs; `Verdict<T>` additionally carries a value.
//!
//! # Examples
//!
//! ```rust
//! use wrapt::control::Verdict;
//! use wrapt::typeclass::Monoid;
//!
//! fn check_name(name: &str) -> Verdict {
//!     Verdict::require(!name.is_empty(), "name is empty")
//! }
//!
//! fn check_age(age: i32) -> Verdict {
//!     Verdict::require(age >= 0, "age is negative")
//! }
//!
//! let verdict = Verdict::combine_all([check_name(""), check_age(-1)]);
//! assert_eq!(verdict.message(), "name is empty; age is negative");
//! ```

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::attempt::Attempt;
use super::either::Either;
use super::fault::Fault;
use super::maybe::Maybe;
use super::outcome::Outcome;
use crate::typeclass::{Kind, TypeConstructor};

/// The error raised when a failed [`Verdict`] is thrown.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct VerdictError {
    /// The verdict's failure message.
    pub message: String,
}

/// A success (optionally carrying a value) or a failure message.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Verdict<T = ()> {
    /// The check passed.
    Success(T),
    /// The check failed for the given reason.
    Failure(String),
}

impl Verdict {
    /// Separator between messages when failures are combined.
    pub const MESSAGE_SEPARATOR: &'static str = "; ";

    /// The value-less success.
    #[inline]
    pub const fn ok() -> Self {
        Self::Success(())
    }

    /// Succeeds when `condition` holds, otherwise fails with `message`.
    #[inline]
    pub fn require(condition: bool, message: impl Into<String>) -> Self {
        if condition { Self::ok() } else { Self::failure(message) }
    }
}

impl<T> Verdict<T> {
    /// Wraps a successful value.
    #[inline]
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Fails with `message`.
    #[inline]
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure(message.into())
    }

    /// Converts an `Option`, failing with `message` for `None`.
    #[inline]
    pub fn from_option(option: Option<T>, message: impl Into<String>) -> Self {
        Maybe::from_option(option).to_verdict(message)
    }

    /// Returns `true` for a success.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` for a failure.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Returns a reference to the success value.
    ///
    /// # Panics
    ///
    /// Panics if this is a failure.
    #[inline]
    #[track_caller]
    pub fn value(&self) -> &T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => panic!("called `Verdict::value()` on a `Failure` value"),
        }
    }

    /// Returns the failure message.
    ///
    /// # Panics
    ///
    /// Panics if this is a success.
    #[inline]
    #[track_caller]
    pub fn message(&self) -> &str {
        match self {
            Self::Success(_) => panic!("called `Verdict::message()` on a `Success` value"),
            Self::Failure(message) => message,
        }
    }

    /// Returns `true` if the success value equals `expected`.
    #[inline]
    pub fn contains(&self, expected: &T) -> bool
    where
        T: PartialEq,
    {
        self.contains_by(expected, PartialEq::eq)
    }

    /// Returns `true` if the success value matches `expected` under `comparer`.
    #[inline]
    pub fn contains_by<F>(&self, expected: &T, comparer: F) -> bool
    where
        F: FnOnce(&T, &T) -> bool,
    {
        match self {
            Self::Success(value) => comparer(value, expected),
            Self::Failure(_) => false,
        }
    }

    /// Sequences a dependent check; the message propagates unchanged.
    #[inline]
    pub fn bind<U, F>(self, function: F) -> Verdict<U>
    where
        F: FnOnce(T) -> Verdict<U>,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(message) => Verdict::Failure(message),
        }
    }

    /// Transforms the success value.
    #[inline]
    pub fn map<U, F>(self, function: F) -> Verdict<U>
    where
        F: FnOnce(T) -> U,
    {
        self.bind(|value| Verdict::Success(function(value)))
    }

    /// Rewrites the failure message.
    #[inline]
    pub fn map_error<F>(self, function: F) -> Self
    where
        F: FnOnce(String) -> String,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(message) => Self::Failure(function(message)),
        }
    }

    /// Combines two successes; the first failure wins.
    #[inline]
    pub fn zip<U, R, F>(self, other: Verdict<U>, function: F) -> Verdict<R>
    where
        F: FnOnce(T, U) -> R,
    {
        self.bind(|value| other.map(|other_value| function(value, other_value)))
    }

    /// Fails with the message from `message` unless `predicate` holds.
    #[inline]
    pub fn ensure<P, F>(self, predicate: P, message: F) -> Self
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce(&T) -> String,
    {
        match self {
            Self::Success(value) if !predicate(&value) => Self::Failure(message(&value)),
            other => other,
        }
    }

    /// Returns the success value or `default`.
    #[inline]
    pub fn value_or(self, default: T) -> T {
        self.value_or_else(|_| default)
    }

    /// Returns the success value or computes one from the message.
    #[inline]
    pub fn value_or_else<F>(self, factory: F) -> T
    where
        F: FnOnce(String) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(message) => factory(message),
        }
    }

    /// Returns the success value or raises a [`VerdictError`] as a [`Fault`].
    ///
    /// # Panics
    ///
    /// Panics with a `Fault` payload if this is a failure.
    #[inline]
    #[track_caller]
    pub fn value_or_throw(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(message) => Fault::new(VerdictError { message }).rethrow(),
        }
    }

    /// Eliminates the verdict with one of two functions.
    #[inline]
    pub fn match_with<R, S, F>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(String) -> R,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(message) => on_failure(message),
        }
    }

    /// Runs one of two side effects.
    #[inline]
    pub fn do_with<S, F>(&self, on_success: S, on_failure: F)
    where
        S: FnOnce(&T),
        F: FnOnce(&str),
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(message) => on_failure(message),
        }
    }

    /// Drops the message.
    #[inline]
    pub fn to_maybe(self) -> Maybe<T> {
        self.match_with(Maybe::Just, |_| Maybe::Nothing)
    }

    /// Converts into an [`Outcome`] whose error is the message.
    #[inline]
    pub fn to_outcome(self) -> Outcome<T, String> {
        self.match_with(Outcome::Success, Outcome::Failure)
    }

    /// Converts into an [`Outcome`], projecting the message to a domain error.
    #[inline]
    pub fn to_outcome_with<E, F>(self, projection: F) -> Outcome<T, E>
    where
        F: FnOnce(String) -> E,
    {
        self.match_with(Outcome::Success, |message| Outcome::Failure(projection(message)))
    }

    /// Converts into an [`Either`] with the success value on the left.
    #[inline]
    pub fn to_either(self) -> Either<T, String> {
        self.match_with(Either::Left, Either::Right)
    }

    /// Converts into an [`Attempt`], capturing a [`VerdictError`].
    #[inline]
    #[track_caller]
    pub fn to_attempt(self) -> Attempt<T> {
        match self {
            Self::Success(value) => Attempt::Success(value),
            Self::Failure(message) => Attempt::from_error(VerdictError { message }),
        }
    }
}

impl<T> Verdict<Verdict<T>> {
    /// Removes one level of nesting; the outer failure wins.
    #[inline]
    pub fn flatten(self) -> Verdict<T> {
        self.bind(|inner| inner)
    }
}

impl<T: fmt::Debug> fmt::Debug for Verdict<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => formatter.debug_tuple("Success").field(value).finish(),
            Self::Failure(message) => formatter.debug_tuple("Failure").field(message).finish(),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Verdict<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => write!(formatter, "Success({value})"),
            Self::Failure(message) => write!(formatter, "Failure({message})"),
        }
    }
}

/// [`Kind`] marker for [`Verdict`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct VerdictKind;

impl Kind for VerdictKind {
    type Of<T> = Verdict<T>;

    #[inline]
    fn pure<T>(value: T) -> Verdict<T> {
        Verdict::Success(value)
    }

    #[inline]
    fn branch<A, B>(wrapped: Verdict<A>) -> Result<A, Verdict<B>> {
        match wrapped {
            Verdict::Success(value) => Ok(value),
            Verdict::Failure(message) => Err(Verdict::Failure(message)),
        }
    }

    #[inline]
    fn is_success<A>(wrapped: &Verdict<A>) -> bool {
        wrapped.is_success()
    }
}

impl<T> TypeConstructor for Verdict<T> {
    type Inner = T;
    type Kind = VerdictKind;

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
    #[case(true, Verdict::ok())]
    #[case(false, Verdict::failure("too short"))]
    fn require_maps_condition(#[case] condition: bool, #[case] expected: Verdict) {
        assert_eq!(Verdict::require(condition, "too short"), expected);
    }

    #[rstest]
    fn bind_keeps_first_message() {
        let failed: Verdict<i32> = Verdict::failure("missing id");
        assert_eq!(failed.bind(|id| Verdict::success(id + 1)), Verdict::failure("missing id"));
    }

    #[rstest]
    fn value_or_throw_raises_verdict_error() {
        let failed: Verdict<i32> = Verdict::failure("rejected");
        let caught = Attempt::catch(|| failed.value_or_throw());
        assert_eq!(
            caught.fault().downcast_ref::<VerdictError>(),
            Some(&VerdictError { message: "rejected".to_string() })
        );
    }

    #[rstest]
    fn map_error_prefixes_message() {
        let failed: Verdict = Verdict::failure("empty");
        assert_eq!(failed.map_error(|m| format!("name: {m}")).message(), "name: empty");
    }

    #[rstest]
    #[should_panic(expected = "called `Verdict::message()` on a `Success` value")]
    fn message_on_success_fails_fast() {
        let _ = Verdict::ok().message();
    }
}
