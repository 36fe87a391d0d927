//! Outcome type - a success value or a domain error.
//!
//! `Outcome<T, E>` is the dual-outcome wrapper: `Success(T)` or
//! `Failure(E)`, where `E` is a caller-defined error value. It mirrors
//! `Result<T, E>` (and converts to and from it losslessly) while sharing the
//! vocabulary of the other wrappers in this crate: `bind`, `map`, `zip`,
//! `value_or*`, `match_with` and the cross-kind conversions.
//!
//! # Examples
//!
//! ```rust
//! use wrapt::control::Outcome;
//!
//! fn parse_port(text: &str) -> Outcome<u16, String> {
//!     text.parse::<u16>().map_err(|error| error.to_string()).into()
//! }
//!
//! assert_eq!(parse_port("8080").map(|port| port + 1), Outcome::success(8081));
//! assert!(parse_port("eighty").is_failure());
//! ```

use std::error::Error;
use std::fmt;
use std::marker::PhantomData;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::attempt::Attempt;
use super::either::Either;
use super::fault::Fault;
use super::maybe::Maybe;
use super::verdict::Verdict;
use crate::typeclass::{Kind, TypeConstructor};

/// A success value or a domain error of type `E`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Outcome<T, E> {
    /// The computation produced a value.
    Success(T),
    /// The computation failed with a domain error.
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    /// Wraps a successful value.
    #[inline]
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Wraps a domain error.
    #[inline]
    pub const fn from_error(error: E) -> Self {
        Self::Failure(error)
    }

    /// Converts an `Option`, using `error` for `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wrapt::control::Outcome;
    ///
    /// let missing: Outcome<i32, &str> = Outcome::from_option(None, || "not found");
    /// assert_eq!(missing, Outcome::from_error("not found"));
    /// ```
    #[inline]
    pub fn from_option<F>(option: Option<T>, error: F) -> Self
    where
        F: FnOnce() -> E,
    {
        match option {
            Some(value) => Self::Success(value),
            None => Self::Failure(error()),
        }
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
            Self::Failure(_) => panic!("called `Outcome::value()` on a `Failure` value"),
        }
    }

    /// Returns a reference to the domain error.
    ///
    /// # Panics
    ///
    /// Panics if this is a success.
    #[inline]
    #[track_caller]
    pub fn error(&self) -> &E {
        match self {
            Self::Success(_) => panic!("called `Outcome::error()` on a `Success` value"),
            Self::Failure(error) => error,
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

    /// Compares two outcomes with injected comparers for each side.
    #[inline]
    pub fn eq_by<F, G>(&self, other: &Self, value_comparer: F, error_comparer: G) -> bool
    where
        F: FnOnce(&T, &T) -> bool,
        G: FnOnce(&E, &E) -> bool,
    {
        match (self, other) {
            (Self::Success(value), Self::Success(other)) => value_comparer(value, other),
            (Self::Failure(error), Self::Failure(other)) => error_comparer(error, other),
            _ => false,
        }
    }

    /// Sequences a dependent computation; the error propagates unchanged.
    #[inline]
    pub fn bind<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Transforms the success value.
    #[inline]
    pub fn map<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        self.bind(|value| Outcome::Success(function(value)))
    }

    /// Transforms the domain error.
    #[inline]
    pub fn map_error<X, F>(self, function: F) -> Outcome<T, X>
    where
        F: FnOnce(E) -> X,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(function(error)),
        }
    }

    /// Combines two successes; the first failure wins.
    #[inline]
    pub fn zip<U, R, F>(self, other: Outcome<U, E>, function: F) -> Outcome<R, E>
    where
        F: FnOnce(T, U) -> R,
    {
        self.bind(|value| other.map(|other_value| function(value, other_value)))
    }

    /// Fails with the error from `error` unless `predicate` holds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wrapt::control::Outcome;
    ///
    /// let age: Outcome<u32, String> = Outcome::success(12);
    /// let adult = age.ensure(|n| *n >= 18, |n| format!("{n} is under age"));
    /// assert_eq!(adult, Outcome::from_error("12 is under age".to_string()));
    /// ```
    #[inline]
    pub fn ensure<P, F>(self, predicate: P, error: F) -> Self
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce(&T) -> E,
    {
        match self {
            Self::Success(value) if !predicate(&value) => Self::Failure(error(&value)),
            other => other,
        }
    }

    /// Replaces a failure with the outcome computed from its error.
    #[inline]
    pub fn recover<F>(self, function: F) -> Self
    where
        F: FnOnce(E) -> Self,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(error) => function(error),
        }
    }

    /// Returns the success value or `default`.
    #[inline]
    pub fn value_or(self, default: T) -> T {
        self.value_or_else(|_| default)
    }

    /// Returns the success value or computes one from the error.
    #[inline]
    pub fn value_or_else<F>(self, factory: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => factory(error),
        }
    }

    /// Returns the success value or raises the error as a [`Fault`].
    ///
    /// # Panics
    ///
    /// Panics with a `Fault` payload wrapping the error if this is a failure;
    /// [`Attempt::catch`] recovers it.
    #[inline]
    #[track_caller]
    pub fn value_or_throw(self) -> T
    where
        E: Error + Send + Sync + 'static,
    {
        self.value_or_throw_with(|error| error)
    }

    /// Returns the success value or raises the projected error as a [`Fault`].
    ///
    /// # Panics
    ///
    /// Panics with a `Fault` payload if this is a failure.
    #[inline]
    #[track_caller]
    pub fn value_or_throw_with<X, F>(self, projection: F) -> T
    where
        X: Error + Send + Sync + 'static,
        F: FnOnce(E) -> X,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => Fault::new(projection(error)).rethrow(),
        }
    }

    /// Eliminates the outcome with one of two functions.
    #[inline]
    pub fn match_with<R, S, F>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(E) -> R,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(error) => on_failure(error),
        }
    }

    /// Runs one of two side effects.
    #[inline]
    pub fn do_with<S, F>(&self, on_success: S, on_failure: F)
    where
        S: FnOnce(&T),
        F: FnOnce(&E),
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(error) => on_failure(error),
        }
    }

    /// Converts into a `Result`.
    ///
    /// # Errors
    ///
    /// Returns the domain error for a failure.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        self.match_with(Ok, Err)
    }

    /// Drops the error.
    #[inline]
    pub fn to_maybe(self) -> Maybe<T> {
        self.match_with(Maybe::Just, |_| Maybe::Nothing)
    }

    /// Converts into an [`Either`] with the success value on the left.
    #[inline]
    pub fn to_either(self) -> Either<T, E> {
        self.match_with(Either::Left, Either::Right)
    }

    /// Converts into a [`Verdict`] carrying the error's text.
    #[inline]
    pub fn to_verdict(self) -> Verdict<T>
    where
        E: fmt::Display,
    {
        self.to_verdict_with(|error| error.to_string())
    }

    /// Converts into a [`Verdict`], projecting the error to a message.
    #[inline]
    pub fn to_verdict_with<F>(self, projection: F) -> Verdict<T>
    where
        F: FnOnce(E) -> String,
    {
        self.match_with(Verdict::Success, |error| Verdict::Failure(projection(error)))
    }

    /// Converts into an [`Attempt`], capturing the error as a [`Fault`].
    #[inline]
    #[track_caller]
    pub fn to_attempt(self) -> Attempt<T>
    where
        E: Error + Send + Sync + 'static,
    {
        self.to_attempt_with(|error| error)
    }

    /// Converts into an [`Attempt`], capturing the projected error.
    #[inline]
    #[track_caller]
    pub fn to_attempt_with<X, F>(self, projection: F) -> Attempt<T>
    where
        X: Error + Send + Sync + 'static,
        F: FnOnce(E) -> X,
    {
        match self {
            Self::Success(value) => Attempt::Success(value),
            Self::Failure(error) => Attempt::from_error(projection(error)),
        }
    }
}

impl<T, E> Outcome<Outcome<T, E>, E> {
    /// Removes one level of nesting; the outer failure wins.
    #[inline]
    pub fn flatten(self) -> Outcome<T, E> {
        self.bind(|inner| inner)
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}

impl<T: fmt::Debug, E: fmt::Debug> fmt::Debug for Outcome<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => formatter.debug_tuple("Success").field(value).finish(),
            Self::Failure(error) => formatter.debug_tuple("Failure").field(error).finish(),
        }
    }
}

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Outcome<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => write!(formatter, "Success({value})"),
            Self::Failure(error) => write!(formatter, "Failure({error})"),
        }
    }
}

/// [`Kind`] marker for [`Outcome`] with error type `E`.
pub struct OutcomeKind<E>(PhantomData<fn() -> E>);

impl<E> Kind for OutcomeKind<E> {
    type Of<T> = Outcome<T, E>;

    #[inline]
    fn pure<T>(value: T) -> Outcome<T, E> {
        Outcome::Success(value)
    }

    #[inline]
    fn branch<A, B>(wrapped: Outcome<A, E>) -> Result<A, Outcome<B, E>> {
        match wrapped {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(Outcome::Failure(error)),
        }
    }

    #[inline]
    fn is_success<A>(wrapped: &Outcome<A, E>) -> bool {
        wrapped.is_success()
    }
}

impl<T, E> TypeConstructor for Outcome<T, E> {
    type Inner = T;
    type Kind = OutcomeKind<E>;

    #[inline]
    fn into_kind(self) -> Self {
        self
    }

    #[inline]
    fn from_kind(wrapped: Self) -> Self {
        wrapped
    }
}
