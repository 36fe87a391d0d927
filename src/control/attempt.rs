//! Attempt type - a computation that succeeded or captured a fault.
//!
//! `Attempt<T>` is `Success(T)` or `Failure(Fault)`. The failure side holds
//! a [`Fault`], a replayable record of the original error, rather than a
//! domain error value.
//!
//! There are exactly two boundaries between panics and values:
//!
//! - [`Attempt::catch`] runs a closure and captures a panic as a failure.
//! - [`Attempt::value_or_throw`] / [`Fault::rethrow`] raise the captured
//!   fault again.
//!
//! Everywhere else (`bind`, `map`, `zip`, ...) a failure is an ordinary
//! returned value.
//!
//! # Examples
//!
//! ```rust
//! use wrapt::control::Attempt;
//!
//! let parsed: Attempt<i32> = "42".parse::<i32>().into();
//! assert_eq!(parsed.map(|n| n + 1), Attempt::success(43));
//!
//! let failed: Attempt<i32> = "x".parse::<i32>().into();
//! assert!(failed.is_failure());
//! ```

use std::error::Error;
use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};

use super::either::Either;
use super::fault::Fault;
use super::maybe::Maybe;
use super::outcome::Outcome;
use super::verdict::Verdict;
use crate::typeclass::{Kind, TypeConstructor};

/// A success value, or the [`Fault`] that prevented it.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Attempt<T> {
    /// The computation produced a value.
    Success(T),
    /// The computation failed; the fault can be replayed.
    Failure(Fault),
}

impl<T> Attempt<T> {
    /// Wraps a successful value.
    #[inline]
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Captures `error` as a failure.
    #[inline]
    #[track_caller]
    pub fn from_error<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::Failure(Fault::new(error))
    }

    /// Wraps an existing fault without re-capturing it.
    #[inline]
    pub const fn from_failure(fault: Fault) -> Self {
        Self::Failure(fault)
    }

    /// Converts an `Option`, capturing the error from `error` for `None`.
    #[inline]
    #[track_caller]
    pub fn from_option<X, F>(option: Option<T>, error: F) -> Self
    where
        X: Error + Send + Sync + 'static,
        F: FnOnce() -> X,
    {
        Maybe::from_option(option).to_attempt(error)
    }

    /// Runs `computation`, capturing a panic as a failure.
    ///
    /// A panic raised by [`Fault::rethrow`] is recovered as that same fault.
    /// For any other panic the fault's [`location`](Fault::location) is the
    /// call site of `catch`; the panic's own location is only reported by
    /// the panic hook.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wrapt::control::Attempt;
    ///
    /// let ok = Attempt::catch(|| 1 + 1);
    /// assert_eq!(ok, Attempt::success(2));
    ///
    /// let failed: Attempt<i32> = Attempt::catch(|| panic!("boom"));
    /// assert_eq!(failed.fault().message(), "boom");
    /// ```
    #[track_caller]
    pub fn catch<F>(computation: F) -> Self
    where
        F: FnOnce() -> T,
    {
        match catch_unwind(AssertUnwindSafe(computation)) {
            Ok(value) => Self::Success(value),
            Err(payload) => {
                let fault = Fault::from_panic(payload);
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    type_name = fault.type_name(),
                    message = fault.message(),
                    "captured panic as fault"
                );
                Self::Failure(fault)
            }
        }
    }

    /// Runs a fallible computation, capturing both its error and any panic.
    ///
    /// A returned error is recorded with the caller of `catch_result` as its
    /// origin.
    #[track_caller]
    pub fn catch_result<E, F>(computation: F) -> Self
    where
        E: Error + Send + Sync + 'static,
        F: FnOnce() -> Result<T, E>,
    {
        match Attempt::catch(computation) {
            Attempt::Success(Ok(value)) => Self::Success(value),
            Attempt::Success(Err(error)) => Self::Failure(Fault::new(error)),
            Attempt::Failure(fault) => Self::Failure(fault),
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
            Self::Failure(_) => panic!("called `Attempt::value()` on a `Failure` value"),
        }
    }

    /// Returns a reference to the captured fault.
    ///
    /// # Panics
    ///
    /// Panics if this is a success.
    #[inline]
    #[track_caller]
    pub fn fault(&self) -> &Fault {
        match self {
            Self::Success(_) => panic!("called `Attempt::fault()` on a `Success` value"),
            Self::Failure(fault) => fault,
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

    /// Sequences a dependent computation; a failure propagates the same fault.
    #[inline]
    pub fn bind<U, F>(self, function: F) -> Attempt<U>
    where
        F: FnOnce(T) -> Attempt<U>,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(fault) => Attempt::Failure(fault),
        }
    }

    /// Transforms the success value.
    #[inline]
    pub fn map<U, F>(self, function: F) -> Attempt<U>
    where
        F: FnOnce(T) -> U,
    {
        self.bind(|value| Attempt::Success(function(value)))
    }

    /// Combines with another attempt; the first failure wins.
    #[inline]
    pub fn zip<U, R, F>(self, other: Attempt<U>, function: F) -> Attempt<R>
    where
        F: FnOnce(T, U) -> R,
    {
        self.bind(|value| other.map(|other_value| function(value, other_value)))
    }

    /// Fails with the error from `error` unless `predicate` holds.
    #[inline]
    #[track_caller]
    pub fn ensure<X, P, F>(self, predicate: P, error: F) -> Self
    where
        X: Error + Send + Sync + 'static,
        P: FnOnce(&T) -> bool,
        F: FnOnce(&T) -> X,
    {
        match self {
            Self::Success(value) if !predicate(&value) => Self::from_error(error(&value)),
            other => other,
        }
    }

    /// Returns the success value or `default`.
    #[inline]
    pub fn value_or(self, default: T) -> T {
        self.value_or_else(|_| default)
    }

    /// Returns the success value or computes one from the fault.
    #[inline]
    pub fn value_or_else<F>(self, factory: F) -> T
    where
        F: FnOnce(Fault) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(fault) => factory(fault),
        }
    }

    /// Returns the success value or replays the captured fault.
    ///
    /// # Panics
    ///
    /// Panics with the original [`Fault`] as payload if this is a failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wrapt::control::Attempt;
    ///
    /// let failed: Attempt<i32> = Attempt::catch(|| panic!("first"));
    /// let token = failed.fault().clone();
    ///
    /// let replayed: Attempt<i32> = Attempt::catch(|| failed.value_or_throw());
    /// assert!(replayed.fault().is_same_token(&token));
    /// ```
    #[inline]
    pub fn value_or_throw(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(fault) => fault.rethrow(),
        }
    }

    /// Eliminates the attempt with one of two functions.
    #[inline]
    pub fn match_with<R, S, E>(self, on_success: S, on_failure: E) -> R
    where
        S: FnOnce(T) -> R,
        E: FnOnce(Fault) -> R,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(fault) => on_failure(fault),
        }
    }

    /// Runs one of two side effects.
    #[inline]
    pub fn do_with<S, E>(&self, on_success: S, on_failure: E)
    where
        S: FnOnce(&T),
        E: FnOnce(&Fault),
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(fault) => on_failure(fault),
        }
    }

    /// Converts into a `Result`, so `?` can propagate the fault.
    ///
    /// # Errors
    ///
    /// Returns the captured fault for a failure.
    #[inline]
    pub fn into_result(self) -> Result<T, Fault> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(fault) => Err(fault),
        }
    }

    /// Drops the fault.
    #[inline]
    pub fn to_maybe(self) -> Maybe<T> {
        self.match_with(Maybe::Just, |_| Maybe::Nothing)
    }

    /// Converts into an [`Outcome`] whose error is the fault.
    #[inline]
    pub fn to_outcome(self) -> Outcome<T, Fault> {
        self.to_outcome_with(|fault| fault)
    }

    /// Converts into an [`Outcome`], projecting the fault to a domain error.
    #[inline]
    pub fn to_outcome_with<E, F>(self, projection: F) -> Outcome<T, E>
    where
        F: FnOnce(Fault) -> E,
    {
        self.match_with(Outcome::Success, |fault| Outcome::Failure(projection(fault)))
    }

    /// Converts into an [`Either`] with the success value on the left.
    #[inline]
    pub fn to_either(self) -> Either<T, Fault> {
        self.match_with(Either::Left, Either::Right)
    }

    /// Converts into a [`Verdict`] carrying the fault's message.
    #[inline]
    pub fn to_verdict(self) -> Verdict<T> {
        self.match_with(Verdict::Success, |fault| Verdict::Failure(fault.message().to_string()))
    }
}

impl<T> Attempt<Attempt<T>> {
    /// Removes one level of nesting; the outer failure wins.
    #[inline]
    pub fn flatten(self) -> Attempt<T> {
        self.bind(|inner| inner)
    }
}

impl<T, E> From<Result<T, E>> for Attempt<T>
where
    E: Error + Send + Sync + 'static,
{
    #[track_caller]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::from_error(error),
        }
    }
}

impl<T> From<Attempt<T>> for Result<T, Fault> {
    #[inline]
    fn from(attempt: Attempt<T>) -> Self {
        attempt.into_result()
    }
}

impl<T: fmt::Debug> fmt::Debug for Attempt<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => formatter.debug_tuple("Success").field(value).finish(),
            Self::Failure(fault) => formatter.debug_tuple("Failure").field(fault).finish(),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Attempt<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => write!(formatter, "Success({value})"),
            Self::Failure(fault) => write!(formatter, "Failure({fault})"),
        }
    }
}

/// [`Kind`] marker for [`Attempt`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AttemptKind;

impl Kind for AttemptKind {
    type Of<T> = Attempt<T>;

    #[inline]
    fn pure<T>(value: T) -> Attempt<T> {
        Attempt::Success(value)
    }

    #[inline]
    fn branch<A, B>(wrapped: Attempt<A>) -> Result<A, Attempt<B>> {
        match wrapped {
            Attempt::Success(value) => Ok(value),
            Attempt::Failure(fault) => Err(Attempt::Failure(fault)),
        }
    }

    #[inline]
    fn is_success<A>(wrapped: &Attempt<A>) -> bool {
        wrapped.is_success()
    }
}

impl<T> TypeConstructor for Attempt<T> {
    type Inner = T;
    type Kind = AttemptKind;

    #[inline]
    fn into_kind(self) -> Self {
        self
    }

    #[inline]
    fn from_kind(wrapped: Self) -> Self {
        wrapped
    }
}
