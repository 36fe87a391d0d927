//! Captured failure tokens.
//!
//! A [`Fault`] records an error at the moment it happened (the error itself,
//! its type name, its message and the source location that captured it) so
//! that it can be inspected or raised again later. Raising a fault never
//! re-runs the computation that produced it: the same token travels as the
//! panic payload and is recovered unchanged by [`Attempt::catch`]. Replays
//! run the panic hook, so an uncaught fault still ends its thread loudly.
//!
//! [`Attempt::catch`]: super::Attempt::catch

use std::any::Any;
use std::error::Error;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::panic::Location;
use std::sync::Arc;

/// The error recorded when a panic without a `Fault` payload is captured.
///
/// # Examples
///
/// ```rust
/// use wrapt::control::{Attempt, PanicError};
///
/// let attempt: Attempt<i32> = Attempt::catch(|| panic!("disk on fire"));
/// let fault = attempt.fault();
/// assert_eq!(fault.message(), "disk on fire");
/// assert!(fault.downcast_ref::<PanicError>().is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct PanicError {
    /// The panic message, or `"unknown panic"` for non-string payloads.
    pub message: String,
}

struct FaultRecord {
    type_name: &'static str,
    message: String,
    location: &'static Location<'static>,
    source: Box<dyn Error + Send + Sync + 'static>,
}

/// An opaque, replayable record of a failure.
///
/// Cloning a `Fault` shares the same record; the captured error is never
/// copied. Equality and hashing use the error's type name and message.
///
/// # Examples
///
/// ```rust
/// use std::num::ParseIntError;
/// use wrapt::control::Fault;
///
/// let error = "x".parse::<i32>().unwrap_err();
/// let fault = Fault::new(error.clone());
/// assert_eq!(fault.message(), error.to_string());
/// assert!(fault.type_name().ends_with("ParseIntError"));
/// assert_eq!(fault.downcast_ref::<ParseIntError>(), Some(&error));
/// ```
#[derive(Clone)]
pub struct Fault {
    record: Arc<FaultRecord>,
}

static_assertions::assert_impl_all!(Fault: Send, Sync, Clone);

impl Fault {
    /// Captures `error`, recording the caller's location as its origin.
    #[track_caller]
    pub fn new<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self {
            record: Arc::new(FaultRecord {
                type_name: std::any::type_name::<E>(),
                message: error.to_string(),
                location: Location::caller(),
                source: Box::new(error),
            }),
        }
    }

    /// Converts a panic payload into a fault.
    ///
    /// A payload that already is a `Fault` (raised by [`Fault::rethrow`]) is
    /// returned as-is, so the original token survives the round trip.
    /// Any other payload becomes a [`PanicError`].
    #[track_caller]
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        match payload.downcast::<Self>() {
            Ok(fault) => *fault,
            Err(payload) => {
                let message = if let Some(text) = payload.downcast_ref::<&str>() {
                    (*text).to_string()
                } else if let Some(text) = payload.downcast_ref::<String>() {
                    text.clone()
                } else {
                    "unknown panic".to_string()
                };
                Self::new(PanicError { message })
            }
        }
    }

    /// The type name of the captured error.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.record.type_name
    }

    /// The captured error's message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.record.message
    }

    /// Where the error was captured.
    ///
    /// For a panic captured by [`Attempt::catch`](super::Attempt::catch)
    /// this is the call site of `catch`, not the `panic!` itself.
    #[inline]
    pub fn location(&self) -> &'static Location<'static> {
        self.record.location
    }

    /// Returns the captured error if it is of type `E`.
    #[inline]
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: Error + 'static,
    {
        self.record.source.downcast_ref::<E>()
    }

    /// Returns `true` if both values are the same captured token, not merely
    /// equal diagnostics.
    #[inline]
    pub fn is_same_token(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.record, &other.record)
    }

    /// Raises this fault as a panic whose payload is the fault itself.
    ///
    /// The panic goes through [`std::panic::panic_any`], so the panic hook
    /// runs at the caller's location and an uncaught replay is reported like
    /// any other panic. A custom hook can downcast the payload to `Fault` to
    /// print the original message. With the `tracing` feature, the type
    /// name, message and origin are also emitted at `warn` level.
    ///
    /// The payload is this exact token; nothing is re-run.
    #[track_caller]
    pub fn rethrow(self) -> ! {
        #[cfg(feature = "tracing")]
        tracing::warn!(
            type_name = self.type_name(),
            message = self.message(),
            origin = %self.location(),
            "replaying captured fault"
        );
        std::panic::panic_any(self)
    }
}

impl PartialEq for Fault {
    fn eq(&self, other: &Self) -> bool {
        self.is_same_token(other)
            || (self.record.type_name == other.record.type_name
                && self.record.message == other.record.message)
    }
}

impl Eq for Fault {}

impl Hash for Fault {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.record.type_name.hash(state);
        self.record.message.hash(state);
    }
}

impl fmt::Debug for Fault {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Fault")
            .field("type_name", &self.record.type_name)
            .field("message", &self.record.message)
            .field("location", &self.record.location)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.record.message)
    }
}

impl Error for Fault {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.record.source.as_ref())
    }
}
