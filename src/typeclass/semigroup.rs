//! Semigroup type class - types with an associative binary operation.
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of type `T`:
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use wrapt::control::Maybe;
//! use wrapt::typeclass::Semigroup;
//!
//! // First present value wins
//! assert_eq!(Maybe::of(1).combine(Maybe::of(2)), Maybe::of(1));
//! assert_eq!(Maybe::none().combine(Maybe::of(2)), Maybe::of(2));
//! ```

use crate::control::{Maybe, Verdict};

/// A type class for types with an associative binary operation.
///
/// # Laws
///
/// ## Associativity
///
/// For all `a`, `b`, `c`:
/// ```text
/// (a.combine(b)).combine(c) == a.combine(b.combine(c))
/// ```
pub trait Semigroup {
    /// Combines two values into one.
    ///
    /// This operation must be associative.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines two values by reference, returning a new value.
    ///
    /// The default implementation clones both values and calls `combine`.
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }
}

// =============================================================================
// Maybe<T> Implementation
// =============================================================================

impl<T> Semigroup for Maybe<T> {
    /// First-present-wins: `Just(a).combine(_) == Just(a)`.
    #[inline]
    fn combine(self, other: Self) -> Self {
        self.or_else(other)
    }
}

// =============================================================================
// Verdict<()> Implementation
// =============================================================================

impl Semigroup for Verdict {
    /// Succeeds when both succeed; otherwise keeps every failure message in
    /// order, joined by `"; "`.
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Self::Success(()), Self::Success(())) => Self::Success(()),
            (Self::Failure(message), Self::Success(()))
            | (Self::Success(()), Self::Failure(message)) => Self::Failure(message),
            (Self::Failure(first), Self::Failure(second)) => {
                Self::Failure(format!("{first}{}{second}", Self::MESSAGE_SEPARATOR))
            }
        }
    }
}
