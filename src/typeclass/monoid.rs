//! Monoid type class - semigroups with an identity element.
//!
//! # Laws
//!
//! ```text
//! empty().combine(a) == a            // left identity
//! a.combine(empty()) == a            // right identity
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use wrapt::control::Maybe;
//! use wrapt::typeclass::Monoid;
//!
//! let first = Maybe::combine_all(vec![Maybe::none(), Maybe::of(3), Maybe::of(4)]);
//! assert_eq!(first, Maybe::of(3));
//! ```

use super::semigroup::Semigroup;
use crate::control::{Maybe, Verdict};

/// A [`Semigroup`] with an identity element.
pub trait Monoid: Semigroup + Sized {
    /// The identity element for [`Semigroup::combine`].
    fn empty() -> Self;

    /// Combines every element from left to right, starting from
    /// [`Monoid::empty`].
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        iterator.into_iter().fold(Self::empty(), Self::combine)
    }

    /// Returns `true` if `self` equals the identity element.
    fn is_empty_value(&self) -> bool
    where
        Self: PartialEq,
    {
        *self == Self::empty()
    }
}

impl<T> Monoid for Maybe<T> {
    #[inline]
    fn empty() -> Self {
        Self::none()
    }
}

impl Monoid for Verdict {
    #[inline]
    fn empty() -> Self {
        Self::ok()
    }
}
