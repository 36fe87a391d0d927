//! Functor type class - mapping over the success side of a wrapper.
//!
//! `Functor` is blanket-implemented for every [`TypeConstructor`], so generic
//! code can map over any wrapper kind without knowing which one it holds.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use wrapt::control::{Maybe, Verdict};
//! use wrapt::typeclass::Functor;
//!
//! assert_eq!(Maybe::of(3).fmap(|x| x + 1), Maybe::of(4));
//! assert_eq!(Verdict::success("ab").fmap(str::len), Verdict::success(2));
//! ```

use super::higher::{Apply, Kind, TypeConstructor};

/// A wrapper whose success value can be transformed.
pub trait Functor: TypeConstructor {
    /// Applies `function` to the success value; failures pass through.
    #[inline]
    fn fmap<B, F>(self, function: F) -> Apply<Self::Kind, B>
    where
        F: FnOnce(Self::Inner) -> B,
    {
        <Self::Kind as Kind>::fmap::<Self::Inner, B, F>(self.into_kind(), function)
    }

    /// Replaces the success value with `value`.
    #[inline]
    fn replace<B>(self, value: B) -> Apply<Self::Kind, B> {
        self.fmap(|_| value)
    }

    /// Discards the success value.
    #[inline]
    fn void(self) -> Apply<Self::Kind, ()> {
        self.fmap(|_| ())
    }
}

impl<W: TypeConstructor> Functor for W {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::{Either, Maybe, Outcome};
    use rstest::rstest;

    #[rstest]
    fn fmap_maps_success() {
        assert_eq!(Outcome::<i32, String>::success(2).fmap(|x| x * 10), Outcome::success(20));
    }

    #[rstest]
    fn fmap_passes_failure_through() {
        let failed: Outcome<i32, &str> = Outcome::from_error("bad");
        assert_eq!(failed.fmap(|x| x * 10), Outcome::from_error("bad"));
    }

    #[rstest]
    fn replace_and_void_keep_the_discriminant() {
        assert_eq!(Maybe::of(1).replace("x"), Maybe::of("x"));
        assert_eq!(Maybe::<i32>::none().void(), Maybe::none());
        let right: Either<i32, &str> = Either::Right("other");
        assert_eq!(right.void(), Either::Right("other"));
    }
}
