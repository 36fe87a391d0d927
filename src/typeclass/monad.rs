//! Monad type class - sequencing computations within a wrapper.
//!
//! `Monad` is blanket-implemented for every [`TypeConstructor`]; its
//! operations delegate to the wrapper's [`Kind`].
//!
//! # Laws
//!
//! ```text
//! pure(a).flat_map(f)             == f(a)                          // left identity
//! m.flat_map(pure)                == m                             // right identity
//! m.flat_map(f).flat_map(g)       == m.flat_map(|x| f(x).flat_map(g))  // associativity
//! ```
//!
//! # Examples
//!
//! ```rust
//! use wrapt::control::Maybe;
//! use wrapt::typeclass::Monad;
//!
//! fn parse_positive(text: &str) -> Maybe<i32> {
//!     Maybe::from(text.parse::<i32>().ok()).filter(|number| *number > 0)
//! }
//!
//! let result = Maybe::of("42").flat_map(parse_positive).flat_map(|n| Maybe::of(n * 2));
//! assert_eq!(result, Maybe::of(84));
//! ```

use super::functor::Functor;
use super::higher::{Apply, Kind};

/// A wrapper that supports dependent sequencing.
pub trait Monad: Functor {
    /// Applies `function` to the success value and flattens the result.
    ///
    /// A failure propagates unchanged and `function` is not called.
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Apply<Self::Kind, B>
    where
        F: FnOnce(Self::Inner) -> Apply<Self::Kind, B>,
    {
        <Self::Kind as Kind>::flat_map::<Self::Inner, B, F>(self.into_kind(), function)
    }

    /// Sequences `next` after `self`, discarding the success value of `self`.
    #[inline]
    fn then<B>(self, next: Apply<Self::Kind, B>) -> Apply<Self::Kind, B> {
        self.flat_map(|_| next)
    }
}

impl<W: Functor> Monad for W {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::{Maybe, Verdict};
    use rstest::rstest;

    #[rstest]
    fn flat_map_chains_successes() {
        let result = Maybe::of(2).flat_map(|x| Maybe::of(x * 3)).flat_map(|x| Maybe::of(x + 1));
        assert_eq!(result, Maybe::of(7));
    }

    #[rstest]
    fn then_keeps_first_failure() {
        let failed: Verdict<i32> = Verdict::failure("first");
        assert_eq!(failed.then(Verdict::success("next")), Verdict::failure("first"));
    }

    #[rstest]
    fn then_returns_next_on_success() {
        assert_eq!(Maybe::of(1).then(Maybe::of("next")), Maybe::of("next"));
    }
}
