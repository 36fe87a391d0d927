//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust does not support Higher-Kinded Types, so a wrapper such as
//! `Maybe<_>` cannot be named without its argument. This module splits the
//! abstraction in two:
//!
//! - [`Kind`] is implemented by a zero-sized marker per wrapper kind
//!   (`MaybeKind`, `OutcomeKind<E>`, ...). Its GAT `Of<T>` names the
//!   wrapper applied to `T`, and its methods are the primitives every
//!   combinator in the crate is derived from.
//! - [`TypeConstructor`] is implemented by the wrapper values themselves and
//!   leads back to their marker, so generic code can start from a value and
//!   still reach the kind-level operations.
//!
//! # Example
//!
//! ```rust
//! use wrapt::control::Maybe;
//! use wrapt::typeclass::{Apply, Kind, TypeConstructor};
//!
//! fn double<W>(wrapped: W) -> Apply<W::Kind, i32>
//! where
//!     W: TypeConstructor<Inner = i32>,
//! {
//!     <W::Kind as Kind>::fmap(wrapped.into_kind(), |value| value * 2)
//! }
//!
//! assert_eq!(double(Maybe::of(21)), Maybe::of(42));
//! assert_eq!(double(Maybe::<i32>::none()), Maybe::none());
//! ```

/// The wrapper of kind `K` applied to `T`.
///
/// `Apply<MaybeKind, i32>` is `Maybe<i32>`.
pub type Apply<K, T> = <K as Kind>::Of<T>;

/// A wrapper kind: a two-state type constructor with a success side.
///
/// Implementors only provide [`pure`](Kind::pure) and
/// [`branch`](Kind::branch). Everything else (`flat_map`, `fmap`,
/// `flatten`, the arity combinators and the sequence layer) is derived from
/// these two, which keeps the derived operations consistent across kinds.
///
/// # Laws
///
/// ```text
/// branch(pure(a))                         == Ok(a)
/// branch(w) == Err(s)  implies  flat_map(w, f) == s   // f is not called
/// ```
///
/// From these the monad laws for `flat_map`/`pure` follow.
pub trait Kind: Sized {
    /// The wrapper of this kind applied to `T`.
    type Of<T>: TypeConstructor<Kind = Self, Inner = T>;

    /// Lifts a value into the success state.
    fn pure<T>(value: T) -> Self::Of<T>;

    /// Splits a wrapper into its success value, or its failure state
    /// re-typed to `Of<B>`.
    ///
    /// The failure payload is moved, never rebuilt, so the original error
    /// propagates unchanged.
    ///
    /// # Errors
    ///
    /// Returns the absent/failed state of `Of<B>` when `wrapped` is not
    /// successful.
    fn branch<A, B>(wrapped: Self::Of<A>) -> Result<A, Self::Of<B>>;

    /// Sequences a dependent computation.
    ///
    /// `function` is called exactly once when `wrapped` is successful and
    /// never otherwise.
    #[inline]
    fn flat_map<A, B, F>(wrapped: Self::Of<A>, function: F) -> Self::Of<B>
    where
        F: FnOnce(A) -> Self::Of<B>,
    {
        match Self::branch::<A, B>(wrapped) {
            Ok(value) => function(value),
            Err(stopped) => stopped,
        }
    }

    /// Maps the success value, defined as `flat_map(|x| pure(function(x)))`.
    #[inline]
    fn fmap<A, B, F>(wrapped: Self::Of<A>, function: F) -> Self::Of<B>
    where
        F: FnOnce(A) -> B,
    {
        Self::flat_map::<A, B, _>(wrapped, |value| Self::pure(function(value)))
    }

    /// Removes one layer of nesting. An outer failure wins over an inner one.
    #[inline]
    fn flatten<A>(nested: Self::Of<Self::Of<A>>) -> Self::Of<A> {
        Self::flat_map::<Self::Of<A>, A, _>(nested, |inner| inner)
    }

    /// Returns `true` when `wrapped` is in the success state.
    fn is_success<A>(wrapped: &Self::Of<A>) -> bool;
}

/// A wrapper value that knows its [`Kind`].
///
/// For every wrapper, `Self` and `<Self::Kind as Kind>::Of<Self::Inner>` are
/// the same type. The two conversion methods are identities that let generic
/// code cross between the value view and the kind view.
///
/// # Example
///
/// ```rust
/// use wrapt::control::Outcome;
/// use wrapt::typeclass::TypeConstructor;
///
/// fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
/// assert_inner::<Outcome<i32, String>>();
/// ```
pub trait TypeConstructor: Sized {
    /// The success-side type this wrapper is applied to.
    type Inner;

    /// The marker for this wrapper's kind.
    type Kind: Kind;

    /// Views this value through its kind.
    fn into_kind(self) -> Apply<Self::Kind, Self::Inner>;

    /// Recovers the value view from the kind view.
    fn from_kind(wrapped: Apply<Self::Kind, Self::Inner>) -> Self;
}
