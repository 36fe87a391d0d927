//! Applicative combinators over 2 to 5 wrapped operands.
//!
//! This module provides the `Applicative` trait, blanket-implemented for
//! every [`Kind`]. It offers three families of operations:
//!
//! - `zip2`..`zip5`: combine already-built wrapped values with a function.
//! - `zip2_with`..`zip5_with`: the same, but every operand is a thunk that is
//!   only called when all operands to its left succeeded.
//! - `lift2`..`lift5`: turn a plain N-ary function into one over N wrapped
//!   values.
//!
//! Only `zip2_with` is written by hand. Every higher arity is generated as
//!
//! ```text
//! zipN_with(first, rest.., f) == flat_map(first(), |a| zip(N-1)_with(rest.., |rest..| f(a, rest..)))
//! ```
//!
//! so the evaluation order is strictly left to right and the first failed
//! operand decides the result.
//!
//! # Examples
//!
//! ```rust
//! use wrapt::control::{Maybe, MaybeKind};
//! use wrapt::typeclass::Applicative;
//!
//! let sum = MaybeKind::zip3(Maybe::of(1), Maybe::of(2), Maybe::of(3), |a, b, c| a + b + c);
//! assert_eq!(sum, Maybe::of(6));
//!
//! let add = MaybeKind::lift2(|a: i32, b: i32| a + b);
//! assert_eq!(add(Maybe::of(1), Maybe::none()), Maybe::none());
//! ```

use super::higher::Kind;

/// Generates `zipN_with` from `zip(N-1)_with`, plus the eager `zipN` and
/// `liftN` on top of it.
macro_rules! derive_arity {
    (
        $zip_with:ident, $zip:ident, $lift:ident, $previous:ident;
        $head:ident: $Head:ident, $($tail:ident: $Tail:ident),+
    ) => {
        /// Combines lazily evaluated operands from left to right.
        ///
        /// An operand thunk is only called when every operand to its left
        /// succeeded; the first failure is returned unchanged.
        #[inline]
        fn $zip_with<$Head, $($Tail,)+ R>(
            $head: impl FnOnce() -> Self::Of<$Head>,
            $($tail: impl FnOnce() -> Self::Of<$Tail>,)+
            function: impl FnOnce($Head, $($Tail),+) -> R,
        ) -> Self::Of<R> {
            Self::flat_map::<$Head, R, _>($head(), move |$head| {
                Self::$previous::<$($Tail,)+ R>($($tail,)+ move |$($tail),+| function($head, $($tail),+))
            })
        }

        /// Combines wrapped operands from left to right with `function`.
        #[inline]
        fn $zip<$Head, $($Tail,)+ R>(
            $head: Self::Of<$Head>,
            $($tail: Self::Of<$Tail>,)+
            function: impl FnOnce($Head, $($Tail),+) -> R,
        ) -> Self::Of<R> {
            Self::$zip_with::<$Head, $($Tail,)+ R>(move || $head, $(move || $tail,)+ function)
        }

        /// Lifts a plain function to one over wrapped operands.
        #[inline]
        fn $lift<$Head, $($Tail,)+ R>(
            function: impl Fn($Head, $($Tail),+) -> R,
        ) -> impl Fn(Self::Of<$Head>, $(Self::Of<$Tail>),+) -> Self::Of<R> {
            move |$head, $($tail),+| {
                Self::$zip::<$Head, $($Tail,)+ R>($head, $($tail,)+ |$head, $($tail),+| function($head, $($tail),+))
            }
        }
    };
}

/// N-ary combinators derived from [`Kind::flat_map`] and [`Kind::fmap`].
///
/// Every [`Kind`] implements this trait; call the methods on the kind
/// marker, e.g. `OutcomeKind::<String>::zip3(..)`.
///
/// # Examples
///
/// ```rust
/// use wrapt::control::{Outcome, OutcomeKind};
/// use wrapt::typeclass::Applicative;
///
/// let failed = OutcomeKind::<&str>::zip2(
///     Outcome::<i32, &str>::from_error("boom"),
///     Outcome::success(5),
///     |a, b| a + b,
/// );
/// assert_eq!(failed, Outcome::from_error("boom"));
/// ```
pub trait Applicative: Kind {
    /// Combines two lazily evaluated operands.
    ///
    /// `second` is never called when `first()` fails.
    #[inline]
    fn zip2_with<A, B, R>(
        first: impl FnOnce() -> Self::Of<A>,
        second: impl FnOnce() -> Self::Of<B>,
        function: impl FnOnce(A, B) -> R,
    ) -> Self::Of<R> {
        Self::flat_map::<A, R, _>(first(), move |first| {
            Self::fmap::<B, R, _>(second(), move |second| function(first, second))
        })
    }

    /// Combines two wrapped operands with `function`.
    #[inline]
    fn zip2<A, B, R>(
        first: Self::Of<A>,
        second: Self::Of<B>,
        function: impl FnOnce(A, B) -> R,
    ) -> Self::Of<R> {
        Self::zip2_with::<A, B, R>(move || first, move || second, function)
    }

    /// Lifts a binary function to one over wrapped operands.
    #[inline]
    fn lift2<A, B, R>(
        function: impl Fn(A, B) -> R,
    ) -> impl Fn(Self::Of<A>, Self::Of<B>) -> Self::Of<R> {
        move |first, second| {
            Self::zip2::<A, B, R>(first, second, |first, second| function(first, second))
        }
    }

    /// Pairs two wrapped operands.
    #[inline]
    fn product<A, B>(first: Self::Of<A>, second: Self::Of<B>) -> Self::Of<(A, B)> {
        Self::zip2::<A, B, (A, B)>(first, second, |first, second| (first, second))
    }

    derive_arity!(zip3_with, zip3, lift3, zip2_with; first: A, second: B, third: C);
    derive_arity!(zip4_with, zip4, lift4, zip3_with; first: A, second: B, third: C, fourth: D);
    derive_arity!(
        zip5_with, zip5, lift5, zip4_with;
        first: A, second: B, third: C, fourth: D, fifth: E
    );
}

impl<K: Kind> Applicative for K {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::{Maybe, MaybeKind, Outcome, OutcomeKind};
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn zip2_combines_successes() {
        assert_eq!(MaybeKind::zip2(Maybe::of(2), Maybe::of(3), |a, b| a * b), Maybe::of(6));
    }

    #[rstest]
    #[case(Maybe::none(), Maybe::of(2))]
    #[case(Maybe::of(1), Maybe::none())]
    #[case(Maybe::none(), Maybe::none())]
    fn zip2_is_absent_when_any_operand_is_absent(#[case] first: Maybe<i32>, #[case] second: Maybe<i32>) {
        assert_eq!(MaybeKind::zip2(first, second, |a, b| a + b), Maybe::none());
    }

    #[rstest]
    fn zip5_passes_arguments_in_order() {
        let result = MaybeKind::zip5(
            Maybe::of('a'),
            Maybe::of('b'),
            Maybe::of('c'),
            Maybe::of('d'),
            Maybe::of('e'),
            |a, b, c, d, e| [a, b, c, d, e].iter().collect::<String>(),
        );
        assert_eq!(result, Maybe::of("abcde".to_string()));
    }

    #[rstest]
    fn zip4_with_reports_leftmost_failure_and_skips_the_rest() {
        let fourth_evaluated = Cell::new(false);
        let result = OutcomeKind::<&str>::zip4_with(
            || Outcome::success(1),
            || Outcome::from_error("second"),
            || Outcome::<i32, _>::from_error("third"),
            || {
                fourth_evaluated.set(true);
                Outcome::success(4)
            },
            |a: i32, b: i32, c, d| a + b + c + d,
        );
        assert_eq!(result, Outcome::from_error("second"));
        assert!(!fourth_evaluated.get());
    }

    #[rstest]
    fn lift3_applies_plain_function() {
        let volume = MaybeKind::lift3(|x: i32, y: i32, z: i32| x * y * z);
        assert_eq!(volume(Maybe::of(2), Maybe::of(3), Maybe::of(4)), Maybe::of(24));
        assert_eq!(volume(Maybe::of(2), Maybe::none(), Maybe::of(4)), Maybe::none());
    }

    #[rstest]
    fn product_pairs_values() {
        assert_eq!(MaybeKind::product(Maybe::of(1), Maybe::of("a")), Maybe::of((1, "a")));
    }
}
