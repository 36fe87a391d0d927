//! Wrapped left folds.
//!
//! `step` returns a wrapper, so the accumulator itself is wrapped. Once it
//! fails, `step` is no longer called; [`fold`] and [`reduce`] still pull the
//! rest of the source, while [`fold_while`] and [`reduce_while`] stop pulling
//! as soon as their predicate rejects the accumulator.

use super::error::EmptySequenceError;
use crate::typeclass::{Kind, TypeConstructor};

#[inline]
fn advance<A, W, T, F>(accumulator: W, item: T, step: &mut F) -> W
where
    W: TypeConstructor<Inner = A>,
    F: FnMut(A, T) -> W,
{
    match <W::Kind as Kind>::branch::<A, A>(accumulator.into_kind()) {
        Ok(value) => step(value, item),
        Err(stopped) => W::from_kind(stopped),
    }
}

/// Folds `source` from the left into a wrapped accumulator.
///
/// Every element is pulled from the source, even after the accumulator has
/// failed.
///
/// # Examples
///
/// ```rust
/// use wrapt::control::Outcome;
/// use wrapt::sequence::fold;
///
/// let total: Outcome<u32, String> = fold([10_u32, 20, 30], 0_u32, |sum, n| {
///     sum.checked_add(n).map_or_else(|| Outcome::from_error("overflow".into()), Outcome::success)
/// });
/// assert_eq!(total, Outcome::success(60));
/// ```
pub fn fold<I, A, W, F>(source: I, seed: A, mut step: F) -> W
where
    I: IntoIterator,
    W: TypeConstructor<Inner = A>,
    F: FnMut(A, I::Item) -> W,
{
    let mut accumulator = W::from_kind(<W::Kind as Kind>::pure(seed));
    for item in source {
        accumulator = advance(accumulator, item, &mut step);
    }
    accumulator
}

/// Folds `source` from the left while `continue_` accepts the accumulator.
///
/// `continue_` sees the wrapped accumulator before every step, before the
/// next element is pulled; the first `false` ends the fold and the rest of
/// the source is never pulled. Note that it inspects the accumulator, not
/// the upcoming element: a predicate that only looks at the failure case
/// can still stop a fold that never failed if it is written carelessly.
///
/// # Examples
///
/// ```rust
/// use wrapt::control::Maybe;
/// use wrapt::sequence::fold_while;
///
/// let partial = fold_while(
///     [1, 2, 3, 4, 5],
///     0,
///     |sum, n| Maybe::of(sum + n),
///     |sum| sum.is_present() && *sum.value() < 5,
/// );
/// assert_eq!(partial, Maybe::of(6));
/// ```
pub fn fold_while<I, A, W, F, P>(source: I, seed: A, mut step: F, mut continue_: P) -> W
where
    I: IntoIterator,
    W: TypeConstructor<Inner = A>,
    F: FnMut(A, I::Item) -> W,
    P: FnMut(&W) -> bool,
{
    let mut accumulator = W::from_kind(<W::Kind as Kind>::pure(seed));
    let mut iterator = source.into_iter();
    loop {
        if !continue_(&accumulator) {
            #[cfg(feature = "tracing")]
            tracing::trace!("fold_while stopped by predicate");
            return accumulator;
        }
        let Some(item) = iterator.next() else {
            return accumulator;
        };
        accumulator = advance(accumulator, item, &mut step);
    }
}

/// Folds `source` seeded from its first element.
///
/// # Errors
///
/// Returns [`EmptySequenceError`] when `source` has no elements.
///
/// # Examples
///
/// ```rust
/// use wrapt::control::Maybe;
/// use wrapt::sequence::{EmptySequenceError, reduce};
///
/// assert_eq!(reduce(vec![3, 4], |a, b| Maybe::of(a * b)), Ok(Maybe::of(12)));
/// assert_eq!(reduce(Vec::<i32>::new(), |a, b| Maybe::of(a * b)), Err(EmptySequenceError));
/// ```
pub fn reduce<I, W, F>(source: I, step: F) -> Result<W, EmptySequenceError>
where
    I: IntoIterator,
    W: TypeConstructor<Inner = I::Item>,
    F: FnMut(I::Item, I::Item) -> W,
{
    let mut iterator = source.into_iter();
    let first = iterator.next().ok_or(EmptySequenceError)?;
    Ok(fold(iterator, first, step))
}

/// [`reduce`] with the early-termination predicate of [`fold_while`].
///
/// # Errors
///
/// Returns [`EmptySequenceError`] when `source` has no elements.
pub fn reduce_while<I, W, F, P>(source: I, step: F, continue_: P) -> Result<W, EmptySequenceError>
where
    I: IntoIterator,
    W: TypeConstructor<Inner = I::Item>,
    F: FnMut(I::Item, I::Item) -> W,
    P: FnMut(&W) -> bool,
{
    let mut iterator = source.into_iter();
    let first = iterator.next().ok_or(EmptySequenceError)?;
    Ok(fold_while(iterator, first, step, continue_))
}
