//! Effectful traversals producing a wrapped vector.
//!
//! The `*_once` functions consume their source eagerly in a single pass.
//! [`collect`], [`map_effectful`] and [`filter_effectful`] wrap them in a
//! [`Deferred`] that re-runs the pass (cloning the source) every time it is
//! run.
//!
//! All three stop at the first failed element: later elements are never
//! pulled from the source, and the failure is returned unchanged.

use super::deferred::Deferred;
use crate::typeclass::{Apply, Kind, TypeConstructor};

/// Turns a sequence of wrapped values into a wrapped vector, in one pass.
///
/// # Examples
///
/// ```rust
/// use wrapt::control::Maybe;
/// use wrapt::sequence::collect_once;
///
/// assert_eq!(collect_once(vec![Maybe::of(1), Maybe::of(2)]), Maybe::of(vec![1, 2]));
/// assert_eq!(collect_once(vec![Maybe::of(1), Maybe::none()]), Maybe::none());
/// ```
pub fn collect_once<I, W>(source: I) -> Apply<W::Kind, Vec<W::Inner>>
where
    I: IntoIterator<Item = W>,
    W: TypeConstructor,
{
    let iterator = source.into_iter();
    let mut values = Vec::with_capacity(iterator.size_hint().0);
    for wrapped in iterator {
        match <W::Kind as Kind>::branch::<W::Inner, Vec<W::Inner>>(wrapped.into_kind()) {
            Ok(value) => values.push(value),
            Err(stopped) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(collected = values.len(), "collect short-circuited");
                return stopped;
            }
        }
    }
    <W::Kind as Kind>::pure(values)
}

/// Applies `function` to each element and collects the results, in one pass.
pub fn map_effectful_once<I, W, F>(source: I, function: F) -> Apply<W::Kind, Vec<W::Inner>>
where
    I: IntoIterator,
    W: TypeConstructor,
    F: FnMut(I::Item) -> W,
{
    collect_once(source.into_iter().map(function))
}

/// Keeps the elements whose wrapped predicate succeeded with `true`, in one
/// pass and in source order.
///
/// A failed predicate result ends the pass and is returned re-typed.
pub fn filter_effectful_once<I, W, P>(source: I, mut predicate: P) -> Apply<W::Kind, Vec<I::Item>>
where
    I: IntoIterator,
    W: TypeConstructor<Inner = bool>,
    P: FnMut(&I::Item) -> W,
{
    let mut kept = Vec::new();
    for item in source {
        match <W::Kind as Kind>::branch::<bool, Vec<I::Item>>(predicate(&item).into_kind()) {
            Ok(true) => kept.push(item),
            Ok(false) => {}
            Err(stopped) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(kept = kept.len(), "filter_effectful short-circuited");
                return stopped;
            }
        }
    }
    <W::Kind as Kind>::pure(kept)
}

/// Deferred [`collect_once`]: nothing is pulled from `source` until the
/// result is run.
///
/// # Examples
///
/// ```rust
/// use wrapt::control::Outcome;
/// use wrapt::sequence::collect;
///
/// let source = vec![Outcome::success(1), Outcome::from_error("bad row"), Outcome::success(3)];
/// let all = collect(source);
/// assert_eq!(all.run(), Outcome::<Vec<i32>, _>::from_error("bad row"));
/// ```
pub fn collect<S, W>(source: S) -> Deferred<impl Fn() -> Apply<W::Kind, Vec<W::Inner>>>
where
    S: IntoIterator<Item = W> + Clone,
    W: TypeConstructor,
{
    Deferred::new(move || collect_once(source.clone()))
}

/// Deferred [`map_effectful_once`]: `function` is not called until the
/// result is run, and is called again on every run.
///
/// # Examples
///
/// ```rust
/// use wrapt::control::Maybe;
/// use wrapt::sequence::map_effectful;
///
/// let parsed = map_effectful(["1", "2", "3"], |text| Maybe::from_option(text.parse::<i32>().ok()));
/// assert_eq!(parsed.run(), Maybe::of(vec![1, 2, 3]));
/// ```
pub fn map_effectful<S, W, F>(
    source: S,
    function: F,
) -> Deferred<impl Fn() -> Apply<W::Kind, Vec<W::Inner>>>
where
    S: IntoIterator + Clone,
    W: TypeConstructor,
    F: Fn(S::Item) -> W,
{
    Deferred::new(move || map_effectful_once(source.clone(), &function))
}

/// Deferred [`filter_effectful_once`].
///
/// # Examples
///
/// ```rust
/// use wrapt::control::Verdict;
/// use wrapt::sequence::filter_effectful;
///
/// let even = filter_effectful(vec![1, 2, 3, 4], |n| Verdict::success(n % 2 == 0));
/// assert_eq!(even.run(), Verdict::success(vec![2, 4]));
/// ```
pub fn filter_effectful<S, W, P>(
    source: S,
    predicate: P,
) -> Deferred<impl Fn() -> Apply<W::Kind, Vec<S::Item>>>
where
    S: IntoIterator + Clone,
    W: TypeConstructor<Inner = bool>,
    P: Fn(&S::Item) -> W,
{
    Deferred::new(move || filter_effectful_once(source.clone(), &predicate))
}
