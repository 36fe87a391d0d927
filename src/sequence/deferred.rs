//! Deferred, re-runnable traversals.
//!
//! A [`Deferred`] holds a traversal that has been described but not run.
//! Building one never touches the source sequence or calls user functions;
//! every [`Deferred::run`] performs a fresh pass, and nothing is memoized
//! between passes.

use std::fmt;

/// A traversal that runs only when asked to, once per [`run`](Self::run).
///
/// # Examples
///
/// ```rust
/// use std::cell::Cell;
/// use wrapt::sequence::Deferred;
///
/// let calls = Cell::new(0);
/// let deferred = Deferred::new(|| {
///     calls.set(calls.get() + 1);
///     calls.get()
/// });
/// assert_eq!(calls.get(), 0);
///
/// assert_eq!(deferred.run(), 1);
/// assert_eq!(deferred.run(), 2);
/// ```
#[must_use = "a deferred traversal does nothing until it is run"]
pub struct Deferred<F> {
    producer: F,
}

impl<F> Deferred<F> {
    /// Wraps `producer` without calling it.
    #[inline]
    pub const fn new(producer: F) -> Self {
        Self { producer }
    }

    /// Runs the traversal from the start and returns its result.
    #[inline]
    pub fn run<R>(&self) -> R
    where
        F: Fn() -> R,
    {
        (self.producer)()
    }

    /// Consumes the deferred traversal and runs it once.
    #[inline]
    pub fn into_run<R>(self) -> R
    where
        F: FnOnce() -> R,
    {
        (self.producer)()
    }
}

impl<F> fmt::Debug for Deferred<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Deferred").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn new_does_not_call_producer() {
        let called = Cell::new(false);
        let _deferred = Deferred::new(|| called.set(true));
        assert!(!called.get());
    }

    #[rstest]
    fn into_run_calls_once() {
        let deferred = Deferred::new(|| vec![1, 2]);
        assert_eq!(deferred.into_run(), vec![1, 2]);
    }

    #[rstest]
    fn debug_hides_producer() {
        let deferred = Deferred::new(|| 0);
        assert_eq!(format!("{deferred:?}"), "Deferred { .. }");
    }
}
