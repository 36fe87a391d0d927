//! Errors raised by the sequence layer.

/// Returned by `reduce`/`reduce_while` when the source has no elements.
///
/// This is API misuse, not an absent value: there is no first element to
/// seed the accumulator with, so no wrapped result exists at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[error("cannot reduce an empty sequence")]
pub struct EmptySequenceError;
