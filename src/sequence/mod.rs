//! Traversals over sequences, generic in the wrapper kind.
//!
//! Every function here works with any wrapper from [`crate::control`]: the
//! wrapper returned by the user's function (or held by the source) decides
//! the result kind.
//!
//! - [`collect`], [`map_effectful`], [`filter_effectful`] build a
//!   [`Deferred`] that traverses the source each time it is run.
//! - [`collect_once`], [`map_effectful_once`], [`filter_effectful_once`] do a
//!   single eager pass, for sources that cannot be cloned.
//! - [`fold`], [`fold_while`], [`reduce`], [`reduce_while`] accumulate from
//!   the left.
//!
//! # Examples
//!
//! ```rust
//! use wrapt::control::Outcome;
//! use wrapt::sequence::{fold, map_effectful};
//!
//! let parsed = map_effectful(vec!["4", "x", "6"], |text: &str| {
//!     Outcome::from(text.parse::<i32>().map_err(|_| format!("not a number: {text}")))
//! });
//! assert_eq!(parsed.run(), Outcome::from_error("not a number: x".to_string()));
//!
//! let total: Outcome<i32, String> = fold(vec![4, 5, 6], 0, |sum, n| Outcome::success(sum + n));
//! assert_eq!(total, Outcome::success(15));
//! ```

mod deferred;
mod error;
mod fold;
mod traverse;

pub use deferred::Deferred;
pub use error::EmptySequenceError;
pub use fold::{fold, fold_while, reduce, reduce_while};
pub use traverse::{
    collect, collect_once, filter_effectful, filter_effectful_once, map_effectful,
    map_effectful_once,
};
