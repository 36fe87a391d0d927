//! # wrapt
//!
//! Immutable algebraic value wrappers for computations that may be absent,
//! may fail, or may carry one of two results, together with one uniform set
//! of combinators to compose them without manual branching.
//!
//! ## Overview
//!
//! - **Wrapper kinds** ([`control`]): [`Maybe`](control::Maybe),
//!   [`Attempt`](control::Attempt), [`Outcome`](control::Outcome),
//!   [`Either`](control::Either) and [`Verdict`](control::Verdict). Each is a
//!   two-state enum with `bind`, `map`, `zip`, `flatten`, `value_or*`,
//!   `match_with` and cross-kind conversions.
//! - **Type classes** ([`typeclass`]): Higher-Kinded Type emulation through a
//!   `Kind` marker per wrapper, `Functor`/`Monad` on values, N-ary
//!   `Applicative` combinators (`zip2`..`zip5`, `lift2`..`lift5`), and
//!   `Semigroup`/`Monoid`.
//! - **Sequence traversal** ([`sequence`]): deferred `collect`,
//!   `map_effectful`, `filter_effectful`, and `fold`/`reduce` with optional
//!   early termination, generic over every wrapper kind.
//!
//! ## Feature Flags
//!
//! - `sequence` (default): the sequence-traversal layer
//! - `tracing` (default): `tracing` diagnostics for fault capture/replay and
//!   traversal short-circuits
//! - `serde`: `Serialize`/`Deserialize` for `Maybe`, `Outcome`, `Either` and
//!   `Verdict`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use wrapt::prelude::*;
//!
//! let result = Maybe::of(2).bind(|x| Maybe::of(x * 3)).bind(|x| Maybe::of(x + 1));
//! assert_eq!(result, Maybe::of(7));
//!
//! let area = MaybeKind::lift2(|width: u32, height: u32| width * height);
//! assert_eq!(area(Maybe::of(3), Maybe::of(4)), Maybe::of(12));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports every wrapper, every type class, and (with the `sequence`
/// feature) the traversal functions.
///
/// # Usage
///
/// ```rust
/// use wrapt::prelude::*;
/// ```
pub mod prelude {
    pub use crate::control::*;
    #[cfg(feature = "sequence")]
    pub use crate::sequence::*;
    pub use crate::typeclass::*;
}

pub mod control;
#[cfg(feature = "sequence")]
pub mod sequence;
pub mod typeclass;
