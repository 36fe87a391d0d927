//! The five wrapper kinds.
//!
//! - [`Maybe`]: a value that may be absent
//! - [`Attempt`]: a value or a captured, replayable [`Fault`]
//! - [`Outcome`]: a value or a domain error of a caller-chosen type
//! - [`Either`]: a left-biased sum of two types
//! - [`Verdict`]: a success or a failure message, optionally with a value
//!
//! Every wrapper has a zero-sized [`Kind`](crate::typeclass::Kind) marker
//! (`MaybeKind`, `AttemptKind`, ...) through which the generic arity and
//! sequence layers operate.
//!
//! # Examples
//!
//! ```rust
//! use wrapt::control::{Maybe, Outcome};
//!
//! let user_id = Maybe::of(7);
//! let lookup: Outcome<&str, String> = user_id
//!     .to_outcome(|| "no user id".to_string())
//!     .bind(|id| if id == 7 { Outcome::success("alice") } else { Outcome::from_error(format!("unknown {id}")) });
//!
//! assert_eq!(lookup, Outcome::success("alice"));
//! ```

mod attempt;
mod either;
mod fault;
mod maybe;
mod outcome;
mod verdict;

pub use attempt::{Attempt, AttemptKind};
pub use either::{Either, EitherKind};
pub use fault::{Fault, PanicError};
pub use maybe::{Maybe, MaybeKind};
pub use outcome::{Outcome, OutcomeKind};
pub use verdict::{Verdict, VerdictError, VerdictKind};
