//! Type class traits shared by every wrapper kind.
//!
//! - [`Kind`] / [`TypeConstructor`]: Higher-Kinded Type emulation; each
//!   wrapper kind implements `Kind` once through a marker type.
//! - [`Functor`], [`Monad`]: value-level mapping and sequencing, available on
//!   every wrapper.
//! - [`Applicative`]: N-ary `zip`/`lift` combinators on kind markers.
//! - [`Semigroup`], [`Monoid`]: associative combination with an identity.
//!
//! # Examples
//!
//! ```rust
//! use wrapt::control::{Maybe, MaybeKind};
//! use wrapt::typeclass::{Applicative, Monad, Monoid};
//!
//! let sum = MaybeKind::zip2(Maybe::of(1), Maybe::of(2), |a, b| a + b);
//! assert_eq!(sum.flat_map(|n| Maybe::of(n * 2)), Maybe::of(6));
//!
//! assert_eq!(Maybe::combine_all([Maybe::none(), Maybe::of(1)]), Maybe::of(1));
//! ```

mod applicative;
mod functor;
mod higher;
mod monad;
mod monoid;
mod semigroup;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::{Apply, Kind, TypeConstructor};
pub use monad::Monad;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
