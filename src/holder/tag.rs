//! Phantom tags giving holders distinct identities.
//!
//! A tag is any type used only as the `Tag` parameter of
//! [`Holder`](crate::Holder). It is never instantiated and has no runtime
//! representation. Two holders with the same shape but different tags are
//! different types: they cannot be assigned, compared or converted into one
//! another without [`Holder::retag`](crate::Holder::retag).
//!
//! Callers can mint their own:
//!
//! ```
//! use vessel::{Holder, Val};
//!
//! enum Meters {}
//! enum Feet {}
//!
//! let a: Holder<Val<f64>, Meters> = Holder::new(3.0);
//! let b: Holder<Val<f64>, Feet> = Holder::new(3.0);
//! // a == b does not compile.
//! assert_eq!(a.into_inner(), b.into_inner());
//! ```

/// Default tag: an ordinary value.
#[derive(Debug)]
pub enum ValueTag {}

/// Marks a holder as carrying an error payload.
#[derive(Debug)]
pub enum ErrorTag {}
