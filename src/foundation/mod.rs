//! Leaf utilities the wrappers are built from.
//!
//! - [`Unit`]: the void-substitute value.
//! - [`Null`]: the absence marker.
//! - [`hash_combine`] / [`digest`]: hash mixing for multi-state wrappers.

pub mod hash;
pub(crate) mod log;
pub mod null;
pub mod unit;

pub use hash::{digest, hash_combine};
pub use null::{Null, NULL};
pub use unit::{Unit, UNIT};

#[cfg(test)]
mod tests;
