//! Manually controlled storage.
//!
//! - `access` is the minimal, audited unsafe layer over `MaybeUninit`.
//! - [`Uninit`] is the public slot built on it.

pub(crate) mod access;
pub mod uninit;

pub use uninit::Uninit;

#[cfg(test)]
mod tests;
