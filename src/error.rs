//! Checked-access failures.
//!
//! These are the only errors the crate reports. Everything else is either
//! infallible or an `unsafe` precondition.

use core::fmt;

/// `value()` was called on an empty [`Optional`](crate::Optional).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BadOptionAccess;

impl BadOptionAccess {
    /// The fixed message carried by every instance.
    pub const MESSAGE: &'static str = "bad access of empty Optional";
}

impl fmt::Display for BadOptionAccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(Self::MESSAGE)
    }
}

impl std::error::Error for BadOptionAccess {}

/// `value()` was called on an [`Expected`](crate::Expected) holding an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BadResultAccess;

impl BadResultAccess {
    /// The fixed message carried by every instance.
    pub const MESSAGE: &'static str = "bad access of Expected holding an error";
}

impl fmt::Display for BadResultAccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(Self::MESSAGE)
    }
}

impl std::error::Error for BadResultAccess {}
