//! `Unexpected`: the error-tagged holder.
//!
//! Wrapping an error payload in `Unexpected` is what lets an `Expected` be
//! built directly in its ERR state, even when the value and error types
//! coincide.

use super::Expected;
use crate::holder::{ErrorTag, Holder, Shape};

/// A holder of shape `E` tagged as an error.
///
/// ```
/// use vessel::{make_unexpected, Expected, Val};
///
/// let e: Expected<Val<i32>, Val<i32>> = make_unexpected::<Val<i32>>(3).into();
/// assert!(e.is_error());
/// assert_eq!(e.err(), Some(&3));
/// ```
pub type Unexpected<E> = Holder<E, ErrorTag>;

/// Builds an error holder.
#[inline(always)]
pub const fn make_unexpected<E: Shape>(storage: E::Storage) -> Unexpected<E> {
    Holder::new(storage)
}

impl<E: Shape> Holder<E, ErrorTag> {
    /// Moves this error into an `Expected` of any value shape.
    #[inline(always)]
    pub const fn into_expected<S: Shape>(self) -> Expected<S, E> {
        Expected::from_unexpected(self)
    }
}
