//! `Unit`: a storable, comparable stand-in for "no payload".
//!
//! Every wrapper in the crate needs *something* to hold when the logical
//! payload is void. `Unit` is that something: zero-sized, trivially copyable,
//! and equal to every other `Unit`.

use core::fmt;

use serde::{Deserialize, Serialize};

/// The void-substitute value.
///
/// Any two instances compare equal and hash identically. A `Unit` can be
/// built from arbitrary arguments that are simply dropped, which mirrors a
/// function that receives input but reports nothing back.
///
/// # Examples
///
/// ```
/// use vessel::Unit;
///
/// let a = Unit::discard((1, "two", 3.0));
/// let b = Unit::default();
/// assert_eq!(a, b);
/// assert_eq!(Unit.produce::<i32>(), 0);
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Unit;

/// The canonical `Unit` instance.
pub const UNIT: Unit = Unit;

impl Unit {
    /// Creates a `Unit`, dropping `args`.
    #[inline(always)]
    pub fn discard<A>(_args: A) -> Self {
        Unit
    }

    /// Explicitly converts into the default value of `T`.
    #[inline(always)]
    pub fn produce<T: Default>(self) -> T {
        T::default()
    }
}

impl From<()> for Unit {
    #[inline(always)]
    fn from((): ()) -> Self {
        Unit
    }
}

impl From<Unit> for () {
    #[inline(always)]
    fn from(_: Unit) -> Self {}
}

impl fmt::Debug for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Unit")
    }
}
