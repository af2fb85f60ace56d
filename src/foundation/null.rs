//! `Null`: the absence marker.

use core::{cmp::Ordering, fmt, ptr};

use serde::{Deserialize, Serialize};

/// A stateless marker meaning "nothing here".
///
/// `Null` converts to a null raw pointer of any pointee type, to
/// `Option::None`, and to the empty state of [`Optional`](crate::Optional).
///
/// ```
/// use vessel::{Null, Optional, Val, NULL};
///
/// let p: *const u8 = NULL.into();
/// assert!(p.is_null());
///
/// let o: Optional<Val<i32>> = Null.into();
/// assert!(!o.has_value());
/// assert_eq!(o, NULL);
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Null;

/// The canonical `Null` instance.
pub const NULL: Null = Null;

impl Null {
    /// A null const pointer to `T`.
    #[inline(always)]
    pub const fn ptr<T>(self) -> *const T {
        ptr::null()
    }

    /// A null mut pointer to `T`.
    #[inline(always)]
    pub const fn ptr_mut<T>(self) -> *mut T {
        ptr::null_mut()
    }

    /// `None` of any `Option`.
    #[inline(always)]
    pub const fn none<T>(self) -> Option<T> {
        None
    }
}

impl<T> From<Null> for *const T {
    #[inline(always)]
    fn from(null: Null) -> Self {
        null.ptr()
    }
}

impl<T> From<Null> for *mut T {
    #[inline(always)]
    fn from(null: Null) -> Self {
        null.ptr_mut()
    }
}

impl<T> PartialEq<Option<T>> for Null {
    #[inline]
    fn eq(&self, other: &Option<T>) -> bool {
        other.is_none()
    }
}

impl<T> PartialOrd<Option<T>> for Null {
    #[inline]
    fn partial_cmp(&self, other: &Option<T>) -> Option<Ordering> {
        Some(false.cmp(&other.is_some()))
    }
}

impl fmt::Debug for Null {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Null")
    }
}
