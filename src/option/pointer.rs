//! Raw-pointer interop for borrowing optionals.
//!
//! An `Optional<Ref<'a, T>>` is laid out as a nullable `*const T`: EMPTY is
//! the null pointer and PRESENT is the borrowed address.

use core::{cmp::Ordering, ptr};

use super::Optional;
use crate::holder::{Mut, Ref, Val};

impl<'a, T: 'a> Optional<Ref<'a, T>> {
    /// Builds from a raw pointer: null is EMPTY, anything else borrows the pointee.
    ///
    /// # Safety
    /// A non-null `ptr` must be valid for shared reads for `'a`, with no
    /// exclusive borrow alive over that span.
    #[inline]
    pub unsafe fn from_ptr(ptr: *const T) -> Self {
        // SAFETY: forwarded to the caller.
        Self::from(unsafe { ptr.as_ref() })
    }

    /// The borrowed address, or null when EMPTY.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.holder().map_or(ptr::null(), |holder| holder.as_ptr())
    }

    /// Copies the referent out.
    #[inline]
    pub fn copied(self) -> Optional<Val<T>>
    where
        T: Copy,
    {
        Optional::from(self.into_option().copied())
    }

    /// Clones the referent out.
    #[inline]
    pub fn cloned(self) -> Optional<Val<T>>
    where
        T: Clone,
    {
        Optional::from(self.into_option().cloned())
    }
}

impl<'a, T: 'a> Optional<Mut<'a, T>> {
    /// Builds from a raw pointer: null is EMPTY, anything else borrows the pointee.
    ///
    /// # Safety
    /// A non-null `ptr` must be valid for reads and writes for `'a`, with no
    /// other borrow alive over that span.
    #[inline]
    pub unsafe fn from_mut_ptr(ptr: *mut T) -> Self {
        // SAFETY: forwarded to the caller.
        Self::from(unsafe { ptr.as_mut() })
    }

    /// The borrowed address, or null when EMPTY.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.holder().map_or(ptr::null(), |holder| holder.as_ptr())
    }

    /// The borrowed address as a mutable pointer, or null when EMPTY.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.holder_mut()
            .map_or(ptr::null_mut(), |holder| holder.as_mut_ptr())
    }
}

impl<'a, T: 'a> From<&'a T> for Optional<Ref<'a, T>> {
    #[inline(always)]
    fn from(target: &'a T) -> Self {
        Self::some(target)
    }
}

impl<'a, T: 'a> From<&'a mut T> for Optional<Mut<'a, T>> {
    #[inline(always)]
    fn from(target: &'a mut T) -> Self {
        Self::some(target)
    }
}

impl<'a, T: 'a> From<Optional<Ref<'a, T>>> for *const T {
    #[inline(always)]
    fn from(optional: Optional<Ref<'a, T>>) -> Self {
        optional.as_ptr()
    }
}

impl<'a, T: 'a> From<Optional<Mut<'a, T>>> for *mut T {
    #[inline(always)]
    fn from(mut optional: Optional<Mut<'a, T>>) -> Self {
        optional.as_mut_ptr()
    }
}

impl<'a, T: 'a> PartialEq<*const T> for Optional<Ref<'a, T>> {
    #[inline]
    fn eq(&self, other: &*const T) -> bool {
        ptr::eq(self.as_ptr(), *other)
    }
}

impl<'a, T: 'a> PartialEq<*mut T> for Optional<Mut<'a, T>> {
    #[inline]
    fn eq(&self, other: &*mut T) -> bool {
        ptr::eq(self.as_ptr(), other.cast_const())
    }
}

impl<'a, T: 'a> PartialOrd<*const T> for Optional<Ref<'a, T>> {
    /// Orders by address; EMPTY is the null pointer.
    #[inline]
    fn partial_cmp(&self, other: &*const T) -> Option<Ordering> {
        self.as_ptr().partial_cmp(other)
    }
}

impl<'a, T: 'a> PartialOrd<*mut T> for Optional<Mut<'a, T>> {
    #[inline]
    fn partial_cmp(&self, other: &*mut T) -> Option<Ordering> {
        self.as_ptr().partial_cmp(&other.cast_const())
    }
}
