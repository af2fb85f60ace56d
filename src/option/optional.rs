//! `Optional`: EMPTY or exactly one holder.
//!
//! ## State machine
//!
//! ```text
//!            emplace / assign / assign_from(present)
//!   EMPTY ──────────────────────────────────────────▶ PRESENT
//!     ▲                                                  │  emplace / assign
//!     │        reset / assign_null / assign_from(empty)  │  (replaces in place)
//!     └──────────────────────────────────────────────────┘
//! ```
//!
//! The payload lives in an `Option<Holder<S>>`. `Holder` is transparent over
//! the shape's storage, so borrowing shapes keep the null-pointer niche: an
//! `Optional<Ref<'_, T>>` is one pointer wide and EMPTY is the null pattern.

use core::mem;

use crate::error::BadOptionAccess;
use crate::foundation::{log::access_failure, Null};
use crate::holder::{Holder, Shape, ShapeMut};

/// A nullable wrapper over any shape.
///
/// ```
/// use vessel::{Optional, Val, NULL};
///
/// let mut o = Optional::<Val<i32>>::none();
/// assert!(!o.has_value());
/// o.assign(5);
/// assert_eq!(o.value(), Ok(&5));
/// o.assign_null(NULL);
/// assert!(o.value().is_err());
/// ```
#[repr(transparent)]
pub struct Optional<S: Shape> {
    slot: Option<Holder<S>>,
}

#[cold]
#[inline(never)]
fn empty_access() -> BadOptionAccess {
    access_failure!("Optional", "empty");
    BadOptionAccess
}

impl<S: Shape> Optional<S> {
    /// The EMPTY state.
    #[inline(always)]
    pub const fn none() -> Self {
        Self { slot: None }
    }

    /// A PRESENT optional holding `storage`.
    #[inline(always)]
    pub const fn some(storage: S::Storage) -> Self {
        Self {
            slot: Some(Holder::new(storage)),
        }
    }

    /// A PRESENT optional taking over `holder`.
    #[inline(always)]
    pub const fn from_holder(holder: Holder<S>) -> Self {
        Self { slot: Some(holder) }
    }

    /// Whether the optional is PRESENT.
    #[inline(always)]
    pub const fn has_value(&self) -> bool {
        self.slot.is_some()
    }

    /// Whether the optional is EMPTY.
    #[inline(always)]
    pub const fn is_none(&self) -> bool {
        self.slot.is_none()
    }

    /// Drops the payload, if any.
    #[inline]
    pub fn reset(&mut self) {
        self.slot = None;
    }

    /// Installs `storage`, dropping any previous payload, and returns the new holder.
    #[inline]
    pub fn emplace(&mut self, storage: S::Storage) -> &mut Holder<S> {
        self.slot.insert(Holder::new(storage))
    }

    /// Installs the result of `f`.
    ///
    /// If `f` panics the previous state is kept.
    #[inline]
    pub fn emplace_with<F>(&mut self, f: F) -> &mut Holder<S>
    where
        F: FnOnce() -> S::Storage,
    {
        self.emplace(f())
    }

    /// Assigns a payload: replaces it in place when PRESENT, emplaces when EMPTY.
    ///
    /// For borrowing shapes this rebinds; referents are never written.
    #[inline]
    pub fn assign(&mut self, storage: S::Storage) -> &mut Self {
        match &mut self.slot {
            Some(holder) => {
                holder.replace(storage);
            }
            None => {
                self.emplace(storage);
            }
        }
        self
    }

    /// Assigns the absence marker.
    #[inline]
    pub fn assign_null(&mut self, _null: Null) -> &mut Self {
        self.reset();
        self
    }

    /// Assigns from an optional of a convertible shape.
    ///
    /// PRESENT sources are converted and assigned; EMPTY sources reset.
    pub fn assign_from<S2: Shape>(&mut self, other: Optional<S2>) -> &mut Self
    where
        S::Storage: From<S2::Storage>,
    {
        match other.into_option() {
            Some(storage) => self.assign(From::from(storage)),
            None => self.assign_null(Null),
        }
    }

    /// Takes the payload out, leaving EMPTY behind.
    #[inline]
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    /// Installs `storage` and returns the previous state.
    #[inline]
    pub fn replace(&mut self, storage: S::Storage) -> Self {
        mem::replace(self, Self::some(storage))
    }

    /// The payload's holder, if PRESENT.
    #[inline(always)]
    pub fn holder(&self) -> Option<&Holder<S>> {
        self.slot.as_ref()
    }

    /// The payload's holder, mutably, if PRESENT.
    #[inline(always)]
    pub fn holder_mut(&mut self) -> Option<&mut Holder<S>> {
        self.slot.as_mut()
    }

    /// Shared access to the target, if PRESENT.
    #[inline]
    pub fn get(&self) -> Option<&S::Target> {
        self.slot.as_ref().map(Holder::get)
    }

    /// Checked shared access.
    ///
    /// # Errors
    /// [`BadOptionAccess`] when EMPTY.
    #[inline]
    pub fn value(&self) -> Result<&S::Target, BadOptionAccess> {
        match &self.slot {
            Some(holder) => Ok(holder.get()),
            None => Err(empty_access()),
        }
    }

    /// Checked move-out of the storage.
    ///
    /// # Errors
    /// [`BadOptionAccess`] when EMPTY.
    #[inline]
    pub fn into_value(self) -> Result<S::Storage, BadOptionAccess> {
        match self.slot {
            Some(holder) => Ok(holder.into_inner()),
            None => Err(empty_access()),
        }
    }

    /// Unchecked shared access.
    ///
    /// # Safety
    /// The optional must be PRESENT.
    #[inline(always)]
    pub unsafe fn get_unchecked(&self) -> &S::Target {
        debug_assert!(self.has_value(), "get_unchecked on an empty Optional");
        // SAFETY: caller guarantees PRESENT.
        unsafe { self.slot.as_ref().unwrap_unchecked().get() }
    }

    /// The payload's holder as a standard `Option`.
    #[inline(always)]
    pub fn into_holder(self) -> Option<Holder<S>> {
        self.slot
    }

    /// Swaps with `other`.
    ///
    /// Two PRESENT optionals swap through their holders: arrays exchange
    /// elementwise and borrowing shapes exchange which object is borrowed.
    /// Otherwise the states swap.
    pub fn swap(&mut self, other: &mut Self) {
        match (&mut self.slot, &mut other.slot) {
            (Some(a), Some(b)) => a.swap(b),
            (a, b) => mem::swap(a, b),
        }
    }
}

impl<S: ShapeMut> Optional<S> {
    /// Exclusive access to the target, if PRESENT.
    #[inline]
    pub fn get_mut(&mut self) -> Option<&mut S::Target> {
        self.slot.as_mut().map(Holder::get_mut)
    }

    /// Checked exclusive access.
    ///
    /// # Errors
    /// [`BadOptionAccess`] when EMPTY.
    #[inline]
    pub fn value_mut(&mut self) -> Result<&mut S::Target, BadOptionAccess> {
        match &mut self.slot {
            Some(holder) => Ok(holder.get_mut()),
            None => Err(empty_access()),
        }
    }

    /// Unchecked exclusive access.
    ///
    /// # Safety
    /// The optional must be PRESENT.
    #[inline(always)]
    pub unsafe fn get_unchecked_mut(&mut self) -> &mut S::Target {
        debug_assert!(self.has_value(), "get_unchecked_mut on an empty Optional");
        // SAFETY: caller guarantees PRESENT.
        unsafe { self.slot.as_mut().unwrap_unchecked().get_mut() }
    }
}

/// Swaps two optionals.
#[inline]
pub fn swap<S: Shape>(a: &mut Optional<S>, b: &mut Optional<S>) {
    a.swap(b);
}

/// Builds a PRESENT optional.
#[inline(always)]
pub const fn make_optional<S: Shape>(storage: S::Storage) -> Optional<S> {
    Optional::some(storage)
}

impl<S: Shape> Default for Optional<S> {
    #[inline(always)]
    fn default() -> Self {
        Self::none()
    }
}

impl<S: Shape> Clone for Optional<S>
where
    S::Storage: Clone,
{
    #[inline]
    fn clone(&self) -> Self {
        Self {
            slot: self.slot.clone(),
        }
    }
}

impl<S: Shape> Copy for Optional<S> where S::Storage: Copy {}
