//! `Expected`: a value holder or an error holder, never both, never neither.
//!
//! ## State machine
//!
//! ```text
//!          emplace_error / assign_error
//!   OK ───────────────────────────────▶ ERR
//!    ▲                                   │
//!    └───────────────────────────────────┘
//!          emplace / assign
//! ```
//!
//! Same-state assignment replaces the payload in place. There is no
//! valueless state: every transition builds the new payload first.

use core::mem;
use std::io;

use super::unexpected::Unexpected;
use crate::error::BadResultAccess;
use crate::foundation::log::access_failure;
use crate::holder::{Holder, Shape, ShapeMut, Val};

/// A value of shape `S` or an error of shape `E`.
///
/// The default error shape is an owned [`io::ErrorKind`].
///
/// ```
/// use vessel::{Expected, Val};
///
/// let ok = Expected::<Val<i32>, Val<&str>>::ok(7);
/// assert_eq!(ok.value(), Ok(&7));
///
/// let err = Expected::<Val<i32>, Val<&str>>::from_error("boom");
/// assert!(err.value().is_err());
/// assert_eq!(*err.error(), "boom");
/// ```
pub struct Expected<S: Shape, E: Shape = Val<io::ErrorKind>> {
    inner: Result<Holder<S>, Unexpected<E>>,
}

#[cold]
#[inline(never)]
fn error_access() -> BadResultAccess {
    access_failure!("Expected", "error");
    BadResultAccess
}

impl<S: Shape, E: Shape> Expected<S, E> {
    /// The OK state holding `storage`.
    #[inline(always)]
    pub const fn ok(storage: S::Storage) -> Self {
        Self {
            inner: Ok(Holder::new(storage)),
        }
    }

    /// Same as [`ok`](Self::ok).
    #[inline(always)]
    pub const fn new(storage: S::Storage) -> Self {
        Self::ok(storage)
    }

    /// The ERR state holding `storage`, built in place.
    #[inline(always)]
    pub const fn from_error(storage: E::Storage) -> Self {
        Self {
            inner: Err(Holder::new(storage)),
        }
    }

    /// The OK state taking over a value holder.
    #[inline(always)]
    pub const fn from_holder(value: Holder<S>) -> Self {
        Self { inner: Ok(value) }
    }

    /// The ERR state taking over an error holder.
    #[inline(always)]
    pub const fn from_unexpected(error: Unexpected<E>) -> Self {
        Self { inner: Err(error) }
    }

    /// Whether the state is OK.
    #[inline(always)]
    pub const fn has_value(&self) -> bool {
        self.inner.is_ok()
    }

    /// Whether the state is ERR.
    #[inline(always)]
    pub const fn is_error(&self) -> bool {
        self.inner.is_err()
    }

    /// Borrows both alternatives as a `Result` of holders.
    ///
    /// # Errors
    /// The error holder when ERR.
    #[inline(always)]
    pub fn as_holders(&self) -> Result<&Holder<S>, &Unexpected<E>> {
        self.inner.as_ref()
    }

    /// Mutably borrows both alternatives as a `Result` of holders.
    ///
    /// # Errors
    /// The error holder when ERR.
    #[inline(always)]
    pub fn as_holders_mut(&mut self) -> Result<&mut Holder<S>, &mut Unexpected<E>> {
        self.inner.as_mut()
    }

    /// The value holder, if OK.
    #[inline(always)]
    pub fn holder(&self) -> Option<&Holder<S>> {
        self.inner.as_ref().ok()
    }

    /// The error holder, if ERR.
    #[inline(always)]
    pub fn unexpected(&self) -> Option<&Unexpected<E>> {
        self.inner.as_ref().err()
    }

    /// Shared access to the value, if OK.
    #[inline]
    pub fn get(&self) -> Option<&S::Target> {
        self.holder().map(Holder::get)
    }

    /// Shared access to the error, if ERR.
    #[inline]
    pub fn err(&self) -> Option<&E::Target> {
        self.unexpected().map(Holder::get)
    }

    /// Checked shared access to the value.
    ///
    /// # Errors
    /// [`BadResultAccess`] in the ERR state.
    #[inline]
    pub fn value(&self) -> Result<&S::Target, BadResultAccess> {
        match &self.inner {
            Ok(holder) => Ok(holder.get()),
            Err(_) => Err(error_access()),
        }
    }

    /// Checked move-out of the value storage.
    ///
    /// # Errors
    /// [`BadResultAccess`] in the ERR state.
    #[inline]
    pub fn into_value(self) -> Result<S::Storage, BadResultAccess> {
        match self.inner {
            Ok(holder) => Ok(holder.into_inner()),
            Err(_) => Err(error_access()),
        }
    }

    /// The error storage, if ERR.
    #[inline]
    pub fn into_error(self) -> Option<E::Storage> {
        self.inner.err().map(Holder::into_inner)
    }

    /// Shared access to the error.
    ///
    /// # Panics
    /// In the OK state. Use [`err`](Self::err) to check first.
    #[inline]
    #[track_caller]
    pub fn error(&self) -> &E::Target {
        match &self.inner {
            Err(error) => error.get(),
            Ok(_) => panic!("Expected::error called in the OK state"),
        }
    }

    /// Unchecked shared access to the value.
    ///
    /// # Safety
    /// The state must be OK.
    #[inline(always)]
    pub unsafe fn get_unchecked(&self) -> &S::Target {
        debug_assert!(self.has_value(), "get_unchecked on an Expected holding an error");
        // SAFETY: caller guarantees OK.
        unsafe { self.inner.as_ref().unwrap_unchecked().get() }
    }

    /// Unchecked shared access to the error.
    ///
    /// # Safety
    /// The state must be ERR.
    #[inline(always)]
    pub unsafe fn error_unchecked(&self) -> &E::Target {
        debug_assert!(self.is_error(), "error_unchecked on an Expected holding a value");
        // SAFETY: caller guarantees ERR.
        unsafe { self.inner.as_ref().unwrap_err_unchecked().get() }
    }

    /// The value storage if OK, otherwise `default` converted.
    #[inline]
    pub fn value_or<U>(self, default: U) -> S::Storage
    where
        U: Into<S::Storage>,
    {
        match self.inner {
            Ok(holder) => holder.into_inner(),
            Err(_) => default.into(),
        }
    }

    /// The error storage if ERR, otherwise `default` converted.
    #[inline]
    pub fn error_or<U>(self, default: U) -> E::Storage
    where
        U: Into<E::Storage>,
    {
        match self.inner {
            Err(error) => error.into_inner(),
            Ok(_) => default.into(),
        }
    }

    /// Switches to (or stays in) OK with `storage`, returning the value holder.
    #[inline]
    pub fn emplace(&mut self, storage: S::Storage) -> &mut Holder<S> {
        self.inner = Ok(Holder::new(storage));
        match &mut self.inner {
            Ok(holder) => holder,
            // SAFETY: just written.
            Err(_) => unsafe { core::hint::unreachable_unchecked() },
        }
    }

    /// Switches to (or stays in) ERR with `storage`, returning the error holder.
    #[inline]
    pub fn emplace_error(&mut self, storage: E::Storage) -> &mut Unexpected<E> {
        self.inner = Err(Holder::new(storage));
        match &mut self.inner {
            Err(error) => error,
            // SAFETY: just written.
            Ok(_) => unsafe { core::hint::unreachable_unchecked() },
        }
    }

    /// Assigns a value: replaced in place when OK, switches state when ERR.
    #[inline]
    pub fn assign(&mut self, storage: S::Storage) -> &mut Self {
        match &mut self.inner {
            Ok(holder) => {
                holder.replace(storage);
            }
            Err(_) => {
                self.emplace(storage);
            }
        }
        self
    }

    /// Assigns an error: replaced in place when ERR, switches state when OK.
    #[inline]
    pub fn assign_error(&mut self, storage: E::Storage) -> &mut Self {
        match &mut self.inner {
            Err(error) => {
                error.replace(storage);
            }
            Ok(_) => {
                self.emplace_error(storage);
            }
        }
        self
    }

    /// Assigns from an error holder of a convertible shape.
    #[inline]
    pub fn assign_unexpected<E2: Shape>(&mut self, error: Unexpected<E2>) -> &mut Self
    where
        E::Storage: From<E2::Storage>,
    {
        self.assign_error(From::from(error.into_inner()))
    }

    /// Assigns from an expected of convertible shapes, taking over its state.
    pub fn assign_from<S2: Shape, E2: Shape>(&mut self, other: Expected<S2, E2>) -> &mut Self
    where
        S::Storage: From<S2::Storage>,
        E::Storage: From<E2::Storage>,
    {
        match other.into_result() {
            Ok(storage) => self.assign(From::from(storage)),
            Err(storage) => self.assign_error(From::from(storage)),
        }
    }

    /// Swaps with `other`.
    ///
    /// Same-state pairs swap through their holders; mixed pairs exchange states.
    pub fn swap(&mut self, other: &mut Self) {
        match (&mut self.inner, &mut other.inner) {
            (Ok(a), Ok(b)) => a.swap(b),
            (Err(a), Err(b)) => a.swap(b),
            (a, b) => mem::swap(a, b),
        }
    }

    /// The payload as a standard `Result` of storages.
    ///
    /// # Errors
    /// The error storage when ERR.
    #[inline]
    pub fn into_result(self) -> Result<S::Storage, E::Storage> {
        self.inner
            .map(Holder::into_inner)
            .map_err(Holder::into_inner)
    }

    /// The payload as a `Result` of holders.
    ///
    /// # Errors
    /// The [`Unexpected`] holder when ERR.
    #[inline(always)]
    pub fn into_holders(self) -> Result<Holder<S>, Unexpected<E>> {
        self.inner
    }
}

impl<S: ShapeMut, E: Shape> Expected<S, E> {
    /// Exclusive access to the value, if OK.
    #[inline]
    pub fn get_mut(&mut self) -> Option<&mut S::Target> {
        self.inner.as_mut().ok().map(Holder::get_mut)
    }

    /// Checked exclusive access to the value.
    ///
    /// # Errors
    /// [`BadResultAccess`] in the ERR state.
    #[inline]
    pub fn value_mut(&mut self) -> Result<&mut S::Target, BadResultAccess> {
        match &mut self.inner {
            Ok(holder) => Ok(holder.get_mut()),
            Err(_) => Err(error_access()),
        }
    }

    /// Unchecked exclusive access to the value.
    ///
    /// # Safety
    /// The state must be OK.
    #[inline(always)]
    pub unsafe fn get_unchecked_mut(&mut self) -> &mut S::Target {
        debug_assert!(self.has_value(), "get_unchecked_mut on an Expected holding an error");
        // SAFETY: caller guarantees OK.
        unsafe { self.inner.as_mut().unwrap_unchecked().get_mut() }
    }
}

impl<S: Shape, E: ShapeMut> Expected<S, E> {
    /// Exclusive access to the error, if ERR.
    #[inline]
    pub fn err_mut(&mut self) -> Option<&mut E::Target> {
        self.inner.as_mut().err().map(Holder::get_mut)
    }

    /// Unchecked exclusive access to the error.
    ///
    /// # Safety
    /// The state must be ERR.
    #[inline(always)]
    pub unsafe fn error_unchecked_mut(&mut self) -> &mut E::Target {
        debug_assert!(self.is_error(), "error_unchecked_mut on an Expected holding a value");
        // SAFETY: caller guarantees ERR.
        unsafe { self.inner.as_mut().unwrap_err_unchecked().get_mut() }
    }
}

/// Swaps two expecteds.
#[inline]
pub fn swap<S: Shape, E: Shape>(a: &mut Expected<S, E>, b: &mut Expected<S, E>) {
    a.swap(b);
}

impl<S: Shape, E: Shape> Default for Expected<S, E>
where
    S::Storage: Default,
{
    #[inline]
    fn default() -> Self {
        Self::ok(Default::default())
    }
}

impl<S: Shape, E: Shape> Clone for Expected<S, E>
where
    S::Storage: Clone,
    E::Storage: Clone,
{
    #[inline]
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<S: Shape, E: Shape> Copy for Expected<S, E>
where
    S::Storage: Copy,
    E::Storage: Copy,
{
}
