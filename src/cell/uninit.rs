//! `Uninit`: a manually driven storage slot.
//!
//! `Uninit<T>` reserves room for one `T` and never constructs or drops it on
//! its own. The owner decides when the slot is live:
//!
//! ```text
//! new() ──construct──▶ live ──destroy/take──▶ dead ──construct──▶ live ...
//! ```
//!
//! The cell has no idea which phase it is in. Every operation whose
//! correctness depends on the phase is an `unsafe fn`; the raw-pointer
//! accessors are safe because producing a pointer is always fine.

use core::{fmt, mem::MaybeUninit};

use super::access;

/// Storage for exactly one `T` with explicit construct/destroy.
///
/// Dropping an `Uninit` does **not** drop its contents. A live value that is
/// never destroyed is leaked.
///
/// # Examples
///
/// ```
/// use vessel::Uninit;
///
/// let mut cell = Uninit::<String>::new();
/// // SAFETY: the cell starts uninitialized and is destroyed exactly once.
/// unsafe {
///     cell.construct(String::from("hi")).push('!');
///     assert_eq!(cell.value(), "hi!");
///     cell.destroy();
/// }
/// ```
#[repr(transparent)]
pub struct Uninit<T> {
    slot: MaybeUninit<T>,
}

impl<T> Uninit<T> {
    /// Creates an uninitialized slot.
    #[inline(always)]
    pub const fn new() -> Self {
        Self {
            slot: MaybeUninit::uninit(),
        }
    }

    /// Creates a slot that already holds `value`.
    ///
    /// The value is still never dropped automatically.
    #[inline(always)]
    pub const fn init(value: T) -> Self {
        Self {
            slot: MaybeUninit::new(value),
        }
    }

    /// Constructs `value` in place and returns a reference to it.
    ///
    /// # Safety
    /// The slot must not currently hold a live value. Constructing over a
    /// live value leaks it; the type system cannot detect this.
    #[inline(always)]
    pub unsafe fn construct(&mut self, value: T) -> &mut T {
        access::write(&mut self.slot, value)
    }

    /// Constructs the result of `f` in place.
    ///
    /// # Safety
    /// Same as [`construct`](Self::construct). If `f` panics the slot is left
    /// untouched.
    #[inline]
    pub unsafe fn construct_with<F>(&mut self, f: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        access::write(&mut self.slot, f())
    }

    /// Drops the live value in place.
    ///
    /// # Safety
    /// The slot must hold a live value, and it must not be accessed again
    /// until it is reconstructed.
    #[inline(always)]
    pub unsafe fn destroy(&mut self) {
        // SAFETY: forwarded to the caller.
        unsafe { access::drop_in_place(&mut self.slot) }
    }

    /// Moves the live value out, leaving the slot dead.
    ///
    /// # Safety
    /// The slot must hold a live value.
    #[inline(always)]
    pub unsafe fn take(&mut self) -> T {
        // SAFETY: forwarded to the caller; the slot is dead afterwards.
        unsafe { access::read(&self.slot) }
    }

    /// Returns the live value.
    ///
    /// # Safety
    /// The slot must hold a live value.
    #[inline(always)]
    pub unsafe fn value(&self) -> &T {
        // SAFETY: forwarded to the caller.
        unsafe { access::assume_init_ref(&self.slot) }
    }

    /// Returns the live value mutably.
    ///
    /// # Safety
    /// The slot must hold a live value.
    #[inline(always)]
    pub unsafe fn value_mut(&mut self) -> &mut T {
        // SAFETY: forwarded to the caller.
        unsafe { access::assume_init_mut(&mut self.slot) }
    }

    /// Pointer to the slot, whatever its state.
    #[inline(always)]
    pub const fn as_ptr(&self) -> *const T {
        self.slot.as_ptr()
    }

    /// Mutable pointer to the slot, whatever its state.
    #[inline(always)]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.slot.as_mut_ptr()
    }
}

impl<T> Default for Uninit<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Uninit<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Uninit")
            .field("slot", &self.as_ptr())
            .finish()
    }
}
