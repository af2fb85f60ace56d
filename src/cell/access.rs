//! Unsafe, centralized operations on `MaybeUninit<T>` slots.
//!
//! `Uninit` stores its payload as `MaybeUninit<T>`. Every read, write, drop
//! and reference conversion on that slot goes through these helpers so the
//! unsafe surface can be audited in one place.
//!
//! ## Core invariant
//! The slot is initialized *exactly when* the owner says so: after a
//! `construct` and before the matching `destroy`/`take`. Nothing here checks
//! it. Callers must additionally uphold aliasing rules for produced references.

use core::{mem::MaybeUninit, ptr};

/// Interprets an initialized slot as `&T`.
///
/// # Safety
/// - `slot` must be initialized.
#[inline(always)]
pub(crate) unsafe fn assume_init_ref<T>(slot: &MaybeUninit<T>) -> &T {
    // SAFETY: caller asserts `slot` is initialized.
    unsafe { slot.assume_init_ref() }
}

/// Interprets an initialized slot as `&mut T`.
///
/// # Safety
/// - `slot` must be initialized.
#[inline(always)]
pub(crate) unsafe fn assume_init_mut<T>(slot: &mut MaybeUninit<T>) -> &mut T {
    // SAFETY: caller asserts `slot` is initialized; `&mut` proves exclusivity.
    unsafe { slot.assume_init_mut() }
}

/// Bitwise-moves an initialized value out of a slot.
///
/// # Safety
/// - `slot` must be initialized.
/// - The slot is logically uninitialized afterwards; reading it again or
///   dropping it in place would double-drop.
#[inline(always)]
pub(crate) unsafe fn read<T>(slot: &MaybeUninit<T>) -> T {
    // SAFETY: caller asserts initialization + `ptr::read` contract.
    unsafe { ptr::read(slot.as_ptr()) }
}

/// Writes a value into a slot without dropping the previous bytes.
///
/// If the slot held a live `T` it is leaked, never dropped.
#[inline(always)]
pub(crate) fn write<T>(slot: &mut MaybeUninit<T>, value: T) -> &mut T {
    slot.write(value)
}

/// Drops an initialized value in place.
///
/// # Safety
/// - `slot` must be initialized.
/// - Must not be called more than once for the same logical value.
#[inline(always)]
pub(crate) unsafe fn drop_in_place<T>(slot: &mut MaybeUninit<T>) {
    // SAFETY: caller asserts initialization and drop uniqueness.
    unsafe { ptr::drop_in_place(slot.as_mut_ptr()) }
}
