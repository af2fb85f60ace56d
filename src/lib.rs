//! # `vessel` - Uniform Value Wrappers
//!
//! One holder for every payload shape, and the optional/result wrappers built
//! on it. Owned values, shared and exclusive borrows, fixed-size arrays and
//! "nothing at all" go through the same interface, so generic code never has
//! to special-case them.
//!
//! ## Layers
//!
//! - **Foundation** ([`foundation`]): [`Unit`] (the void-substitute),
//!   [`Null`] (the absence marker) and hash mixing.
//! - **Uninit** ([`cell`]): [`Uninit<T>`], a raw slot with explicit
//!   construct/destroy, used where storage and lifetime are managed by hand.
//! - **Holder** ([`holder`]): [`Holder<S, Tag>`] over a [`Shape`] marker
//!   ([`Val`], [`Ref`], [`Mut`], [`Moved`], [`Void`], [`Arr`], [`ArrRef`],
//!   [`ArrMut`]) and a phantom tag.
//! - **Optional** ([`option`]): [`Optional<S>`], EMPTY or one holder.
//! - **Expected** ([`result`]): [`Expected<S, E>`], a value holder or an
//!   [`Unexpected`] error holder.
//!
//! ## Guarantees
//!
//! - **No runtime dispatch**: [`Shape`] is sealed, so every per-shape decision
//!   is made at compile time.
//! - **Zero layout cost**: holders are `repr(transparent)` over their storage;
//!   `Optional<Ref<'_, T>>` is a nullable pointer and `Optional<Void>` a `bool`.
//! - **Borrows are checked**: reference shapes carry their lifetime, so a
//!   holder can never outlive what it borrows. Raw-pointer entry points are
//!   `unsafe fn`.
//! - **Checked access reports, unchecked access is `unsafe`**: `value()`
//!   returns [`BadOptionAccess`] / [`BadResultAccess`]; `get_unchecked()` and
//!   friends carry their precondition in their signature.
//!
//! ## Example
//!
//! ```rust
//! use vessel::{Expected, Optional, Ref, Val, NULL};
//!
//! let x = 10;
//! let mut o = Optional::<Ref<'_, i32>>::some(&x);
//! assert_eq!(o.value(), Ok(&10));
//! o.reset();
//! assert_eq!(o, NULL);
//! assert!(o.as_ptr().is_null());
//!
//! let parsed = Expected::<Val<i32>, Val<&str>>::ok(2)
//!     .and_then(|v| Expected::<Val<i32>, _>::ok(v * 21));
//! assert_eq!(parsed.value(), Ok(&42));
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod cell;
pub mod error;
pub mod foundation;
pub mod holder;
pub mod option;
pub mod result;

pub use cell::Uninit;
pub use error::{BadOptionAccess, BadResultAccess};
pub use foundation::{digest, hash_combine, Null, Unit, NULL, UNIT};
pub use holder::{
    Arr, ArrMut, ArrRef, ErrorTag, Holder, Moved, Mut, Ref, Shape, ShapeKind, ShapeMut, Val,
    ValueTag, Void,
};
pub use option::{make_optional, Optional};
pub use result::{make_unexpected, Expected, Unexpected};

// Compile-time assertions for memory layout
const _: () = {
    use core::mem;

    // Markers are ZSTs.
    assert!(mem::size_of::<Unit>() == 0);
    assert!(mem::size_of::<Null>() == 0);
    assert!(mem::size_of::<Holder<Void>>() == 0);

    // Holders add nothing on top of their storage, whatever the tag.
    assert!(mem::size_of::<Holder<Val<u64>>>() == mem::size_of::<u64>());
    assert!(mem::align_of::<Holder<Val<u64>>>() == mem::align_of::<u64>());
    assert!(mem::size_of::<Unexpected<Val<u64>>>() == mem::size_of::<u64>());
    assert!(mem::size_of::<Holder<Arr<u32, 4>>>() == mem::size_of::<[u32; 4]>());
    assert!(mem::size_of::<Uninit<u64>>() == mem::size_of::<u64>());

    // Borrowing optionals use the null niche.
    assert!(mem::size_of::<Optional<Ref<'static, u64>>>() == mem::size_of::<*const u64>());
    assert!(mem::size_of::<Optional<Mut<'static, u64>>>() == mem::size_of::<*mut u64>());
    assert!(mem::size_of::<Optional<Void>>() == mem::size_of::<bool>());
};
