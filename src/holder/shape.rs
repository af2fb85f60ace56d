//! Shape markers and the per-shape dispatch traits.
//!
//! A *shape* says how a payload is physically stored and what `get` resolves
//! to. Shapes are uninhabited marker types, used only as type parameters:
//!
//! | Marker | Storage | Target |
//! |--------|---------|--------|
//! | [`Val<T>`] | `T` | `T` |
//! | [`Ref<'a, T>`] | `&'a T` | `T` |
//! | [`Mut<'a, T>`] | `&'a mut T` | `T` |
//! | [`Moved<T>`] | `T` | `T` |
//! | [`Void`] | [`Unit`] | [`Unit`] |
//! | [`Arr<T, N>`] | `[T; N]` | `[T; N]` |
//! | [`ArrRef<'a, T, N>`] | `&'a [T; N]` | `[T; N]` |
//! | [`ArrMut<'a, T, N>`] | `&'a mut [T; N]` | `[T; N]` |
//!
//! The set is closed ([`Shape`] is sealed), so the dispatch is resolved
//! entirely at compile time.

use core::{convert::Infallible, marker::PhantomData, mem};

use crate::foundation::Unit;

mod sealed {
    pub trait Sealed {}
}

/// Runtime-inspectable name of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// An owned value.
    Value,
    /// A shared borrow.
    Ref,
    /// An exclusive borrow.
    Mut,
    /// An owned value handed over by move.
    Moved,
    /// The void-substitute.
    Void,
    /// An owned fixed-size array.
    Array,
    /// A shared borrow of a fixed-size array.
    ArrayRef,
    /// An exclusive borrow of a fixed-size array.
    ArrayMut,
}

impl ShapeKind {
    /// Whether the storage is an owned array.
    pub const fn is_array(self) -> bool {
        matches!(self, ShapeKind::Array)
    }

    /// Whether the storage is a borrow rather than an owned payload.
    pub const fn is_reference(self) -> bool {
        matches!(
            self,
            ShapeKind::Ref | ShapeKind::Mut | ShapeKind::ArrayRef | ShapeKind::ArrayMut
        )
    }
}

/// Per-shape storage and shared access.
pub trait Shape: sealed::Sealed {
    /// What a holder of this shape physically stores.
    type Storage;
    /// What the stored payload dereferences to.
    type Target: ?Sized;
    /// The shape's name.
    const KIND: ShapeKind;

    /// Resolves the storage to its target.
    fn get(storage: &Self::Storage) -> &Self::Target;

    /// Exchanges two storages.
    ///
    /// Owning shapes exchange values, borrowing shapes exchange which object
    /// is borrowed and never touch the referents.
    #[inline(always)]
    fn swap(a: &mut Self::Storage, b: &mut Self::Storage) {
        mem::swap(a, b);
    }
}

/// Shapes that grant mutable access to their target.
///
/// Every shape except [`Ref`] and [`ArrRef`].
pub trait ShapeMut: Shape {
    /// Resolves the storage to its target, mutably.
    fn get_mut(storage: &mut Self::Storage) -> &mut Self::Target;
}

/// An owned `T`.
pub struct Val<T>(Infallible, PhantomData<fn() -> T>);

/// A shared borrow of `T`.
pub struct Ref<'a, T: ?Sized>(Infallible, PhantomData<fn() -> &'a T>);

/// An exclusive borrow of `T`.
pub struct Mut<'a, T: ?Sized>(Infallible, PhantomData<fn() -> &'a mut T>);

/// An owned `T` that arrived by move.
///
/// Stored exactly like [`Val`]; the distinct marker keeps "took ownership of
/// a temporary" visible in signatures.
pub struct Moved<T>(Infallible, PhantomData<fn() -> T>);

/// No payload. Stores a [`Unit`].
pub enum Void {}

/// An owned `[T; N]`.
pub struct Arr<T, const N: usize>(Infallible, PhantomData<fn() -> [T; N]>);

/// A shared borrow of an existing `[T; N]`.
pub struct ArrRef<'a, T, const N: usize>(Infallible, PhantomData<fn() -> &'a [T; N]>);

/// An exclusive borrow of an existing `[T; N]`.
pub struct ArrMut<'a, T, const N: usize>(Infallible, PhantomData<fn() -> &'a mut [T; N]>);

impl<T> sealed::Sealed for Val<T> {}
impl<T> Shape for Val<T> {
    type Storage = T;
    type Target = T;
    const KIND: ShapeKind = ShapeKind::Value;

    #[inline(always)]
    fn get(storage: &T) -> &T {
        storage
    }
}
impl<T> ShapeMut for Val<T> {
    #[inline(always)]
    fn get_mut(storage: &mut T) -> &mut T {
        storage
    }
}

impl<'a, T: ?Sized + 'a> sealed::Sealed for Ref<'a, T> {}
impl<'a, T: ?Sized + 'a> Shape for Ref<'a, T> {
    type Storage = &'a T;
    type Target = T;
    const KIND: ShapeKind = ShapeKind::Ref;

    #[inline(always)]
    fn get<'s>(storage: &'s &'a T) -> &'s T {
        storage
    }
}

impl<'a, T: ?Sized + 'a> sealed::Sealed for Mut<'a, T> {}
impl<'a, T: ?Sized + 'a> Shape for Mut<'a, T> {
    type Storage = &'a mut T;
    type Target = T;
    const KIND: ShapeKind = ShapeKind::Mut;

    #[inline(always)]
    fn get<'s>(storage: &'s &'a mut T) -> &'s T {
        storage
    }
}
impl<'a, T: ?Sized + 'a> ShapeMut for Mut<'a, T> {
    #[inline(always)]
    fn get_mut<'s>(storage: &'s mut &'a mut T) -> &'s mut T {
        storage
    }
}

impl<T> sealed::Sealed for Moved<T> {}
impl<T> Shape for Moved<T> {
    type Storage = T;
    type Target = T;
    const KIND: ShapeKind = ShapeKind::Moved;

    #[inline(always)]
    fn get(storage: &T) -> &T {
        storage
    }
}
impl<T> ShapeMut for Moved<T> {
    #[inline(always)]
    fn get_mut(storage: &mut T) -> &mut T {
        storage
    }
}

impl sealed::Sealed for Void {}
impl Shape for Void {
    type Storage = Unit;
    type Target = Unit;
    const KIND: ShapeKind = ShapeKind::Void;

    #[inline(always)]
    fn get(storage: &Unit) -> &Unit {
        storage
    }

    #[inline(always)]
    fn swap(_: &mut Unit, _: &mut Unit) {}
}
impl ShapeMut for Void {
    #[inline(always)]
    fn get_mut(storage: &mut Unit) -> &mut Unit {
        storage
    }
}

impl<T, const N: usize> sealed::Sealed for Arr<T, N> {}
impl<T, const N: usize> Shape for Arr<T, N> {
    type Storage = [T; N];
    type Target = [T; N];
    const KIND: ShapeKind = ShapeKind::Array;

    #[inline(always)]
    fn get(storage: &[T; N]) -> &[T; N] {
        storage
    }

    #[inline]
    fn swap(a: &mut [T; N], b: &mut [T; N]) {
        a.swap_with_slice(b);
    }
}
impl<T, const N: usize> ShapeMut for Arr<T, N> {
    #[inline(always)]
    fn get_mut(storage: &mut [T; N]) -> &mut [T; N] {
        storage
    }
}

impl<'a, T: 'a, const N: usize> sealed::Sealed for ArrRef<'a, T, N> {}
impl<'a, T: 'a, const N: usize> Shape for ArrRef<'a, T, N> {
    type Storage = &'a [T; N];
    type Target = [T; N];
    const KIND: ShapeKind = ShapeKind::ArrayRef;

    #[inline(always)]
    fn get<'s>(storage: &'s &'a [T; N]) -> &'s [T; N] {
        storage
    }
}

impl<'a, T: 'a, const N: usize> sealed::Sealed for ArrMut<'a, T, N> {}
impl<'a, T: 'a, const N: usize> Shape for ArrMut<'a, T, N> {
    type Storage = &'a mut [T; N];
    type Target = [T; N];
    const KIND: ShapeKind = ShapeKind::ArrayMut;

    #[inline(always)]
    fn get<'s>(storage: &'s &'a mut [T; N]) -> &'s [T; N] {
        storage
    }
}
impl<'a, T: 'a, const N: usize> ShapeMut for ArrMut<'a, T, N> {
    #[inline(always)]
    fn get_mut<'s>(storage: &'s mut &'a mut [T; N]) -> &'s mut [T; N] {
        storage
    }
}
