//! `Holder`: one payload of any shape behind one interface.
//!
//! The struct is a `repr(transparent)` shell over the shape's storage; the tag
//! is carried as `PhantomData<fn() -> Tag>` so it affects neither layout nor
//! auto traits.

use core::{
    marker::PhantomData,
    mem,
    ops::{Deref, DerefMut},
};

use super::shape::{Arr, Shape, ShapeKind, ShapeMut, Void};
use super::tag::ValueTag;
use crate::foundation::Unit;

/// A uniform single-payload wrapper.
///
/// `S` is a [`Shape`] marker choosing how the payload is stored; `Tag` is a
/// phantom marker that makes otherwise identical holders distinct types.
///
/// Access comes in four flavors:
/// - [`get`](Self::get): shared access to the target,
/// - [`get_mut`](Self::get_mut): exclusive access (shapes that allow it),
/// - [`into_inner`](Self::into_inner): consume the holder, yielding the storage,
/// - [`cloned`](Self::cloned): a copy of the storage, leaving the holder intact.
///
/// ```
/// use vessel::{Holder, Ref, Val};
///
/// let mut a = Holder::<Val<i32>>::new(1);
/// let mut b = Holder::<Val<i32>>::new(2);
/// vessel::holder::swap(&mut a, &mut b);
/// assert_eq!((*a, *b), (2, 1));
///
/// let x = 1;
/// let r = Holder::<Ref<'_, i32>>::new(&x);
/// assert_eq!(r.as_ptr(), &x as *const i32);
/// ```
#[repr(transparent)]
pub struct Holder<S: Shape, Tag = ValueTag> {
    storage: S::Storage,
    _tag: PhantomData<fn() -> Tag>,
}

impl<S: Shape, Tag> Holder<S, Tag> {
    /// Wraps `storage`.
    #[inline(always)]
    pub const fn new(storage: S::Storage) -> Self {
        Self {
            storage,
            _tag: PhantomData,
        }
    }

    /// The shape this holder dispatches on.
    #[inline(always)]
    pub const fn kind(&self) -> ShapeKind {
        S::KIND
    }

    /// Shared access to the target.
    #[inline(always)]
    pub fn get(&self) -> &S::Target {
        S::get(&self.storage)
    }

    /// The raw storage (for borrowing shapes, the stored reference itself).
    #[inline(always)]
    pub fn storage(&self) -> &S::Storage {
        &self.storage
    }

    /// Consumes the holder and returns its storage.
    #[inline(always)]
    pub fn into_inner(self) -> S::Storage {
        self.storage
    }

    /// Copies the storage out without consuming the holder.
    #[inline]
    pub fn cloned(&self) -> S::Storage
    where
        S::Storage: Clone,
    {
        self.storage.clone()
    }

    /// Address of the target.
    ///
    /// For owning shapes this points into the holder; for borrowing shapes it
    /// is the borrowed address.
    #[inline(always)]
    pub fn as_ptr(&self) -> *const S::Target {
        self.get()
    }

    /// Exchanges contents with `other` as defined by the shape.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        S::swap(&mut self.storage, &mut other.storage);
    }

    /// Installs new storage and returns the old one.
    ///
    /// For borrowing shapes this rebinds the holder; the previous referent is
    /// left untouched.
    #[inline]
    pub fn replace(&mut self, storage: S::Storage) -> S::Storage {
        mem::replace(&mut self.storage, storage)
    }
}

impl<S: ShapeMut, Tag> Holder<S, Tag> {
    /// Exclusive access to the target.
    #[inline(always)]
    pub fn get_mut(&mut self) -> &mut S::Target {
        S::get_mut(&mut self.storage)
    }

    /// Mutable address of the target.
    #[inline(always)]
    pub fn as_mut_ptr(&mut self) -> *mut S::Target {
        self.get_mut()
    }

    /// Assigns through to the target.
    ///
    /// Owning shapes overwrite their payload; exclusive-borrow shapes
    /// overwrite the referent.
    #[inline]
    pub fn assign<U>(&mut self, value: U)
    where
        S::Target: Sized,
        U: Into<S::Target>,
    {
        *self.get_mut() = value.into();
    }
}

impl<Tag> Holder<Void, Tag> {
    /// Builds a void holder, dropping `args`.
    #[inline(always)]
    pub fn discard<A>(args: A) -> Self {
        Self::new(Unit::discard(args))
    }
}

impl<T, const N: usize, Tag> Holder<Arr<T, N>, Tag> {
    /// Builds the array by calling `f` for each index in order.
    #[inline]
    pub fn from_fn<F>(f: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self::new(core::array::from_fn(f))
    }

    /// Fills the array positionally from `elements`.
    ///
    /// Missing trailing elements are `T::default()`; surplus ones are never
    /// pulled from the iterator.
    pub fn from_elements<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Default,
    {
        let mut elements = elements.into_iter();
        Self::from_fn(|_| elements.next().unwrap_or_default())
    }

    /// Number of elements.
    #[inline(always)]
    pub const fn len(&self) -> usize {
        N
    }

    /// Whether the array has no elements.
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Iterates over the elements.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.storage.iter()
    }
}

/// Swaps two holders.
#[inline]
pub fn swap<S: Shape, Tag>(a: &mut Holder<S, Tag>, b: &mut Holder<S, Tag>) {
    a.swap(b);
}

impl<S: Shape, Tag> Deref for Holder<S, Tag> {
    type Target = S::Target;

    #[inline(always)]
    fn deref(&self) -> &S::Target {
        self.get()
    }
}

impl<S: ShapeMut, Tag> DerefMut for Holder<S, Tag> {
    #[inline(always)]
    fn deref_mut(&mut self) -> &mut S::Target {
        self.get_mut()
    }
}

impl<S: Shape, Tag> Clone for Holder<S, Tag>
where
    S::Storage: Clone,
{
    #[inline]
    fn clone(&self) -> Self {
        Self::new(self.storage.clone())
    }
}

impl<S: Shape, Tag> Copy for Holder<S, Tag> where S::Storage: Copy {}

impl<S: Shape, Tag> Default for Holder<S, Tag>
where
    S::Storage: Default,
{
    #[inline]
    fn default() -> Self {
        Self::new(Default::default())
    }
}
