//! Construction from payloads and conversion between holders.
//!
//! Lossless conversions go through `From` and are spelled
//! [`convert`](Holder::convert); narrowing ones go through `TryFrom` and must
//! be requested with [`try_convert`](Holder::try_convert). Neither changes the
//! tag.

use super::shape::{Arr, ArrMut, ArrRef, Moved, Mut, Ref, Shape, Val, Void};
use super::Holder;
use crate::foundation::Unit;

impl<S: Shape, Tag> Holder<S, Tag> {
    /// Converts into a holder of another shape whose storage is `From` ours.
    ///
    /// ```
    /// use vessel::{Holder, Val};
    ///
    /// let small = Holder::<Val<u8>>::new(200);
    /// let wide: Holder<Val<u32>> = small.convert();
    /// assert_eq!(*wide, 200);
    /// ```
    #[inline]
    pub fn convert<S2: Shape>(self) -> Holder<S2, Tag>
    where
        S2::Storage: From<S::Storage>,
    {
        Holder::new(From::from(self.into_inner()))
    }

    /// Converts into a holder of another shape whose storage is `TryFrom` ours.
    ///
    /// # Errors
    /// The storage conversion's error when the payload is not representable.
    ///
    /// ```
    /// use vessel::{Holder, Val};
    ///
    /// let wide = Holder::<Val<u32>>::new(300);
    /// assert!(wide.try_convert::<Val<u8>>().is_err());
    /// ```
    #[inline]
    pub fn try_convert<S2: Shape>(
        self,
    ) -> Result<Holder<S2, Tag>, <S2::Storage as TryFrom<S::Storage>>::Error>
    where
        S2::Storage: TryFrom<S::Storage>,
    {
        <S2::Storage as TryFrom<S::Storage>>::try_from(self.into_inner()).map(Holder::new)
    }

    /// Moves the payload under a different tag.
    ///
    /// This is the only way to cross tag boundaries.
    #[inline(always)]
    pub fn retag<Tag2>(self) -> Holder<S, Tag2> {
        Holder::new(self.into_inner())
    }
}

impl<T, Tag> From<T> for Holder<Val<T>, Tag> {
    #[inline(always)]
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T, Tag> From<T> for Holder<Moved<T>, Tag> {
    #[inline(always)]
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<'a, T: ?Sized, Tag> From<&'a T> for Holder<Ref<'a, T>, Tag> {
    #[inline(always)]
    fn from(value: &'a T) -> Self {
        Self::new(value)
    }
}

impl<'a, T: ?Sized, Tag> From<&'a mut T> for Holder<Mut<'a, T>, Tag> {
    #[inline(always)]
    fn from(value: &'a mut T) -> Self {
        Self::new(value)
    }
}

impl<Tag> From<Unit> for Holder<Void, Tag> {
    #[inline(always)]
    fn from(value: Unit) -> Self {
        Self::new(value)
    }
}

impl<T, const N: usize, Tag> From<[T; N]> for Holder<Arr<T, N>, Tag> {
    #[inline(always)]
    fn from(value: [T; N]) -> Self {
        Self::new(value)
    }
}

impl<'a, T, const N: usize, Tag> From<&'a [T; N]> for Holder<ArrRef<'a, T, N>, Tag> {
    #[inline(always)]
    fn from(value: &'a [T; N]) -> Self {
        Self::new(value)
    }
}

impl<'a, T, const N: usize, Tag> From<&'a mut [T; N]> for Holder<ArrMut<'a, T, N>, Tag> {
    #[inline(always)]
    fn from(value: &'a mut [T; N]) -> Self {
        Self::new(value)
    }
}
