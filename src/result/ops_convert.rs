//! Construction from wrappers and conversion between expecteds.

use super::{Expected, Unexpected};
use crate::holder::{Holder, Shape, ValueTag};

impl<S: Shape, E: Shape> Expected<S, E> {
    /// Converts both alternatives into shapes whose storages are `From` ours.
    ///
    /// ```
    /// use vessel::{Expected, Val};
    ///
    /// let narrow = Expected::<Val<u8>, Val<u16>>::from_error(500);
    /// let wide: Expected<Val<u32>, Val<u64>> = narrow.convert();
    /// assert_eq!(wide.err(), Some(&500));
    /// ```
    pub fn convert<S2: Shape, E2: Shape>(self) -> Expected<S2, E2>
    where
        S2::Storage: From<S::Storage>,
        E2::Storage: From<E::Storage>,
    {
        match self.into_result() {
            Ok(storage) => Expected::ok(From::from(storage)),
            Err(storage) => Expected::from_error(From::from(storage)),
        }
    }

    /// Narrows the value side through `TryFrom`; the error side converts losslessly.
    ///
    /// # Errors
    /// The value conversion's error when OK and not representable. The ERR
    /// state never fails.
    pub fn try_convert<S2: Shape, E2: Shape>(
        self,
    ) -> Result<Expected<S2, E2>, <S2::Storage as TryFrom<S::Storage>>::Error>
    where
        S2::Storage: TryFrom<S::Storage>,
        E2::Storage: From<E::Storage>,
    {
        match self.into_result() {
            Ok(storage) => {
                <S2::Storage as TryFrom<S::Storage>>::try_from(storage).map(Expected::ok)
            }
            Err(storage) => Ok(Expected::from_error(From::from(storage))),
        }
    }
}

impl<S, E, E2> From<Unexpected<E2>> for Expected<S, E>
where
    S: Shape,
    E: Shape,
    E2: Shape,
    E::Storage: From<E2::Storage>,
{
    #[inline]
    fn from(error: Unexpected<E2>) -> Self {
        Self::from_error(From::from(error.into_inner()))
    }
}

impl<S, E, S2> From<Holder<S2, ValueTag>> for Expected<S, E>
where
    S: Shape,
    E: Shape,
    S2: Shape,
    S::Storage: From<S2::Storage>,
{
    #[inline]
    fn from(value: Holder<S2, ValueTag>) -> Self {
        Self::ok(From::from(value.into_inner()))
    }
}

impl<S: Shape, E: Shape> From<Result<S::Storage, E::Storage>> for Expected<S, E> {
    #[inline]
    fn from(result: Result<S::Storage, E::Storage>) -> Self {
        match result {
            Ok(storage) => Self::ok(storage),
            Err(storage) => Self::from_error(storage),
        }
    }
}
