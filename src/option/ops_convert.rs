//! Construction and conversion for `Optional`.
//!
//! `Optional<S>` and `Option<S::Storage>` carry the same information and
//! convert both ways losslessly. `Optional<Void>` is likewise the same thing
//! as a `bool`.

use super::Optional;
use crate::foundation::{Null, Unit};
use crate::holder::{Holder, Shape, Void};

impl<S: Shape> Optional<S> {
    /// The payload as a standard `Option`.
    #[inline]
    pub fn into_option(self) -> Option<S::Storage> {
        self.into_holder().map(Holder::into_inner)
    }

    /// Converts into an optional of another shape whose storage is `From` ours.
    ///
    /// EMPTY stays EMPTY.
    #[inline]
    pub fn convert<S2: Shape>(self) -> Optional<S2>
    where
        S2::Storage: From<S::Storage>,
    {
        Optional::from(
            self.into_option()
                .map(<S2::Storage as From<S::Storage>>::from),
        )
    }

    /// Converts into an optional of another shape whose storage is `TryFrom` ours.
    ///
    /// EMPTY stays EMPTY and never fails.
    ///
    /// # Errors
    /// The storage conversion's error when PRESENT and not representable.
    pub fn try_convert<S2: Shape>(
        self,
    ) -> Result<Optional<S2>, <S2::Storage as TryFrom<S::Storage>>::Error>
    where
        S2::Storage: TryFrom<S::Storage>,
    {
        match self.into_option() {
            Some(storage) => {
                <S2::Storage as TryFrom<S::Storage>>::try_from(storage).map(Optional::some)
            }
            None => Ok(Optional::none()),
        }
    }
}

impl<S: Shape> From<Null> for Optional<S> {
    #[inline(always)]
    fn from(_null: Null) -> Self {
        Self::none()
    }
}

impl<S: Shape> From<Option<S::Storage>> for Optional<S> {
    #[inline]
    fn from(option: Option<S::Storage>) -> Self {
        match option {
            Some(storage) => Self::some(storage),
            None => Self::none(),
        }
    }
}

impl<S: Shape> From<Holder<S>> for Optional<S> {
    #[inline(always)]
    fn from(holder: Holder<S>) -> Self {
        Self::from_holder(holder)
    }
}

impl Optional<Void> {
    /// PRESENT holding the unit payload.
    #[inline(always)]
    pub const fn unit() -> Self {
        Self::some(Unit)
    }

    /// `true` iff PRESENT.
    #[inline(always)]
    pub const fn to_bool(&self) -> bool {
        self.has_value()
    }
}

impl From<bool> for Optional<Void> {
    #[inline(always)]
    fn from(present: bool) -> Self {
        if present {
            Self::unit()
        } else {
            Self::none()
        }
    }
}

impl From<Optional<Void>> for bool {
    #[inline(always)]
    fn from(optional: Optional<Void>) -> Self {
        optional.to_bool()
    }
}
