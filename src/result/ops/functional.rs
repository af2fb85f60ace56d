use super::super::Expected;
use crate::holder::{Mut, Ref, Shape, ShapeMut, Val};

impl<S: Shape, E: Shape> Expected<S, E> {
    /// Chains a fallible step on the value.
    ///
    /// In the ERR state `f` is not called and the error is carried over.
    #[inline]
    pub fn and_then<S2, F>(self, f: F) -> Expected<S2, E>
    where
        S2: Shape,
        F: FnOnce(S::Storage) -> Expected<S2, E>,
    {
        match self.into_holders() {
            Ok(value) => f(value.into_inner()),
            Err(error) => Expected::from_unexpected(error),
        }
    }

    /// Recovers from an error.
    ///
    /// In the OK state `f` is not called and the value is carried over.
    #[inline]
    pub fn or_else<E2, F>(self, f: F) -> Expected<S, E2>
    where
        E2: Shape,
        F: FnOnce(E::Storage) -> Expected<S, E2>,
    {
        match self.into_holders() {
            Ok(value) => Expected::from_holder(value),
            Err(error) => f(error.into_inner()),
        }
    }

    /// Maps the value, leaving an error untouched.
    #[inline]
    pub fn transform<U, F>(self, f: F) -> Expected<Val<U>, E>
    where
        F: FnOnce(S::Storage) -> U,
    {
        match self.into_holders() {
            Ok(value) => Expected::ok(f(value.into_inner())),
            Err(error) => Expected::from_unexpected(error),
        }
    }

    /// Maps the error, leaving a value untouched.
    #[inline]
    pub fn transform_error<U, F>(self, f: F) -> Expected<S, Val<U>>
    where
        F: FnOnce(E::Storage) -> U,
    {
        match self.into_holders() {
            Ok(value) => Expected::from_holder(value),
            Err(error) => Expected::from_error(f(error.into_inner())),
        }
    }

    /// Borrowing views of both alternatives.
    #[inline]
    pub fn as_ref(&self) -> Expected<Ref<'_, S::Target>, Ref<'_, E::Target>> {
        match self.as_holders() {
            Ok(value) => Expected::ok(value.get()),
            Err(error) => Expected::from_error(error.get()),
        }
    }
}

impl<S: ShapeMut, E: ShapeMut> Expected<S, E> {
    /// Exclusively borrowing views of both alternatives.
    #[inline]
    pub fn as_mut(&mut self) -> Expected<Mut<'_, S::Target>, Mut<'_, E::Target>> {
        match self.as_holders_mut() {
            Ok(value) => Expected::ok(value.get_mut()),
            Err(error) => Expected::from_error(error.get_mut()),
        }
    }
}
