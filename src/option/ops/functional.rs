use super::super::Optional;
use crate::holder::{Mut, Ref, Shape, ShapeMut, Val};

impl<S: Shape> Optional<S> {
    /// Chains a fallible step: `f` runs on the storage only when PRESENT.
    ///
    /// ```
    /// use vessel::{Optional, Val};
    ///
    /// fn half(n: i32) -> Optional<Val<i32>> {
    ///     if n % 2 == 0 {
    ///         Optional::some(n / 2)
    ///     } else {
    ///         Optional::none()
    ///     }
    /// }
    ///
    /// let quarter = Optional::<Val<i32>>::some(8).and_then(half).and_then(half);
    /// assert_eq!(quarter.into_option(), Some(2));
    /// assert!(Optional::<Val<i32>>::some(3).and_then(half).is_none());
    /// ```
    #[inline]
    pub fn and_then<S2, F>(self, f: F) -> Optional<S2>
    where
        S2: Shape,
        F: FnOnce(S::Storage) -> Optional<S2>,
    {
        match self.into_option() {
            Some(storage) => f(storage),
            None => Optional::none(),
        }
    }

    /// Maps the storage through `f` when PRESENT; EMPTY maps to EMPTY.
    #[inline]
    pub fn transform<U, F>(self, f: F) -> Optional<Val<U>>
    where
        F: FnOnce(S::Storage) -> U,
    {
        Optional::from(self.into_option().map(f))
    }

    /// Keeps a PRESENT optional, otherwise falls back to `f`.
    #[inline]
    pub fn or_else<F>(self, f: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        if self.has_value() {
            self
        } else {
            f()
        }
    }

    /// The storage when PRESENT, otherwise `default` converted.
    #[inline]
    pub fn value_or<U>(self, default: U) -> S::Storage
    where
        U: Into<S::Storage>,
    {
        match self.into_option() {
            Some(storage) => storage,
            None => default.into(),
        }
    }

    /// The storage when PRESENT, otherwise the result of `f`.
    #[inline]
    pub fn value_or_else<F>(self, f: F) -> S::Storage
    where
        F: FnOnce() -> S::Storage,
    {
        self.into_option().unwrap_or_else(f)
    }

    /// Keeps the payload only if `predicate` accepts its target.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&S::Target) -> bool,
    {
        if self.get().is_some_and(predicate) {
            self
        } else {
            Self::none()
        }
    }

    /// A borrowing view of the payload.
    #[inline]
    pub fn as_ref(&self) -> Optional<Ref<'_, S::Target>> {
        Optional::from(self.get())
    }
}

impl<S: ShapeMut> Optional<S> {
    /// An exclusively borrowing view of the payload.
    #[inline]
    pub fn as_mut(&mut self) -> Optional<Mut<'_, S::Target>> {
        Optional::from(self.get_mut())
    }
}
