use super::super::shape::{Mut, Ref, Shape, ShapeMut, Val};
use super::super::Holder;

impl<S: Shape, Tag> Holder<S, Tag> {
    /// Maps the storage through `f`, keeping the tag.
    #[inline]
    pub fn transform<U, F>(self, f: F) -> Holder<Val<U>, Tag>
    where
        F: FnOnce(S::Storage) -> U,
    {
        Holder::new(f(self.into_inner()))
    }

    /// A borrowing holder viewing this one's target.
    #[inline(always)]
    pub fn as_ref(&self) -> Holder<Ref<'_, S::Target>, Tag> {
        Holder::new(self.get())
    }

    /// Applies `f` to the target and returns its result.
    #[inline]
    pub fn apply<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&S::Target) -> R,
    {
        f(self.get())
    }
}

impl<S: ShapeMut, Tag> Holder<S, Tag> {
    /// An exclusively borrowing holder viewing this one's target.
    #[inline(always)]
    pub fn as_mut(&mut self) -> Holder<Mut<'_, S::Target>, Tag> {
        Holder::new(self.get_mut())
    }

    /// Mutates the target in place.
    #[inline]
    pub fn update<F>(&mut self, f: F)
    where
        F: FnOnce(&mut S::Target),
    {
        f(self.get_mut());
    }
}
