//! Comparison, hashing and formatting for `Holder`.
//!
//! Everything delegates to the target, so a holder inherits exactly the
//! payload's ordering category. Both sides must share a tag.

use core::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
};

use super::shape::Shape;
use super::Holder;

impl<S, S2, Tag> PartialEq<Holder<S2, Tag>> for Holder<S, Tag>
where
    S: Shape,
    S2: Shape,
    S::Target: PartialEq<S2::Target>,
{
    #[inline]
    fn eq(&self, other: &Holder<S2, Tag>) -> bool {
        PartialEq::eq(self.get(), other.get())
    }
}

impl<S: Shape, Tag> Eq for Holder<S, Tag> where S::Target: Eq {}

impl<S, S2, Tag> PartialOrd<Holder<S2, Tag>> for Holder<S, Tag>
where
    S: Shape,
    S2: Shape,
    S::Target: PartialOrd<S2::Target>,
{
    #[inline]
    fn partial_cmp(&self, other: &Holder<S2, Tag>) -> Option<Ordering> {
        PartialOrd::partial_cmp(self.get(), other.get())
    }
}

impl<S: Shape, Tag> Ord for Holder<S, Tag>
where
    S::Target: Ord,
{
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        Ord::cmp(self.get(), other.get())
    }
}

impl<S: Shape, Tag> Hash for Holder<S, Tag>
where
    S::Target: Hash,
{
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.get().hash(state);
    }
}

impl<S: Shape, Tag> fmt::Debug for Holder<S, Tag>
where
    S::Target: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Holder").field(&self.get()).finish()
    }
}

impl<S: Shape, Tag> fmt::Display for Holder<S, Tag>
where
    S::Target: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.get(), f)
    }
}
