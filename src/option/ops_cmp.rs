//! Comparison, hashing and formatting for `Optional`.
//!
//! EMPTY orders before every PRESENT value and equals only EMPTY. Two PRESENT
//! optionals compare their targets, so shapes may differ as long as the
//! targets are comparable.

use core::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
};

use super::Optional;
use crate::foundation::{digest, hash_combine, Null};
use crate::holder::Shape;

impl<S: Shape> Optional<S> {
    /// Whether the optional is PRESENT with a target equal to `value`.
    #[inline]
    pub fn contains<U: ?Sized>(&self, value: &U) -> bool
    where
        S::Target: PartialEq<U>,
    {
        self.get().is_some_and(|target| target == value)
    }

    /// Orders against a bare value: EMPTY is less than any value, PRESENT
    /// compares its target.
    #[inline]
    pub fn partial_cmp_value<U: ?Sized>(&self, value: &U) -> Option<Ordering>
    where
        S::Target: PartialOrd<U>,
    {
        match self.get() {
            Some(target) => target.partial_cmp(value),
            None => Some(Ordering::Less),
        }
    }
}

impl<S, S2> PartialEq<Optional<S2>> for Optional<S>
where
    S: Shape,
    S2: Shape,
    S::Target: PartialEq<S2::Target>,
{
    fn eq(&self, other: &Optional<S2>) -> bool {
        match (self.get(), other.get()) {
            (Some(a), Some(b)) => a == b,
            (None, None) => true,
            _ => false,
        }
    }
}

impl<S: Shape> Eq for Optional<S> where S::Target: Eq {}

impl<S, S2> PartialOrd<Optional<S2>> for Optional<S>
where
    S: Shape,
    S2: Shape,
    S::Target: PartialOrd<S2::Target>,
{
    fn partial_cmp(&self, other: &Optional<S2>) -> Option<Ordering> {
        match (self.get(), other.get()) {
            (Some(a), Some(b)) => a.partial_cmp(b),
            _ => Some(self.has_value().cmp(&other.has_value())),
        }
    }
}

impl<S: Shape> Ord for Optional<S>
where
    S::Target: Ord,
{
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.get(), other.get()) {
            (Some(a), Some(b)) => a.cmp(b),
            _ => self.has_value().cmp(&other.has_value()),
        }
    }
}

impl<S: Shape> PartialEq<Null> for Optional<S> {
    #[inline]
    fn eq(&self, _other: &Null) -> bool {
        self.is_none()
    }
}

impl<S: Shape> PartialEq<Optional<S>> for Null {
    #[inline]
    fn eq(&self, other: &Optional<S>) -> bool {
        other.is_none()
    }
}

impl<S: Shape> PartialOrd<Null> for Optional<S> {
    #[inline]
    fn partial_cmp(&self, _other: &Null) -> Option<Ordering> {
        Some(self.has_value().cmp(&false))
    }
}

impl<S: Shape> PartialOrd<Optional<S>> for Null {
    #[inline]
    fn partial_cmp(&self, other: &Optional<S>) -> Option<Ordering> {
        Some(false.cmp(&other.has_value()))
    }
}

impl<S: Shape> Hash for Optional<S>
where
    S::Target: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mixed = match self.get() {
            Some(target) => hash_combine(digest(&true), digest(target)),
            None => digest(&false),
        };
        state.write_u64(mixed);
    }
}

impl<S: Shape> fmt::Debug for Optional<S>
where
    S::Target: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(target) => f.debug_tuple("Optional").field(&target).finish(),
            None => f.write_str("Optional(Null)"),
        }
    }
}
