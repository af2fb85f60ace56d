//! Comparison, hashing and formatting for `Expected`.
//!
//! Two expecteds are equal when both are OK with equal values or both are ERR
//! with equal errors. A bare value holder or a bare [`Unexpected`] compares
//! against one side only. There is no ordering.

use core::{
    fmt,
    hash::{Hash, Hasher},
};

use super::{Expected, Unexpected};
use crate::foundation::{digest, hash_combine};
use crate::holder::{Holder, Shape, ValueTag};

impl<S: Shape, E: Shape> Expected<S, E> {
    /// Whether the state is OK with a value equal to `value`.
    #[inline]
    pub fn contains<U: ?Sized>(&self, value: &U) -> bool
    where
        S::Target: PartialEq<U>,
    {
        self.get().is_some_and(|target| target == value)
    }

    /// Whether the state is ERR with an error equal to `error`.
    #[inline]
    pub fn contains_error<U: ?Sized>(&self, error: &U) -> bool
    where
        E::Target: PartialEq<U>,
    {
        self.err().is_some_and(|target| target == error)
    }
}

impl<S, E, S2, E2> PartialEq<Expected<S2, E2>> for Expected<S, E>
where
    S: Shape,
    E: Shape,
    S2: Shape,
    E2: Shape,
    S::Target: PartialEq<S2::Target>,
    E::Target: PartialEq<E2::Target>,
{
    fn eq(&self, other: &Expected<S2, E2>) -> bool {
        match (self.as_holders(), other.as_holders()) {
            (Ok(a), Ok(b)) => a.get() == b.get(),
            (Err(a), Err(b)) => a.get() == b.get(),
            _ => false,
        }
    }
}

impl<S: Shape, E: Shape> Eq for Expected<S, E>
where
    S::Target: Eq,
    E::Target: Eq,
{
}

impl<S, E, S2> PartialEq<Holder<S2, ValueTag>> for Expected<S, E>
where
    S: Shape,
    E: Shape,
    S2: Shape,
    S::Target: PartialEq<S2::Target>,
{
    #[inline]
    fn eq(&self, other: &Holder<S2, ValueTag>) -> bool {
        self.contains(other.get())
    }
}

impl<S, E, E2> PartialEq<Unexpected<E2>> for Expected<S, E>
where
    S: Shape,
    E: Shape,
    E2: Shape,
    E::Target: PartialEq<E2::Target>,
{
    #[inline]
    fn eq(&self, other: &Unexpected<E2>) -> bool {
        self.contains_error(other.get())
    }
}

impl<S: Shape, E: Shape> Hash for Expected<S, E>
where
    S::Target: Hash,
    E::Target: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mixed = match self.as_holders() {
            Ok(value) => hash_combine(digest(&true), digest(value.get())),
            Err(error) => hash_combine(digest(&false), digest(error.get())),
        };
        state.write_u64(mixed);
    }
}

impl<S: Shape, E: Shape> fmt::Debug for Expected<S, E>
where
    S::Target: fmt::Debug,
    E::Target: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_holders() {
            Ok(value) => f.debug_tuple("Value").field(&value.get()).finish(),
            Err(error) => f.debug_tuple("Error").field(&error.get()).finish(),
        }
    }
}
