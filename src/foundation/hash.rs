//! Hash mixing shared by the wrapper `Hash` impls.
//!
//! Wrappers with more than one state hash as
//! `hash_combine(digest(discriminant), digest(payload))`, so two wrappers in
//! different states never collide just because their payloads do.

use core::hash::{Hash, Hasher};
use std::collections::hash_map::DefaultHasher;

/// Golden-ratio increment used by [`hash_combine`].
pub const HASH_MIX: u64 = 0x9e37_79b9;

/// Mixes `y` into `x`.
///
/// Not commutative: `hash_combine(a, b) != hash_combine(b, a)` in general.
#[inline]
pub const fn hash_combine(x: u64, y: u64) -> u64 {
    x ^ (y.wrapping_add(HASH_MIX).wrapping_add(x << 6).wrapping_add(x >> 2))
}

/// Hashes `value` on its own with a fixed-key hasher.
///
/// `DefaultHasher::new()` is deterministic within a build, which keeps
/// `a == b ⇒ digest(a) == digest(b)` for every `Hash`/`Eq` pair.
#[inline]
pub fn digest<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}
