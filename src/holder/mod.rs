//! Holder family - one payload, any shape.
//!
//! The module tree is split by concern:
//! - `shape` is the closed per-shape dispatch ([`Shape`], [`ShapeMut`]).
//! - `tag` holds the phantom identity markers.
//! - `holder` is the struct and its core access surface.
//! - `ops_*` and `ops::*` add comparison, conversion, serde and combinators.

#[allow(clippy::module_inception)]
mod holder;
mod ops;
mod ops_cmp;
mod ops_convert;
mod ops_serde;
pub mod shape;
pub mod tag;

pub use holder::{swap, Holder};
pub use shape::{Arr, ArrMut, ArrRef, Moved, Mut, Ref, Shape, ShapeKind, ShapeMut, Val, Void};
pub use tag::{ErrorTag, ValueTag};
