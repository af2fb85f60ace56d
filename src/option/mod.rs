//! Optional family - a nullable wrapper over every holder shape.
//!
//! - `optional` is the struct, its state machine and checked access.
//! - `ops_cmp` orders EMPTY before PRESENT and hashes with the state mixed in.
//! - `ops_convert` bridges to `Option`, `Null` and `bool`.
//! - `pointer` is raw-pointer interop for the borrowing shapes.
//! - `ops::*` and `ops_serde` add combinators and serde.

mod ops;
mod ops_cmp;
mod ops_convert;
mod ops_serde;
mod optional;
mod pointer;

pub use optional::{make_optional, swap, Optional};
