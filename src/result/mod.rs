//! Result family - a value or an error, each carried by a holder.
//!
//! - `expected` is the two-state struct and its checked access.
//! - `unexpected` is the error-tagged holder used to build the ERR state.
//! - `ops_cmp`, `ops_convert`, `ops_serde` and `ops::*` add the rest.

mod expected;
mod ops;
mod ops_cmp;
mod ops_convert;
mod ops_serde;
mod unexpected;

pub use expected::{swap, Expected};
pub use unexpected::{make_unexpected, Unexpected};

#[cfg(test)]
mod tests;
