//! Combinators on `Expected`.

mod functional;
