//! Combinators on `Optional`.

mod functional;
