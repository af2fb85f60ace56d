//! Combinators on `Holder`.

mod functional;
