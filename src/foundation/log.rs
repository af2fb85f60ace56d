//! Crate-internal logging hook.
//!
//! With the `tracing` feature the checked accessors report failures as
//! `debug` events under the `vessel::access` target. Without it the macro
//! expands to nothing.

#[cfg(feature = "tracing")]
macro_rules! access_failure {
    ($wrapper:expr, $state:expr) => {
        ::tracing::debug!(
            target: "vessel::access",
            wrapper = $wrapper,
            state = $state,
            "checked access failed"
        )
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! access_failure {
    ($wrapper:expr, $state:expr) => {{
        let _ = (&$wrapper, &$state);
    }};
}

pub(crate) use access_failure;
