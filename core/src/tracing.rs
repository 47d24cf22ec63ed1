//! Tracing utilities for compilation observability.
//!
//! Enable the `tracing` feature to emit events via the `tracing` crate.
//! These macros no-op when the feature is disabled, avoiding `#[cfg]`
//! boilerplate at every call site.

/// Emit a debug-level tracing event with the template text and value count.
///
/// ```ignore
/// sqlbind_trace_compile!(template, values.len());
/// ```
#[macro_export]
macro_rules! sqlbind_trace_compile {
    ($template:expr, $value_count:expr) => {
        #[cfg(feature = "tracing")]
        tracing::debug!(template = %$template, values = $value_count, "sqlbind.compile");
    };
}

/// Emit a debug-level tracing event when conditional blocks are elided.
///
/// ```ignore
/// sqlbind_trace_elide!(removed_blocks);
/// ```
#[macro_export]
macro_rules! sqlbind_trace_elide {
    ($blocks:expr) => {
        #[cfg(feature = "tracing")]
        tracing::debug!(blocks = $blocks, "sqlbind.elide");
    };
}
