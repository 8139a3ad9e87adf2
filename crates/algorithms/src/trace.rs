//! Operation tracing behind the `trace` feature.
//!
//! Both macros expand to nothing when the feature is off.

/// Emit a TRACE event for an expensive field operation.
macro_rules! trace_op {
    ($op:literal, $field:literal) => {
        #[cfg(feature = "trace")]
        ::tracing::trace!(op = $op, field = $field);
    };
}

/// Emit a DEBUG event when an encoding is rejected.
macro_rules! trace_rejected {
    ($context:expr, $reason:literal) => {
        #[cfg(feature = "trace")]
        ::tracing::debug!(context = $context, reason = $reason, "rejected encoding");
    };
}

pub(crate) use trace_op;
pub(crate) use trace_rejected;
