//! Logging shim that works with or without the `tracing-integration` feature.
//!
//! - **With feature enabled**: re-exports the `tracing` macros.
//! - **Without feature**: no-op macros that expand to nothing, and span
//!   macros that return [`NoopSpan`].
//!
//! ```rust,ignore
//! use raptor_r10::tracing_compat::{debug, debug_span};
//!
//! let span = debug_span!("decode", k = 10);
//! let _guard = span.enter();
//! debug!(inactivated = 3, "schedule complete");
//! ```

#[cfg(feature = "tracing-integration")]
pub use tracing::{debug, debug_span, trace};

#[cfg(not(feature = "tracing-integration"))]
mod noop {
    //! Macros used when tracing is disabled.

    /// No-op trace-level logging macro.
    #[macro_export]
    macro_rules! trace {
        ($($arg:tt)*) => {};
    }

    /// No-op debug-level logging macro.
    #[macro_export]
    macro_rules! debug {
        ($($arg:tt)*) => {};
    }

    /// No-op debug_span macro.
    #[macro_export]
    macro_rules! debug_span {
        ($($arg:tt)*) => {
            $crate::tracing_compat::NoopSpan
        };
    }

    pub use crate::{debug, debug_span, trace};
}

#[cfg(not(feature = "tracing-integration"))]
pub use noop::*;

/// A span that does nothing, returned by the span macros when tracing is off.
#[cfg(not(feature = "tracing-integration"))]
#[derive(Debug, Clone, Copy)]
pub struct NoopSpan;

#[cfg(not(feature = "tracing-integration"))]
impl NoopSpan {
    /// Returns a guard that does nothing on drop.
    #[inline]
    #[must_use]
    pub fn enter(&self) -> NoopGuard {
        NoopGuard
    }
}

/// Guard returned by [`NoopSpan::enter`].
#[cfg(not(feature = "tracing-integration"))]
#[derive(Debug)]
pub struct NoopGuard;

#[cfg(all(test, not(feature = "tracing-integration")))]
mod tests {
    use super::*;

    #[test]
    fn noop_macros_accept_structured_fields() {
        let span = debug_span!("elimination", k = 10, l = 27);
        let _guard = span.enter();
        debug!(k = 10, error = %"singular", "schedule complete");
        trace!("row {} selected", 4);
    }
}
