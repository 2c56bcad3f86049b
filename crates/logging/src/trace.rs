//! crates/logging/src/trace.rs
//! Self-instrumentation events, compiled out unless the `tracing` feature is enabled.

#[cfg(feature = "tracing")]
use tracing::{debug, warn};

use logging_sink::Severity;

/// Trace a wholesale replacement of the root logger.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn root_replaced(previous: &str, current: &str) {
    debug!(
        target: "logging",
        previous = previous,
        current = current,
        "root logger replaced"
    );
}

/// Trace a wholesale replacement of the root logger - no-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn root_replaced(_previous: &str, _current: &str) {}

/// Trace a channel being rebound to a new sink.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn channel_redirected(logger: &str, severity: Severity) {
    debug!(
        target: "logging",
        logger = logger,
        channel = severity.as_str(),
        "channel redirected"
    );
}

/// Trace a channel being rebound to a new sink - no-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn channel_redirected(_logger: &str, _severity: Severity) {}

/// Trace a logger detaching from a shared verbosity cell.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn verbosity_detached(logger: &str, level: i32) {
    debug!(
        target: "logging",
        logger = logger,
        level = level,
        "verbosity detached onto a private cell"
    );
}

/// Trace a logger detaching from a shared verbosity cell - no-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn verbosity_detached(_logger: &str, _level: i32) {}

/// Trace a line that could not be delivered to its sink.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn delivery_failed(logger: &str, severity: Severity, error: &std::io::Error) {
    warn!(
        target: "logging",
        logger = logger,
        channel = severity.as_str(),
        error = %error,
        "log line could not be delivered"
    );
}

/// Trace a line that could not be delivered - no-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn delivery_failed(_logger: &str, _severity: Severity, _error: &std::io::Error) {}
