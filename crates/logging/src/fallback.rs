//! crates/logging/src/fallback.rs
//! Baseline diagnostic channel that receives notices about undeliverable lines.

use std::io;
use std::sync::{Arc, OnceLock};

use logging_sink::{Severity, Sink, SinkSlot};

use crate::trace;

fn slot() -> &'static SinkSlot {
    static FALLBACK: OnceLock<SinkSlot> = OnceLock::new();
    FALLBACK.get_or_init(SinkSlot::stderr)
}

/// Rebinds the fallback channel, returning the previous sink.
///
/// The fallback channel defaults to standard error. Tests redirect it to
/// observe delivery-failure notices.
#[must_use = "the returned sink holds the notices written before the redirect"]
pub fn redirect_fallback(sink: Arc<dyn Sink>) -> Arc<dyn Sink> {
    slot().replace(sink)
}

/// Describes a line that the bound sink rejected.
///
/// The notice names the channel and repeats the lost message. Failures of the
/// fallback channel itself are dropped.
pub(crate) fn report_delivery_failure(
    logger: &str,
    severity: Severity,
    error: &io::Error,
    message: &str,
) {
    trace::delivery_failed(logger, severity, error);
    let channel = if logger.is_empty() {
        severity.as_str().to_string()
    } else {
        format!("{logger} {severity}")
    };
    let notice = format!("Failed to write to {channel} logger: {error}.\n  Message: {message}\n");
    let _ = slot().write_line(notice.as_bytes());
}
