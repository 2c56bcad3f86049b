//! crates/logging-sink/src/tracing_sink.rs
//! Bridge from severity channels into the tracing ecosystem.
//!
//! A [`TracingSink`] can be bound to any channel (alone or inside a
//! [`FanOut`](crate::FanOut)) so that applications already running a
//! `tracing-subscriber` stack receive the facade's output as ordinary events.
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use logging_sink::{Severity, TracingSink};
//!
//! logger.redirect(Severity::Warn, Arc::new(TracingSink::new(Severity::Warn)))?;
//! ```

use std::io;

use crate::severity::Severity;
use crate::sink::Sink;

/// Sink that re-emits every line as a `tracing` event.
///
/// Info maps to `INFO`, Warn to `WARN`, Error and Fatal to `ERROR`. Events use
/// the `logging` target and carry the channel name in a `channel` field. The
/// trailing newline is stripped; the header written by the emitter is kept.
#[derive(Clone, Copy, Debug)]
pub struct TracingSink {
    severity: Severity,
}

impl TracingSink {
    /// Creates a bridge that reports lines at `severity`'s tracing level.
    #[must_use]
    pub const fn new(severity: Severity) -> Self {
        Self { severity }
    }

    /// The severity this bridge reports lines at.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }
}

impl Sink for TracingSink {
    fn write_line(&self, line: &[u8]) -> io::Result<()> {
        let text = String::from_utf8_lossy(line);
        let text = text.trim_end_matches('\n');
        let channel = self.severity.as_str();
        match self.severity {
            Severity::Info => tracing::info!(target: "logging", channel, "{}", text),
            Severity::Warn => tracing::warn!(target: "logging", channel, "{}", text),
            Severity::Error | Severity::Fatal => {
                tracing::error!(target: "logging", channel, "{}", text);
            }
        }
        Ok(())
    }
}
