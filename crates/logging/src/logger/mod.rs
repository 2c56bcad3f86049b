//! crates/logging/src/logger/mod.rs
//! The logger: four redirectable severity channels, a verbosity binding and an exit hook.

use std::fmt;
use std::sync::RwLock;
use std::sync::atomic::AtomicI32;

use logging_sink::{LineEmitter, Severity};

use crate::exit::ExitHook;
use crate::verbosity::Verbosity;

mod construction;
mod redirect;
mod severity;

/// An individually configurable logging instance.
///
/// A logger owns one [`LineEmitter`] per [`Severity`]. Each emitter reads its
/// destination from a slot the logger can rebind at any time through
/// [`redirect`](Self::redirect); the change applies to the next line on that
/// channel and to no other channel.
///
/// Loggers are `Send + Sync` and are usually shared behind an [`Arc`](std::sync::Arc).
/// The process-wide default lives behind [`root`](crate::root) and is replaced
/// wholesale with [`set_root`](crate::set_root) rather than mutated in place
/// when a test needs isolation.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use logging::{Logger, Severity, SharedBuffer, infof, errorf};
///
/// let logger = Logger::new("db");
/// let info = SharedBuffer::new();
/// let error = SharedBuffer::new();
/// logger.redirect(Severity::Info, Arc::new(info.clone())).unwrap();
/// logger.redirect(Severity::Error, Arc::new(error.clone())).unwrap();
///
/// infof!(logger: logger, "opened {} tables", 3);
/// errorf!(logger: logger, "lost connection");
///
/// assert!(info.contents().starts_with('I'));
/// assert!(info.contents().ends_with("opened 3 tables\n"));
/// assert!(error.contents().ends_with("lost connection\n"));
/// ```
pub struct Logger {
    name: String,
    channels: [LineEmitter; 4],
    fixed_sinks: bool,
    verbosity: RwLock<Verbosity>,
    exit: RwLock<Option<ExitHook>>,
    exit_status: AtomicI32,
}

impl Logger {
    /// The name given at construction; empty for the default root logger.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The emitter writing `severity` lines.
    #[must_use]
    pub fn emitter(&self, severity: Severity) -> &LineEmitter {
        &self.channels[severity.index()]
    }

    /// Reports whether the channels are routed into a test harness and cannot be redirected.
    #[must_use]
    pub const fn has_fixed_sinks(&self) -> bool {
        self.fixed_sinks
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("verbosity", &self.verbosity().get())
            .field("fixed_sinks", &self.fixed_sinks)
            .field("exit_status", &self.exit_status())
            .finish_non_exhaustive()
    }
}
