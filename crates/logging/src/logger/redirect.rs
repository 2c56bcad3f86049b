use std::sync::atomic::Ordering;
use std::sync::{Arc, PoisonError};

use logging_sink::{Severity, Sink};

use super::Logger;
use crate::error::RedirectError;
use crate::exit::ExitHook;
use crate::trace;
use crate::verbosity::Verbosity;

impl Logger {
    /// Binds `severity`'s channel to `sink` and returns the previous sink.
    ///
    /// The next line on that channel goes to `sink`; other channels are
    /// untouched. A line being written concurrently on another thread may
    /// still land on the previous sink.
    ///
    /// Loggers built with [`Logger::for_test`] reject redirects.
    pub fn redirect(
        &self,
        severity: Severity,
        sink: Arc<dyn Sink>,
    ) -> Result<Arc<dyn Sink>, RedirectError> {
        if self.fixed_sinks {
            return Err(RedirectError::FixedSinks {
                name: self.name.clone(),
                severity,
            });
        }
        trace::channel_redirected(&self.name, severity);
        Ok(self.emitter(severity).slot().replace(sink))
    }

    /// Binds every channel to the same `sink`.
    pub fn redirect_all(&self, sink: Arc<dyn Sink>) -> Result<(), RedirectError> {
        for severity in Severity::ALL {
            let _ = self.redirect(severity, Arc::clone(&sink))?;
        }
        Ok(())
    }

    /// The sink currently bound to `severity`'s channel.
    #[must_use]
    pub fn sink(&self, severity: Severity) -> Arc<dyn Sink> {
        self.emitter(severity).slot().get()
    }

    /// Handle to the verbosity cell this logger consults.
    #[must_use]
    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Detaches from any shared threshold onto a private cell holding `level`.
    ///
    /// Later changes to the global threshold no longer affect this logger.
    pub fn set_verbosity(&self, level: i32) {
        trace::verbosity_detached(&self.name, level);
        self.set_verbosity_source(Verbosity::new(level));
    }

    /// Binds this logger to an existing verbosity cell, possibly shared with others.
    pub fn set_verbosity_source(&self, verbosity: Verbosity) {
        *self
            .verbosity
            .write()
            .unwrap_or_else(PoisonError::into_inner) = verbosity;
    }

    /// Reports whether `V` messages at `level` pass this logger's threshold.
    #[must_use]
    pub fn loud_enough(&self, level: i32) -> bool {
        self.verbosity().loud_enough(level)
    }

    /// Replaces the hook run after a Fatal line. `None` lets Fatal calls return.
    pub fn set_exit(&self, hook: Option<ExitHook>) {
        *self.exit.write().unwrap_or_else(PoisonError::into_inner) = hook;
    }

    /// The hook run after a Fatal line, if any.
    #[must_use]
    pub fn exit_hook(&self) -> Option<ExitHook> {
        self.exit
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Sets the status passed to the exit hook.
    pub fn set_exit_status(&self, status: i32) {
        self.exit_status.store(status, Ordering::Relaxed);
    }

    /// The status passed to the exit hook; defaults to 1.
    #[must_use]
    pub fn exit_status(&self) -> i32 {
        self.exit_status.load(Ordering::Relaxed)
    }
}
