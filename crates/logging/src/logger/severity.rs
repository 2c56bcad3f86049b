use std::fmt;
use std::panic::Location;

use logging_sink::Severity;

use super::Logger;
use crate::fallback::report_delivery_failure;
use crate::panic::raise;

impl Logger {
    /// Formats `args` and writes it to `severity`'s channel, returning the message.
    ///
    /// A sink failure is reported on the fallback channel and never reaches
    /// the caller.
    #[track_caller]
    fn write(&self, severity: Severity, args: fmt::Arguments<'_>) -> String {
        let message = fmt::format(args);
        let caller = Location::caller();
        if let Err(error) = self.emitter(severity).emit(caller, &message) {
            report_delivery_failure(&self.name, severity, &error, &message);
        }
        message
    }

    /// Writes an Info line only when `level` passes the verbosity threshold.
    #[track_caller]
    pub fn v(&self, level: i32, args: fmt::Arguments<'_>) {
        if self.loud_enough(level) {
            self.write(Severity::Info, args);
        }
    }

    /// Writes an Info line.
    #[track_caller]
    pub fn infof(&self, args: fmt::Arguments<'_>) {
        self.write(Severity::Info, args);
    }

    /// Same as [`infof`](Self::infof), for code written against a plain `printf`-style logger.
    #[track_caller]
    pub fn printf(&self, args: fmt::Arguments<'_>) {
        self.write(Severity::Info, args);
    }

    /// Writes a Warn line.
    #[track_caller]
    pub fn warnf(&self, args: fmt::Arguments<'_>) {
        self.write(Severity::Warn, args);
    }

    /// Writes an Error line.
    #[track_caller]
    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        self.write(Severity::Error, args);
    }

    /// Writes an Error line, then unwinds with a [`LogPanic`](crate::LogPanic) carrying the message.
    #[track_caller]
    pub fn panicf(&self, args: fmt::Arguments<'_>) -> ! {
        let message = self.write(Severity::Error, args);
        raise(message)
    }

    /// Writes a Fatal line, then runs the exit hook with the exit status.
    ///
    /// Returns normally when no hook is installed or the hook itself returns.
    #[track_caller]
    pub fn fatalf(&self, args: fmt::Arguments<'_>) {
        self.write(Severity::Fatal, args);
        if let Some(hook) = self.exit_hook() {
            hook(self.exit_status());
        }
    }
}
