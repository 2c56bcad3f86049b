use std::sync::atomic::AtomicI32;
use std::sync::{Arc, RwLock};

use logging_sink::{LineEmitter, LineFlags, Severity, Sink, SinkSlot, stderr};

use super::Logger;
use crate::exit::{DEFAULT_EXIT_STATUS, ExitHook, process_exit};
use crate::harness::{HarnessSink, ReportMode, TestReporter};
use crate::verbosity::Verbosity;

impl Logger {
    /// Creates a logger writing every channel to standard error.
    ///
    /// The logger shares the global verbosity threshold and terminates the
    /// process with status 1 after a Fatal line. Each call returns an
    /// independent instance, even for a repeated name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_flags(name, LineFlags::STANDARD)
    }

    /// Creates a standard-error logger whose lines carry the given header fields.
    #[must_use]
    pub fn with_flags(name: impl Into<String>, flags: LineFlags) -> Self {
        let sink = stderr();
        Self::assemble(
            name.into(),
            flags,
            |_| Arc::clone(&sink),
            false,
            Some(process_exit()),
        )
    }

    /// Creates a logger that reports into a test harness.
    ///
    /// Info and Warn lines are recorded. Error lines are recorded, and also
    /// fail the test when `fail_on_error` is set. Fatal lines always fail and
    /// abort the test. The channels cannot be redirected afterwards, and no
    /// exit hook is installed since the harness abort already stops the test.
    ///
    /// ```
    /// use std::sync::Arc;
    /// use logging::{Logger, RecordingReporter};
    ///
    /// let reporter = Arc::new(RecordingReporter::new());
    /// let logger = Logger::for_test(reporter.clone(), "suite", true);
    ///
    /// logger.warnf(format_args!("slow query"));
    /// logger.errorf(format_args!("query failed"));
    ///
    /// assert_eq!(reporter.records().len(), 1);
    /// assert_eq!(reporter.failures().len(), 1);
    /// assert!(reporter.failed());
    /// ```
    #[must_use]
    pub fn for_test(
        reporter: Arc<dyn TestReporter>,
        name: impl Into<String>,
        fail_on_error: bool,
    ) -> Self {
        let error_mode = if fail_on_error {
            ReportMode::RecordAndFail
        } else {
            ReportMode::Record
        };
        Self::assemble(
            name.into(),
            LineFlags::TEST,
            |severity| {
                let mode = match severity {
                    Severity::Info | Severity::Warn => ReportMode::Record,
                    Severity::Error => error_mode,
                    Severity::Fatal => ReportMode::RecordAndAbort,
                };
                Arc::new(HarnessSink::new(Arc::clone(&reporter), mode)) as Arc<dyn Sink>
            },
            true,
            None,
        )
    }

    fn assemble(
        name: String,
        flags: LineFlags,
        mut sink_for: impl FnMut(Severity) -> Arc<dyn Sink>,
        fixed_sinks: bool,
        exit: Option<ExitHook>,
    ) -> Self {
        let channels = Severity::ALL
            .map(|severity| LineEmitter::new(severity, SinkSlot::new(sink_for(severity)), flags));
        Self {
            name,
            channels,
            fixed_sinks,
            verbosity: RwLock::new(Verbosity::global()),
            exit: RwLock::new(exit),
            exit_status: AtomicI32::new(DEFAULT_EXIT_STATUS),
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new("")
    }
}
