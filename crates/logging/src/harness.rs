//! crates/logging/src/harness.rs
//! Routing of logger output into a unit-test harness.
//!
//! A [`TestReporter`] stands in for the harness: it records lines, marks the
//! test as failed, or aborts it. [`HarnessSink`] adapts a reporter to the
//! [`Sink`] trait so that `Logger::for_test` can bind one per channel.

use std::fmt;
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread;

use logging_sink::Sink;

/// Harness capabilities a test logger reports into.
///
/// Lines arrive without their trailing newline.
pub trait TestReporter: Send + Sync {
    /// Records a line in the test's output.
    fn record(&self, line: &str);

    /// Records a line and marks the test as failed; the test keeps running.
    fn record_and_fail(&self, line: &str);

    /// Records a line, marks the test as failed and stops it.
    ///
    /// Implementations usually panic. One that returns lets the logging call return too.
    fn record_and_abort(&self, line: &str);
}

/// Which reporter capability a [`HarnessSink`] invokes.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ReportMode {
    /// [`TestReporter::record`].
    Record,
    /// [`TestReporter::record_and_fail`].
    RecordAndFail,
    /// [`TestReporter::record_and_abort`].
    RecordAndAbort,
}

/// Sink forwarding each line to a [`TestReporter`] using a fixed [`ReportMode`].
pub struct HarnessSink {
    reporter: Arc<dyn TestReporter>,
    mode: ReportMode,
}

impl HarnessSink {
    /// Creates a sink reporting into `reporter` with `mode`.
    #[must_use]
    pub fn new(reporter: Arc<dyn TestReporter>, mode: ReportMode) -> Self {
        Self { reporter, mode }
    }
}

impl fmt::Debug for HarnessSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HarnessSink")
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}

impl Sink for HarnessSink {
    fn write_line(&self, line: &[u8]) -> io::Result<()> {
        let text = String::from_utf8_lossy(line);
        let text = text.strip_suffix('\n').unwrap_or(&text);
        match self.mode {
            ReportMode::Record => self.reporter.record(text),
            ReportMode::RecordAndFail => self.reporter.record_and_fail(text),
            ReportMode::RecordAndAbort => self.reporter.record_and_abort(text),
        }
        Ok(())
    }
}

/// Reporter for `#[test]` functions run by libtest.
///
/// Lines are printed to captured test output. Aborts panic straight away.
/// A failure is written to a flag shared with the [`TestFailureGuard`] handed
/// out by [`guarded`](Self::guarded); the test owns that guard, and dropping
/// it fails the test after its remaining steps. The logger holding the
/// reporter may outlive the test (for example as Root) without delaying or
/// moving the failure.
#[derive(Debug)]
pub struct LibtestReporter {
    failed: Arc<AtomicBool>,
}

impl LibtestReporter {
    /// Creates a reporter and the guard that turns its failures into a test failure.
    ///
    /// ```should_panic
    /// use logging::{LibtestReporter, Logger};
    ///
    /// let (reporter, _guard) = LibtestReporter::guarded();
    /// let logger = Logger::for_test(reporter, "doc", true);
    /// logger.errorf(format_args!("fails when _guard goes out of scope"));
    /// ```
    pub fn guarded() -> (Arc<Self>, TestFailureGuard) {
        let failed = Arc::new(AtomicBool::new(false));
        let reporter = Arc::new(Self {
            failed: Arc::clone(&failed),
        });
        (reporter, TestFailureGuard { failed })
    }

    /// Reports whether a failure has been recorded.
    #[must_use]
    pub fn failed(&self) -> bool {
        self.failed.load(Ordering::SeqCst)
    }
}

impl TestReporter for LibtestReporter {
    fn record(&self, line: &str) {
        println!("{line}");
    }

    fn record_and_fail(&self, line: &str) {
        println!("{line}");
        self.failed.store(true, Ordering::SeqCst);
    }

    fn record_and_abort(&self, line: &str) {
        self.failed.store(true, Ordering::SeqCst);
        panic!("{line}");
    }
}

/// Fails the running test on drop when its [`LibtestReporter`] recorded a failure.
///
/// Nothing happens when the thread is already unwinding, so an abort is
/// reported once.
#[must_use = "dropping the guard immediately checks for failures recorded so far"]
#[derive(Debug)]
pub struct TestFailureGuard {
    failed: Arc<AtomicBool>,
}

impl TestFailureGuard {
    /// Reports whether the paired reporter recorded a failure.
    #[must_use]
    pub fn failed(&self) -> bool {
        self.failed.load(Ordering::SeqCst)
    }
}

impl Drop for TestFailureGuard {
    fn drop(&mut self) {
        if self.failed() && !thread::panicking() {
            panic!("test logged an error");
        }
    }
}

/// Reporter that keeps every line in memory for later assertions.
///
/// Aborts are recorded and the call returns, so code under test keeps running.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    records: Mutex<Vec<String>>,
    failures: Mutex<Vec<String>>,
    aborts: Mutex<Vec<String>>,
}

impl RecordingReporter {
    /// Creates an empty transcript.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines passed to [`TestReporter::record`].
    #[must_use]
    pub fn records(&self) -> Vec<String> {
        snapshot(&self.records)
    }

    /// Lines passed to [`TestReporter::record_and_fail`].
    #[must_use]
    pub fn failures(&self) -> Vec<String> {
        snapshot(&self.failures)
    }

    /// Lines passed to [`TestReporter::record_and_abort`].
    #[must_use]
    pub fn aborts(&self) -> Vec<String> {
        snapshot(&self.aborts)
    }

    /// Reports whether any failing or aborting line was recorded.
    #[must_use]
    pub fn failed(&self) -> bool {
        !self.failures().is_empty() || !self.aborts().is_empty()
    }
}

impl TestReporter for RecordingReporter {
    fn record(&self, line: &str) {
        push(&self.records, line);
    }

    fn record_and_fail(&self, line: &str) {
        push(&self.failures, line);
    }

    fn record_and_abort(&self, line: &str) {
        push(&self.aborts, line);
    }
}

fn push(lines: &Mutex<Vec<String>>, line: &str) {
    lines
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .push(line.to_string());
}

fn snapshot(lines: &Mutex<Vec<String>>) -> Vec<String> {
    lines.lock().unwrap_or_else(PoisonError::into_inner).clone()
}
