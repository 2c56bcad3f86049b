//! Integration tests for caller attribution.
//!
//! The `file:line` header must name the statement that logged, whether the
//! call went through a logger method, a macro, or a package-level function
//! forwarding to Root.

use std::sync::{Arc, Mutex, MutexGuard, OnceLock};

use logging::{LineFlags, Logger, RecordingReporter, Severity, SharedBuffer, scoped_root};

fn root_lock() -> MutexGuard<'static, ()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn file_only() -> LineFlags {
    LineFlags {
        short_file: true,
        ..LineFlags::NONE
    }
}

fn captured_logger(name: &str) -> (Logger, SharedBuffer) {
    let logger = Logger::with_flags(name, file_only());
    let buffer = SharedBuffer::new();
    logger
        .redirect_all(Arc::new(buffer.clone()))
        .expect("redirect allowed");
    logger.set_exit(None);
    (logger, buffer)
}

// ============================================================================
// Method paths
// ============================================================================

/// Verifies methods and macros report this file and the logging line.
#[test]
fn method_and_macro_calls_name_this_file() {
    let (logger, buffer) = captured_logger("method");

    let method_line = line!() + 1;
    logger.warnf(format_args!("method"));
    let macro_line = line!() + 1;
    logging::errorf!(logger: logger, "macro");

    assert_eq!(
        buffer.contents(),
        format!("Wcall_site.rs:{method_line}: method\nEcall_site.rs:{macro_line}: macro\n")
    );
}

/// Verifies the gated form reports the caller too.
#[test]
fn v_reports_the_caller() {
    let (logger, buffer) = captured_logger("gated");
    logger.set_verbosity(2);

    let line = line!() + 1;
    logging::v!(logger: logger, 2, "loud");

    assert_eq!(buffer.contents(), format!("Icall_site.rs:{line}: loud\n"));
}

// ============================================================================
// Package-level paths
// ============================================================================

/// Verifies package-level functions report the same location a method call would.
#[test]
fn package_functions_name_this_file() {
    let _lock = root_lock();
    let (logger, buffer) = captured_logger("root");
    let _root = scoped_root(logger);

    let function_line = line!() + 1;
    logging::infof(format_args!("function"));
    let macro_line = line!() + 1;
    logging::warnf!("macro {}", 2);

    assert_eq!(
        buffer.contents(),
        format!("Icall_site.rs:{function_line}: function\nWcall_site.rs:{macro_line}: macro 2\n")
    );
}

/// Verifies every package-level entry point forwards to the current Root.
#[test]
fn package_functions_forward_to_root() {
    let _lock = root_lock();
    let reporter = Arc::new(RecordingReporter::new());
    let root = scoped_root(Logger::for_test(reporter.clone(), "forward", true));
    root.set_verbosity(1);

    logging::infof!("i");
    logging::printf!("p");
    logging::warnf!("w");
    logging::v!(1, "v1");
    logging::v!(2, "v2");
    logging::errorf!("e");
    logging::fatalf!("f");

    let tags: String = reporter
        .records()
        .iter()
        .filter_map(|line| line.chars().next())
        .collect();
    assert_eq!(tags, "IIWI");
    assert_eq!(reporter.failures().len(), 1);
    assert_eq!(reporter.aborts().len(), 1);
    assert!(logging::loud_enough(1));
    assert!(!logging::loud_enough(2));
}

/// Verifies the guard restores the previous Root on drop.
#[test]
fn scoped_root_is_restored() {
    let _lock = root_lock();
    let before = logging::root();
    {
        let (logger, buffer) = captured_logger("temporary");
        let _root = scoped_root(logger);
        logging::errorf!("inside");
        assert!(buffer.contents().ends_with("inside\n"));
        assert_eq!(logging::root().name(), "temporary");
    }
    assert!(Arc::ptr_eq(&before, &logging::root()));
    assert!(!before.has_fixed_sinks());
    assert_eq!(before.emitter(Severity::Info).severity(), Severity::Info);
}

/// Verifies `persist` keeps the scoped logger installed after the guard is gone.
#[test]
fn persisted_root_stays_installed() {
    let _lock = root_lock();
    let before = logging::root();
    let (logger, buffer) = captured_logger("kept");

    let kept = scoped_root(logger).persist();
    logging::infof!("after persist");

    assert!(Arc::ptr_eq(&kept, &logging::root()));
    assert!(buffer.contents().ends_with("after persist\n"));
    let replaced = logging::set_root(before);
    assert!(Arc::ptr_eq(&replaced, &kept));
}
