//! Integration tests for the Panic and Fatal families.
//!
//! Panic lines are written at Error and then unwind with a `LogPanic`.
//! Fatal lines are written at Fatal and then run the exit hook, falling
//! through when the hook is absent or returns.

use std::panic;
use std::sync::atomic::{AtomicI32, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock};

use logging::{ExitHook, LineFlags, LogPanic, Logger, SharedBuffer, recover, scoped_root};

fn root_lock() -> MutexGuard<'static, ()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn captured_logger(name: &str) -> (Logger, SharedBuffer) {
    let logger = Logger::with_flags(name, LineFlags::NONE);
    let buffer = SharedBuffer::new();
    logger
        .redirect_all(Arc::new(buffer.clone()))
        .expect("redirect allowed");
    (logger, buffer)
}

fn recording_hook() -> (ExitHook, Arc<AtomicI32>, Arc<AtomicUsize>) {
    let status = Arc::new(AtomicI32::new(-1));
    let calls = Arc::new(AtomicUsize::new(0));
    let hook_status = Arc::clone(&status);
    let hook_calls = Arc::clone(&calls);
    let hook: ExitHook = Arc::new(move |code| {
        hook_status.store(code, Ordering::SeqCst);
        hook_calls.fetch_add(1, Ordering::SeqCst);
    });
    (hook, status, calls)
}

// ============================================================================
// Panic family
// ============================================================================

/// Verifies the line is written before the unwind and the payload carries the message.
#[test]
fn panicf_writes_then_unwinds() {
    let (logger, buffer) = captured_logger("panic");

    let caught = recover(|| {
        logging::panicf!(logger: logger, "lost {} of {}", 2, 3);
    })
    .expect_err("panicf unwinds");

    assert_eq!(caught, LogPanic::new("lost 2 of 3"));
    assert_eq!(buffer.contents(), "Elost 2 of 3\n");
}

/// Verifies the unwind can also be caught with `catch_unwind` and downcast.
#[test]
fn panic_payload_is_a_log_panic() {
    let (logger, _) = captured_logger("payload");

    let payload = panic::catch_unwind(panic::AssertUnwindSafe(|| {
        logger.panicf(format_args!("raw"));
    }))
    .expect_err("panicf unwinds");

    let log_panic = payload
        .downcast_ref::<LogPanic>()
        .expect("payload is a LogPanic");
    assert_eq!(log_panic.message(), "raw");
}

/// Verifies code after a recovered panic keeps logging normally.
#[test]
fn logging_continues_after_recovery() {
    let (logger, buffer) = captured_logger("resume");

    let _ = recover(|| {
        logger.panicf(format_args!("first"));
    });
    logging::infof!(logger: logger, "second");

    assert_eq!(buffer.contents(), "Efirst\nIsecond\n");
}

// ============================================================================
// Fatal family
// ============================================================================

/// Verifies the hook receives the configured status after the line is written.
#[test]
fn fatalf_runs_hook_with_status() {
    let (logger, buffer) = captured_logger("fatal");
    let (hook, status, calls) = recording_hook();
    logger.set_exit(Some(hook));
    logger.set_exit_status(42);

    logging::fatalf!(logger: logger, "bye");

    assert_eq!(buffer.contents(), "Fbye\n");
    assert_eq!(status.load(Ordering::SeqCst), 42);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

/// Verifies the default status handed to the hook is 1.
#[test]
fn default_exit_status_is_one() {
    let (logger, _) = captured_logger("status");
    let (hook, status, _) = recording_hook();
    logger.set_exit(Some(hook));

    logger.fatalf(format_args!("down"));

    assert_eq!(status.load(Ordering::SeqCst), logging::DEFAULT_EXIT_STATUS);
}

/// Verifies execution continues past Fatal when no hook is installed.
#[test]
fn fatalf_without_hook_returns() {
    let (logger, buffer) = captured_logger("nohook");
    logger.set_exit(None);

    logger.fatalf(format_args!("one"));
    let reached = true;
    logger.fatalf(format_args!("two"));

    assert!(reached);
    assert_eq!(buffer.contents(), "Fone\nFtwo\n");
}

/// Verifies package-level Fatal and Panic go through the current Root.
#[test]
fn package_level_panic_and_fatal_use_root() {
    let _lock = root_lock();
    let (logger, buffer) = captured_logger("root");
    let (hook, status, _) = recording_hook();
    logger.set_exit(Some(hook));
    logger.set_exit_status(9);
    let _root = scoped_root(logger);

    logging::fatalf!("via root");
    let caught = recover(|| {
        logging::panicf!("also via root");
    })
    .expect_err("panicf unwinds");

    assert_eq!(status.load(Ordering::SeqCst), 9);
    assert_eq!(caught.message(), "also via root");
    assert_eq!(buffer.contents(), "Fvia root\nEalso via root\n");
}
