//! crates/logging/src/root.rs
//! The process-wide Root logger and the package-level functions forwarding to it.

use std::fmt;
use std::ops::Deref;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use crate::logger::Logger;
use crate::trace;
use crate::verbosity::Verbosity;

fn cell() -> &'static RwLock<Arc<Logger>> {
    static ROOT: OnceLock<RwLock<Arc<Logger>>> = OnceLock::new();
    ROOT.get_or_init(|| RwLock::new(Arc::new(Logger::default())))
}

/// The current Root logger.
///
/// Root starts as an unnamed standard-error logger sharing the global
/// verbosity. The returned handle keeps pointing at the same instance even if
/// Root is replaced later.
#[must_use]
pub fn root() -> Arc<Logger> {
    let current = cell().read().unwrap_or_else(PoisonError::into_inner);
    Arc::clone(&*current)
}

/// Replaces Root wholesale and returns the previous instance.
///
/// Package-level calls made after the swap go to `logger`.
pub fn set_root(logger: impl Into<Arc<Logger>>) -> Arc<Logger> {
    let logger = logger.into();
    let mut current = cell().write().unwrap_or_else(PoisonError::into_inner);
    trace::root_replaced(current.name(), logger.name());
    std::mem::replace(&mut *current, logger)
}

/// Installs `logger` as Root until the returned guard is dropped.
///
/// ```
/// use std::sync::Arc;
/// use logging::{Logger, RecordingReporter, infof, root, scoped_root};
///
/// let reporter = Arc::new(RecordingReporter::new());
/// {
///     let guard = scoped_root(Logger::for_test(reporter.clone(), "scoped", false));
///     assert_eq!(guard.name(), "scoped");
///     infof!("through root");
/// }
/// assert_eq!(reporter.records().len(), 1);
/// assert_ne!(root().name(), "scoped");
/// ```
pub fn scoped_root(logger: impl Into<Arc<Logger>>) -> RootGuard {
    let current = logger.into();
    let previous = set_root(Arc::clone(&current));
    RootGuard {
        previous: Some(previous),
        current,
    }
}

/// RAII guard returned by [`scoped_root`].
///
/// Dropping the guard reinstates the Root that was active when it was
/// created. The guard dereferences to the scoped logger.
#[must_use = "dropping the guard immediately restores the previous root logger"]
pub struct RootGuard {
    previous: Option<Arc<Logger>>,
    current: Arc<Logger>,
}

impl RootGuard {
    /// Keeps the scoped logger installed as Root and returns it.
    pub fn persist(mut self) -> Arc<Logger> {
        self.previous = None;
        Arc::clone(&self.current)
    }
}

impl Drop for RootGuard {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            let _ = set_root(previous);
        }
    }
}

impl Deref for RootGuard {
    type Target = Logger;

    fn deref(&self) -> &Self::Target {
        &self.current
    }
}

impl fmt::Debug for RootGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RootGuard")
            .field("current", &self.current.name())
            .field("restores", &self.previous.as_ref().map(|logger| logger.name()))
            .finish()
    }
}

/// Writes an Info line through Root when `level` passes Root's threshold.
#[track_caller]
pub fn v(level: i32, args: fmt::Arguments<'_>) {
    root().v(level, args);
}

/// Writes an Info line through Root.
#[track_caller]
pub fn infof(args: fmt::Arguments<'_>) {
    root().infof(args);
}

/// Alias of [`infof`].
#[track_caller]
pub fn printf(args: fmt::Arguments<'_>) {
    root().printf(args);
}

/// Writes a Warn line through Root.
#[track_caller]
pub fn warnf(args: fmt::Arguments<'_>) {
    root().warnf(args);
}

/// Writes an Error line through Root.
#[track_caller]
pub fn errorf(args: fmt::Arguments<'_>) {
    root().errorf(args);
}

/// Writes an Error line through Root, then unwinds with a [`LogPanic`](crate::LogPanic).
#[track_caller]
pub fn panicf(args: fmt::Arguments<'_>) -> ! {
    root().panicf(args)
}

/// Writes a Fatal line through Root, then runs Root's exit hook.
#[track_caller]
pub fn fatalf(args: fmt::Arguments<'_>) {
    root().fatalf(args);
}

/// Reports whether `V` messages at `level` pass Root's threshold.
#[must_use]
pub fn loud_enough(level: i32) -> bool {
    root().loud_enough(level)
}

/// Sets the global threshold shared by every logger that has not detached from it.
pub fn set_verbosity(level: i32) {
    Verbosity::global().set(level);
}

/// The global threshold.
#[must_use]
pub fn verbosity() -> i32 {
    Verbosity::global().get()
}
