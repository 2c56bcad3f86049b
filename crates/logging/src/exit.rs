//! crates/logging/src/exit.rs
//! Exit hooks invoked after a Fatal line has been written.

use std::process;
use std::sync::Arc;

/// Status passed to the exit hook unless a logger overrides it.
pub const DEFAULT_EXIT_STATUS: i32 = 1;

/// Callback run after a Fatal line, receiving the logger's exit status.
///
/// A hook is expected to stop the process. When it returns instead, the
/// Fatal call returns normally and the caller keeps running.
pub type ExitHook = Arc<dyn Fn(i32) + Send + Sync>;

/// The hook installed by `Logger::new`: terminate the process with the given status.
#[must_use]
pub fn process_exit() -> ExitHook {
    Arc::new(|status| process::exit(status))
}
