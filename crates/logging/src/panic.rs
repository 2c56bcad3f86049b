//! crates/logging/src/panic.rs
//! Typed unwind raised by the Panic family and the matching recovery helper.

use std::panic::{self, AssertUnwindSafe};

use thiserror::Error;

/// Unwind payload carried by `panicf`.
///
/// The message has already been written to the Error channel when the unwind
/// starts. Use [`recover`] to stop it; any other panic passing through
/// [`recover`] keeps unwinding.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("{message}")]
pub struct LogPanic {
    message: String,
}

impl LogPanic {
    /// Wraps an already formatted message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The formatted message that was logged.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Consumes the payload and returns the message.
    #[must_use]
    pub fn into_message(self) -> String {
        self.message
    }
}

/// Starts a [`LogPanic`] unwind carrying `message`.
pub(crate) fn raise(message: String) -> ! {
    panic::panic_any(LogPanic { message })
}

/// Runs `f`, converting a [`LogPanic`] unwind into `Err`.
///
/// Panics with any other payload are resumed unchanged.
///
/// ```
/// use logging::{Logger, SharedBuffer, Severity, recover};
/// use std::sync::Arc;
///
/// let logger = Logger::new("svc");
/// logger.redirect(Severity::Error, Arc::new(SharedBuffer::new())).unwrap();
///
/// let caught = recover(|| {
///     logger.panicf(format_args!("bad state {}", 7));
/// })
/// .unwrap_err();
/// assert_eq!(caught.message(), "bad state 7");
/// ```
pub fn recover<F, R>(f: F) -> Result<R, LogPanic>
where
    F: FnOnce() -> R,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => Ok(value),
        Err(payload) => match payload.downcast::<LogPanic>() {
            Ok(log_panic) => Err(*log_panic),
            Err(other) => panic::resume_unwind(other),
        },
    }
}
