//! crates/logging/src/config.rs
//! Declarative logger configuration.

use logging_sink::LineFlags;

use crate::exit::DEFAULT_EXIT_STATUS;
use crate::logger::Logger;

/// Settings used to build a standard-error [`Logger`].
///
/// Missing fields take their [`Default`] values when deserialized, so a
/// configuration file only needs to list what it changes.
///
/// ```
/// use logging::LoggerConfig;
///
/// let config = LoggerConfig {
///     name: "worker".into(),
///     verbosity: Some(2),
///     exit_status: 3,
///     ..LoggerConfig::default()
/// };
/// let logger = config.build();
/// assert_eq!(logger.name(), "worker");
/// assert!(logger.loud_enough(2));
/// assert_eq!(logger.exit_status(), 3);
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LoggerConfig {
    /// Name reported in delivery-failure notices.
    pub name: String,
    /// Private threshold; `None` keeps the logger on the global threshold.
    pub verbosity: Option<i32>,
    /// Header fields written before each message.
    pub flags: LineFlags,
    /// Status handed to the exit hook after a Fatal line.
    pub exit_status: i32,
    /// When false, Fatal lines are written and the call returns.
    pub exit_on_fatal: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            verbosity: None,
            flags: LineFlags::STANDARD,
            exit_status: DEFAULT_EXIT_STATUS,
            exit_on_fatal: true,
        }
    }
}

impl LoggerConfig {
    /// Builds a logger writing every channel to standard error.
    #[must_use]
    pub fn build(&self) -> Logger {
        let logger = Logger::with_flags(self.name.clone(), self.flags);
        if let Some(level) = self.verbosity {
            logger.set_verbosity(level);
        }
        logger.set_exit_status(self.exit_status);
        if !self.exit_on_fatal {
            logger.set_exit(None);
        }
        logger
    }
}
