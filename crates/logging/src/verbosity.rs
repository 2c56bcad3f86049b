//! crates/logging/src/verbosity.rs
//! Shared verbosity threshold consulted by `V`-level messages.

use std::env;
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::{Arc, OnceLock};

use crate::error::ParseVerbosityError;

/// Environment variable read by [`Verbosity::init_from_env`].
pub const VERBOSITY_ENV: &str = "LOGGING_VERBOSITY";

/// Name of the command-line flag that conventionally carries the threshold.
pub const VERBOSITY_FLAG: &str = "verbosity";

/// Handle to a verbosity cell.
///
/// Clones share the cell: setting the level through one handle is visible
/// through every other handle at once. Every logger starts out sharing the
/// process-wide cell returned by [`Verbosity::global`], which defaults to 0.
#[derive(Clone)]
pub struct Verbosity {
    level: Arc<AtomicI32>,
}

impl Verbosity {
    /// Creates a private cell holding `level`.
    #[must_use]
    pub fn new(level: i32) -> Self {
        Self {
            level: Arc::new(AtomicI32::new(level)),
        }
    }

    /// Returns a handle to the process-wide cell.
    #[must_use]
    pub fn global() -> Self {
        static GLOBAL: OnceLock<Verbosity> = OnceLock::new();
        GLOBAL.get_or_init(|| Self::new(0)).clone()
    }

    /// Current threshold.
    #[must_use]
    pub fn get(&self) -> i32 {
        self.level.load(Ordering::Relaxed)
    }

    /// Stores a new threshold for every sharer of this cell.
    pub fn set(&self, level: i32) {
        self.level.store(level, Ordering::Relaxed);
    }

    /// Reports whether messages at `level` pass the threshold.
    ///
    /// ```
    /// use logging::Verbosity;
    ///
    /// let verbosity = Verbosity::new(1);
    /// assert!(verbosity.loud_enough(0));
    /// assert!(verbosity.loud_enough(1));
    /// assert!(!verbosity.loud_enough(2));
    /// ```
    #[must_use]
    pub fn loud_enough(&self, level: i32) -> bool {
        level <= self.get()
    }

    /// Reports whether both handles point at the same cell.
    #[must_use]
    pub fn shares_cell_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.level, &other.level)
    }

    /// Seeds the global cell from [`VERBOSITY_ENV`].
    ///
    /// Returns the applied level, or `None` when the variable is unset.
    pub fn init_from_env() -> Result<Option<i32>, ParseVerbosityError> {
        let Ok(raw) = env::var(VERBOSITY_ENV) else {
            return Ok(None);
        };
        let level = parse_level(&raw)?;
        Self::global().set(level);
        Ok(Some(level))
    }
}

impl Default for Verbosity {
    fn default() -> Self {
        Self::global()
    }
}

impl fmt::Debug for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Verbosity").field(&self.get()).finish()
    }
}

impl FromStr for Verbosity {
    type Err = ParseVerbosityError;

    /// Parses a level into a fresh private cell.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_level(s).map(Self::new)
    }
}

/// Parses a decimal level such as `"3"` or `"-1"`.
pub fn parse_level(text: &str) -> Result<i32, ParseVerbosityError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ParseVerbosityError::Empty);
    }
    trimmed
        .parse()
        .map_err(|_| ParseVerbosityError::InvalidNumber(trimmed.to_string()))
}

/// Parses a single command-line token carrying the verbosity flag.
///
/// Accepts `--verbosity=N`, `-verbosity=N` and a bare `N`.
///
/// ```
/// use logging::parse_verbosity_arg;
///
/// assert_eq!(parse_verbosity_arg("--verbosity=4"), Ok(4));
/// assert_eq!(parse_verbosity_arg("-verbosity=2"), Ok(2));
/// assert_eq!(parse_verbosity_arg("7"), Ok(7));
/// assert!(parse_verbosity_arg("--quiet").is_err());
/// ```
pub fn parse_verbosity_arg(token: &str) -> Result<i32, ParseVerbosityError> {
    if let Ok(level) = parse_level(token) {
        return Ok(level);
    }
    let Some(flag) = token
        .strip_prefix("--")
        .or_else(|| token.strip_prefix('-'))
    else {
        return parse_level(token);
    };

    match flag.split_once('=') {
        Some((name, value)) if name == VERBOSITY_FLAG => parse_level(value),
        _ => Err(ParseVerbosityError::UnknownFlag(token.to_string())),
    }
}
