//! crates/logging-sink/src/severity.rs
//! Severity channels and their single-character line tags.

use std::fmt;

/// One of the four independently redirectable output channels.
///
/// Severities are ordered by increasing seriousness. The ordering is used for
/// channel selection only; verbosity gating applies to the Info channel alone.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Severity {
    /// Informational output, including verbosity-gated `V` messages.
    Info,
    /// Potentially harmful situations.
    Warn,
    /// Errors, including the line written before a log-and-panic.
    Error,
    /// The line written before the exit hook runs.
    Fatal,
}

impl Severity {
    /// Every severity, in channel order.
    pub const ALL: [Self; 4] = [Self::Info, Self::Warn, Self::Error, Self::Fatal];

    /// Returns the tag character that starts every line on this channel.
    ///
    /// ```
    /// use logging_sink::Severity;
    ///
    /// assert_eq!(Severity::Info.tag(), 'I');
    /// assert_eq!(Severity::Fatal.tag(), 'F');
    /// ```
    #[must_use]
    pub const fn tag(self) -> char {
        match self {
            Self::Info => 'I',
            Self::Warn => 'W',
            Self::Error => 'E',
            Self::Fatal => 'F',
        }
    }

    /// Returns the lowercase channel name used in failure notices.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
            Self::Fatal => "fatal",
        }
    }

    /// Position of the channel inside per-severity arrays.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
