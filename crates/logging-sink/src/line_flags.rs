/// Controls which header fields a [`LineEmitter`](crate::LineEmitter) writes before each message.
///
/// The header always starts with the severity tag. The remaining fields appear
/// in a fixed order: date, time (optionally with microseconds), then the
/// caller's file and line.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LineFlags {
    /// Write the local date as `YYYY/MM/DD`.
    pub date: bool,
    /// Write the local time as `HH:MM:SS`.
    pub time: bool,
    /// Extend the time with `.uuuuuu`. Implies `time`.
    pub microseconds: bool,
    /// Write the caller's file name without its directories, plus the line number.
    pub short_file: bool,
    /// Write the caller's full file path plus the line number. `short_file` wins when both are set.
    pub long_file: bool,
    /// Use UTC instead of the local time zone.
    pub utc: bool,
}

impl LineFlags {
    /// Tag and message only.
    pub const NONE: Self = Self {
        date: false,
        time: false,
        microseconds: false,
        short_file: false,
        long_file: false,
        utc: false,
    };

    /// Date, time and short file name: the header of every logger built with
    /// `Logger::new`.
    pub const STANDARD: Self = Self {
        date: true,
        time: true,
        short_file: true,
        ..Self::NONE
    };

    /// Time with microseconds and short file name: the header used when lines
    /// are routed into a test harness.
    pub const TEST: Self = Self {
        time: true,
        microseconds: true,
        short_file: true,
        ..Self::NONE
    };

    /// Reports whether any timestamp field is enabled.
    ///
    /// ```
    /// use logging_sink::LineFlags;
    ///
    /// assert!(LineFlags::STANDARD.has_timestamp());
    /// assert!(!LineFlags::NONE.has_timestamp());
    /// ```
    #[must_use]
    pub const fn has_timestamp(self) -> bool {
        self.date || self.time || self.microseconds
    }

    /// Reports whether the caller's location is written.
    #[must_use]
    pub const fn has_location(self) -> bool {
        self.short_file || self.long_file
    }

    /// Returns a copy with the date field toggled.
    #[must_use]
    pub const fn with_date(mut self, enabled: bool) -> Self {
        self.date = enabled;
        self
    }

    /// Returns a copy with microsecond resolution toggled.
    #[must_use]
    pub const fn with_microseconds(mut self, enabled: bool) -> Self {
        self.microseconds = enabled;
        self
    }

    /// Returns a copy that writes timestamps in UTC.
    #[must_use]
    pub const fn with_utc(mut self, enabled: bool) -> Self {
        self.utc = enabled;
        self
    }
}

impl Default for LineFlags {
    fn default() -> Self {
        Self::STANDARD
    }
}
