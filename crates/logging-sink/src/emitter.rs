//! crates/logging-sink/src/emitter.rs
//! Renders one prefixed, timestamped line per message and hands it to the bound sink.

use std::fmt::{self, Write as _};
use std::io;
use std::panic::Location;
use std::sync::OnceLock;

use time::format_description::FormatItem;
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

use crate::line_flags::LineFlags;
use crate::severity::Severity;
use crate::slot::SinkSlot;

/// Writes formatted messages for one severity channel.
///
/// The emitter is bound to a [`SinkSlot`] rather than a sink, so a redirect
/// through the slot is picked up by the very next [`emit`](Self::emit). The
/// caller's location is passed in explicitly; callers obtain it with
/// [`Location::caller`] from a `#[track_caller]` chain so the reported file
/// and line belong to user code rather than logging internals.
#[derive(Clone)]
pub struct LineEmitter {
    severity: Severity,
    slot: SinkSlot,
    flags: LineFlags,
}

impl LineEmitter {
    /// Creates an emitter for `severity` writing through `slot`.
    #[must_use]
    pub fn new(severity: Severity, slot: SinkSlot, flags: LineFlags) -> Self {
        Self {
            severity,
            slot,
            flags,
        }
    }

    /// Severity whose tag starts each line.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    /// Header fields written before each message.
    #[must_use]
    pub const fn flags(&self) -> LineFlags {
        self.flags
    }

    /// The slot this emitter reads its destination from.
    #[must_use]
    pub const fn slot(&self) -> &SinkSlot {
        &self.slot
    }

    /// Writes `message` as one line to the sink currently bound to the slot.
    ///
    /// Exactly one [`Sink::write_line`](crate::Sink::write_line) call is made.
    /// Errors from the sink are returned unchanged.
    pub fn emit(&self, caller: &Location<'_>, message: &str) -> io::Result<()> {
        let line = self.render_at(now(self.flags), caller, message);
        self.slot.write_line(line.as_bytes())
    }

    /// Renders the line that [`emit`](Self::emit) would write at instant `at`.
    ///
    /// ```
    /// use std::panic::Location;
    /// use logging_sink::{LineEmitter, LineFlags, Severity, SinkSlot};
    /// use time::macros::datetime;
    ///
    /// let emitter = LineEmitter::new(Severity::Error, SinkSlot::stderr(), LineFlags::STANDARD);
    /// let line = emitter.render_at(datetime!(2024-03-09 07:05:01 UTC), Location::caller(), "lost");
    /// assert!(line.starts_with("E2024/03/09 07:05:01 "));
    /// assert!(line.ends_with(": lost\n"));
    /// ```
    #[must_use]
    pub fn render_at(&self, at: OffsetDateTime, caller: &Location<'_>, message: &str) -> String {
        let mut line = String::with_capacity(message.len() + 48);
        line.push(self.severity.tag());
        // Writing into a String cannot fail.
        let _ = self.write_header(&mut line, at, caller);
        line.push_str(message);
        if !message.ends_with('\n') {
            line.push('\n');
        }
        line
    }

    fn write_header(
        &self,
        out: &mut String,
        at: OffsetDateTime,
        caller: &Location<'_>,
    ) -> fmt::Result {
        let flags = self.flags;
        if flags.date {
            push_formatted(out, at, DATE_FORMAT)?;
        }
        if flags.microseconds {
            push_formatted(out, at, TIME_MICROS_FORMAT)?;
        } else if flags.time {
            push_formatted(out, at, TIME_FORMAT)?;
        }
        if flags.short_file {
            write!(out, "{}:{}: ", short_file(caller.file()), caller.line())?;
        } else if flags.long_file {
            write!(out, "{}:{}: ", caller.file(), caller.line())?;
        }
        Ok(())
    }
}

impl fmt::Debug for LineEmitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineEmitter")
            .field("severity", &self.severity)
            .field("flags", &self.flags)
            .finish_non_exhaustive()
    }
}

/// Date field of the header, followed by its separating space.
const DATE_FORMAT: &[FormatItem<'static>] =
    format_description!("[year]/[month padding:zero]/[day padding:zero] ");

/// Time field at second resolution.
const TIME_FORMAT: &[FormatItem<'static>] =
    format_description!("[hour padding:zero]:[minute padding:zero]:[second padding:zero] ");

/// Time field at microsecond resolution.
const TIME_MICROS_FORMAT: &[FormatItem<'static>] = format_description!(
    "[hour padding:zero]:[minute padding:zero]:[second padding:zero].[subsecond digits:6] "
);

fn push_formatted(
    out: &mut String,
    at: OffsetDateTime,
    format: &[FormatItem<'static>],
) -> fmt::Result {
    let text = at.format(format).map_err(|_| fmt::Error)?;
    out.push_str(&text);
    Ok(())
}

fn short_file(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

fn now(flags: LineFlags) -> OffsetDateTime {
    let utc = OffsetDateTime::now_utc();
    if flags.utc || !flags.has_timestamp() {
        return utc;
    }
    utc.to_offset(local_offset())
}

/// The local offset is resolved once; platforms that refuse to report it
/// from a multi-threaded process fall back to UTC.
fn local_offset() -> UtcOffset {
    static OFFSET: OnceLock<UtcOffset> = OnceLock::new();
    *OFFSET.get_or_init(|| UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC))
}
