#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging-sink/src/lib.rs
//!
//! # Overview
//!
//! `logging-sink` provides the write side of the leveled logging facade: the
//! [`Sink`] capability that destinations implement, a handful of ready-made
//! sinks, the redirectable [`SinkSlot`] and the [`LineEmitter`] that turns a
//! formatted message into one prefixed, timestamped line.
//!
//! # Design
//!
//! A [`LineEmitter`] never owns its destination. It holds a clone of a
//! [`SinkSlot`] handle and re-reads the slot on every write, so the logger that
//! owns the slot can retarget a severity channel at any time without
//! rebuilding the emitter. Sinks take `&self` and are responsible for their own
//! serialization; the emitter performs exactly one [`Sink::write_line`] call per
//! emitted line.
//!
//! # Invariants
//!
//! - Every emitted line starts with the severity's tag character.
//! - Every emitted line ends with exactly one newline.
//! - Redirecting a slot affects the next write only; lines already delivered
//!   stay where they were written.
//!
//! # Errors
//!
//! [`LineEmitter::emit`] surfaces the [`std::io::Error`] reported by the bound
//! sink. [`FanOut`] attempts every member before reporting the first failure.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use logging_sink::{LineEmitter, LineFlags, Severity, SharedBuffer, SinkSlot};
//!
//! let buffer = SharedBuffer::new();
//! let slot = SinkSlot::new(Arc::new(buffer.clone()));
//! let emitter = LineEmitter::new(Severity::Warn, slot.clone(), LineFlags::NONE);
//!
//! emitter.emit(std::panic::Location::caller(), "disk almost full").unwrap();
//! assert_eq!(buffer.contents(), "Wdisk almost full\n");
//!
//! // Retarget the slot; the emitter follows on its next write.
//! let other = SharedBuffer::new();
//! let _previous = slot.replace(Arc::new(other.clone()));
//! emitter.emit(std::panic::Location::caller(), "moved").unwrap();
//! assert_eq!(other.contents(), "Wmoved\n");
//! ```

mod emitter;
mod fan_out;
mod line_flags;
mod severity;
mod sink;
mod slot;
#[cfg(feature = "tracing")]
mod tracing_sink;

pub use emitter::LineEmitter;
pub use fan_out::FanOut;
pub use line_flags::LineFlags;
pub use severity::Severity;
pub use sink::{SharedBuffer, Sink, Stderr, stderr};
pub use slot::SinkSlot;
#[cfg(feature = "tracing")]
pub use tracing_sink::TracingSink;
