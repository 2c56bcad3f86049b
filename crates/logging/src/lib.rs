#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging/src/lib.rs
//!
//! # Overview
//!
//! `logging` is a leveled logging facade. Messages are written at one of four
//! severities (Info, Warn, Error, Fatal), plus a verbosity-gated `V` form of
//! Info. Every line is tagged with its severity, optionally timestamped, and
//! attributed to the file and line of the code that logged it.
//!
//! Messages can be addressed two ways: through an individual [`Logger`], or
//! through the package-level functions and macros that forward to the
//! process-wide [`root`] logger.
//!
//! # Design
//!
//! A [`Logger`] holds four channels, each a [`LineEmitter`] reading its
//! destination from a [`SinkSlot`]. [`Logger::redirect`] swaps the sink behind
//! one slot, so the change is picked up by the next line on that channel and
//! by no other channel. Loggers share the global [`Verbosity`] cell until they
//! detach with [`Logger::set_verbosity`].
//!
//! Every logging entry point is `#[track_caller]`, which is how the header's
//! `file:line` names the caller whether it went through a method, a free
//! function or a macro.
//!
//! Error lines written through `panicf` unwind with a [`LogPanic`] payload that
//! [`recover`] turns back into a value. Fatal lines run the logger's
//! [`ExitHook`], which terminates the process by default.
//!
//! # Invariants
//!
//! - A failing sink never surfaces to the caller. A notice naming the channel
//!   and repeating the message goes to the fallback channel instead.
//! - Two loggers created with the same name are independent.
//! - Loggers built with [`Logger::for_test`] report into a [`TestReporter`] and
//!   refuse redirects.
//!
//! # Errors
//!
//! [`RedirectError`] is returned by redirects on harness-backed loggers and
//! [`ParseVerbosityError`] by the verbosity parsers. Logging calls themselves
//! are infallible.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use logging::{Logger, Severity, SharedBuffer, Verbosity, v, warnf};
//!
//! let logger = Logger::new("fetch");
//! let buffer = SharedBuffer::new();
//! logger.redirect_all(Arc::new(buffer.clone())).unwrap();
//! logger.set_verbosity_source(Verbosity::new(1));
//!
//! warnf!(logger: logger, "retrying {}", "mirror-2");
//! v!(logger: logger, 1, "shown");
//! v!(logger: logger, 2, "hidden");
//!
//! let output = buffer.contents();
//! let lines: Vec<&str> = output.lines().collect();
//! assert_eq!(lines.len(), 2);
//! assert!(lines[0].starts_with('W') && lines[0].ends_with("retrying mirror-2"));
//! assert!(lines[1].starts_with('I') && lines[1].ends_with("shown"));
//! ```
//!
//! # See also
//!
//! - [`logging_sink`] for the sink trait and the ready-made destinations.

mod config;
mod error;
mod exit;
mod fallback;
mod harness;
mod logger;
mod macros;
mod panic;
mod root;
mod trace;
mod verbosity;

pub use config::LoggerConfig;
pub use error::{ParseVerbosityError, RedirectError};
pub use exit::{DEFAULT_EXIT_STATUS, ExitHook, process_exit};
pub use fallback::redirect_fallback;
pub use harness::{
    HarnessSink, LibtestReporter, RecordingReporter, ReportMode, TestFailureGuard, TestReporter,
};
pub use logger::Logger;
pub use panic::{LogPanic, recover};
pub use root::{
    RootGuard, errorf, fatalf, infof, loud_enough, panicf, printf, root, scoped_root, set_root,
    set_verbosity, v, verbosity, warnf,
};
pub use verbosity::{
    VERBOSITY_ENV, VERBOSITY_FLAG, Verbosity, parse_level, parse_verbosity_arg,
};

pub use logging_sink::{
    FanOut, LineEmitter, LineFlags, Severity, SharedBuffer, Sink, SinkSlot, Stderr, stderr,
};
#[cfg(feature = "tracing")]
pub use logging_sink::TracingSink;
