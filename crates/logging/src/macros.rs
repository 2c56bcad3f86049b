//! crates/logging/src/macros.rs
//! `format!`-style front ends for the severity operations.
//!
//! Each macro accepts either a plain format string, which logs through Root,
//! or a leading `logger: expr,` to log through a specific instance. Formatting
//! arguments are checked at compile time.

/// Logs at Info when the level passes the verbosity threshold.
///
/// ```
/// use logging::{Logger, Verbosity, v};
///
/// let logger = Logger::new("gate");
/// logger.set_verbosity_source(Verbosity::new(0));
/// v!(logger: logger, 3, "suppressed {}", 3);
/// v!(0, "root logs this at the default level");
/// ```
#[macro_export]
macro_rules! v {
    (logger: $logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.v($level, ::std::format_args!($($arg)+))
    };
    ($level:expr, $($arg:tt)+) => {
        $crate::v($level, ::std::format_args!($($arg)+))
    };
}

/// Logs at Info.
#[macro_export]
macro_rules! infof {
    (logger: $logger:expr, $($arg:tt)+) => {
        $logger.infof(::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::infof(::std::format_args!($($arg)+))
    };
}

/// Logs at Info; same as [`infof!`].
#[macro_export]
macro_rules! printf {
    (logger: $logger:expr, $($arg:tt)+) => {
        $logger.printf(::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::printf(::std::format_args!($($arg)+))
    };
}

/// Logs at Warn.
#[macro_export]
macro_rules! warnf {
    (logger: $logger:expr, $($arg:tt)+) => {
        $logger.warnf(::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::warnf(::std::format_args!($($arg)+))
    };
}

/// Logs at Error.
#[macro_export]
macro_rules! errorf {
    (logger: $logger:expr, $($arg:tt)+) => {
        $logger.errorf(::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::errorf(::std::format_args!($($arg)+))
    };
}

/// Logs at Error, then unwinds with a [`LogPanic`](crate::LogPanic).
#[macro_export]
macro_rules! panicf {
    (logger: $logger:expr, $($arg:tt)+) => {
        $logger.panicf(::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::panicf(::std::format_args!($($arg)+))
    };
}

/// Logs at Fatal, then runs the exit hook.
#[macro_export]
macro_rules! fatalf {
    (logger: $logger:expr, $($arg:tt)+) => {
        $logger.fatalf(::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::fatalf(::std::format_args!($($arg)+))
    };
}
