//! Integration tests for the verbosity gate on `V` messages.
//!
//! A `V(level)` message is written exactly when `level` does not exceed the
//! threshold the logger consults at the time of the call.

use std::sync::Arc;

use logging::{
    LineFlags, Logger, ParseVerbosityError, Severity, SharedBuffer, Verbosity,
    parse_verbosity_arg,
};
use proptest::prelude::*;

fn gated_logger(verbosity: &Verbosity) -> (Logger, SharedBuffer) {
    let logger = Logger::with_flags("gate", LineFlags::NONE);
    let buffer = SharedBuffer::new();
    let _ = logger
        .redirect(Severity::Info, Arc::new(buffer.clone()))
        .expect("redirect allowed");
    logger.set_verbosity_source(verbosity.clone());
    (logger, buffer)
}

proptest! {
    /// Verifies V output appears if and only if the level is within the threshold.
    #[test]
    fn v_writes_iff_level_within_threshold(threshold in -20i32..20, level in -20i32..20) {
        let verbosity = Verbosity::new(threshold);
        let (logger, buffer) = gated_logger(&verbosity);

        logging::v!(logger: logger, level, "at {}", level);

        prop_assert_eq!(logger.loud_enough(level), level <= threshold);
        if level <= threshold {
            prop_assert_eq!(buffer.contents(), format!("Iat {level}\n"));
        } else {
            prop_assert!(buffer.is_empty());
        }
    }

    /// Verifies any integer round-trips through the flag syntax.
    #[test]
    fn flag_tokens_parse_any_level(level in any::<i32>()) {
        prop_assert_eq!(parse_verbosity_arg(&format!("--verbosity={level}")), Ok(level));
        prop_assert_eq!(parse_verbosity_arg(&level.to_string()), Ok(level));
    }
}

/// Verifies a threshold change is seen by the next call.
#[test]
fn threshold_changes_apply_to_the_next_call() {
    let verbosity = Verbosity::new(0);
    let (logger, buffer) = gated_logger(&verbosity);

    logging::v!(logger: logger, 2, "early");
    verbosity.set(2);
    logging::v!(logger: logger, 2, "late");

    assert_eq!(buffer.contents(), "Ilate\n");
}

/// Verifies a private threshold ignores later changes to the shared one.
#[test]
fn detached_logger_ignores_the_shared_cell() {
    let shared = Verbosity::new(0);
    let (logger, _) = gated_logger(&shared);

    logger.set_verbosity(1);
    shared.set(10);

    assert!(logger.loud_enough(1));
    assert!(!logger.loud_enough(2));
}

/// Verifies malformed flag tokens are rejected with a typed error.
#[test]
fn malformed_tokens_are_rejected() {
    assert_eq!(
        parse_verbosity_arg("--verbosity=loud"),
        Err(ParseVerbosityError::InvalidNumber("loud".to_string()))
    );
    assert!(matches!(
        parse_verbosity_arg("--vmodule=3"),
        Err(ParseVerbosityError::UnknownFlag(_))
    ));
}
