//! Integration tests for line emission through slots and real sinks.

use std::fs::{self, File};
use std::panic::Location;
use std::sync::{Arc, Mutex};

use logging_sink::{FanOut, LineEmitter, LineFlags, Severity, SharedBuffer, Sink, SinkSlot};
use regex::Regex;

/// Verifies every preset produces the expected header shape with a live clock.
#[test]
fn presets_render_expected_headers() {
    let cases = [
        (
            LineFlags::STANDARD,
            r"^I\d{4}/\d{2}/\d{2} \d{2}:\d{2}:\d{2} emit_lines\.rs:\d+: hi\n$",
        ),
        (
            LineFlags::TEST,
            r"^I\d{2}:\d{2}:\d{2}\.\d{6} emit_lines\.rs:\d+: hi\n$",
        ),
        (LineFlags::NONE, r"^Ihi\n$"),
    ];

    for (flags, pattern) in cases {
        let buffer = SharedBuffer::new();
        let emitter = LineEmitter::new(
            Severity::Info,
            SinkSlot::new(Arc::new(buffer.clone())),
            flags,
        );
        emitter.emit(Location::caller(), "hi").expect("write succeeds");
        let line = buffer.contents();
        let pattern = Regex::new(pattern).expect("valid pattern");
        assert!(pattern.is_match(&line), "{flags:?} produced {line:?}");
    }
}

/// Verifies cumulative channels written to files, the way a service splits logs.
#[test]
fn cumulative_files_through_fan_out() {
    let dir = tempfile::tempdir().expect("temp dir");
    let open = |name: &str| -> Arc<dyn Sink> {
        let file = File::create(dir.path().join(name)).expect("create log file");
        Arc::new(Mutex::new(file))
    };
    let info = open("info.log");
    let error = open("error.log");

    let info_emitter = LineEmitter::new(
        Severity::Info,
        SinkSlot::new(Arc::clone(&info)),
        LineFlags::NONE,
    );
    let error_emitter = LineEmitter::new(
        Severity::Error,
        SinkSlot::new(Arc::new(FanOut::new(vec![error, info]))),
        LineFlags::NONE,
    );

    info_emitter
        .emit(Location::caller(), "started")
        .expect("write succeeds");
    error_emitter
        .emit(Location::caller(), "crashed")
        .expect("write succeeds");

    let info_log = fs::read_to_string(dir.path().join("info.log")).expect("read info.log");
    let error_log = fs::read_to_string(dir.path().join("error.log")).expect("read error.log");
    assert_eq!(info_log, "Istarted\nEcrashed\n");
    assert_eq!(error_log, "Ecrashed\n");
}

/// Verifies emitters sharing one slot all follow a single replacement.
#[test]
fn shared_slot_retargets_every_emitter() {
    let slot = SinkSlot::default();
    let emitters = Severity::ALL.map(|severity| LineEmitter::new(severity, slot.clone(), LineFlags::NONE));
    let buffer = SharedBuffer::new();
    let _previous = slot.replace(Arc::new(buffer.clone()));

    for emitter in &emitters {
        emitter.emit(Location::caller(), "x").expect("write succeeds");
    }

    assert_eq!(buffer.contents(), "Ix\nWx\nEx\nFx\n");
}
