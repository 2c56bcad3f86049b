//! Splits a service's log into cumulative per-severity files.
//!
//! ```text
//! cargo run -p logging --example redirect_demo -- --verbosity=2 /tmp/demo-logs
//! ```

use std::env;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::{Arc, Mutex};

use logging::{FanOut, Logger, Severity, Sink, Verbosity, errorf, infof, parse_verbosity_arg, v, warnf};

fn open(dir: &Path, name: &str) -> io::Result<Arc<dyn Sink>> {
    let file = File::create(dir.join(name))?;
    Ok(Arc::new(Mutex::new(file)))
}

fn main() -> ExitCode {
    let mut dir = env::temp_dir().join("logging-demo");
    for arg in env::args().skip(1) {
        if arg.starts_with('-') {
            match parse_verbosity_arg(&arg) {
                Ok(level) => logging::set_verbosity(level),
                Err(error) => {
                    eprintln!("{error}");
                    return ExitCode::FAILURE;
                }
            }
        } else {
            dir = PathBuf::from(arg);
        }
    }
    if let Err(error) = Verbosity::init_from_env() {
        eprintln!("{error}");
        return ExitCode::FAILURE;
    }

    match run(&dir) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("cannot set up log files in {}: {error}", dir.display());
            ExitCode::FAILURE
        }
    }
}

fn run(dir: &Path) -> io::Result<()> {
    fs::create_dir_all(dir)?;
    let info = open(dir, "INFO")?;
    let warn = open(dir, "WARNING")?;
    let error = open(dir, "ERROR")?;

    let logger = Logger::new("demo");
    let cumulative = [
        (Severity::Info, vec![Arc::clone(&info)]),
        (Severity::Warn, vec![Arc::clone(&warn), Arc::clone(&info)]),
        (Severity::Error, vec![error, warn, info]),
    ];
    for (severity, sinks) in cumulative {
        logger
            .redirect(severity, Arc::new(FanOut::new(sinks)))
            .map_err(io::Error::other)?;
    }

    infof!(logger: logger, "writing logs to {}", dir.display());
    v!(logger: logger, 1, "verbosity is {}", logger.verbosity().get());
    v!(logger: logger, 2, "extra detail at level 2");
    warnf!(logger: logger, "this line lands in WARNING and INFO");
    errorf!(logger: logger, "this line lands in all three files");
    Ok(())
}
