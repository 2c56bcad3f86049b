//! crates/logging-sink/src/fan_out.rs
//! Composite sink that copies every line to several destinations.

use std::fmt;
use std::io;
use std::sync::Arc;

use crate::sink::Sink;

/// Writes each line to every member sink.
///
/// Fan-out sinks make severity channels cumulative, for example routing Error
/// lines into the Warn and Info files as well. Every member is attempted even
/// when an earlier one fails; the write succeeds only if all members succeed
/// and otherwise reports the first failure.
///
/// ```
/// use std::sync::Arc;
/// use logging_sink::{FanOut, SharedBuffer, Sink};
///
/// let errors = SharedBuffer::new();
/// let everything = SharedBuffer::new();
/// let fan_out = FanOut::new(vec![
///     Arc::new(errors.clone()) as Arc<dyn Sink>,
///     Arc::new(everything.clone()),
/// ]);
///
/// fan_out.write_line(b"Edisk failure\n").unwrap();
/// assert_eq!(errors.contents(), everything.contents());
/// ```
#[derive(Clone, Default)]
pub struct FanOut {
    sinks: Vec<Arc<dyn Sink>>,
}

impl FanOut {
    /// Creates a fan-out over the provided sinks.
    #[must_use]
    pub fn new(sinks: Vec<Arc<dyn Sink>>) -> Self {
        Self { sinks }
    }

    /// Adds another member and returns the extended fan-out.
    #[must_use]
    pub fn with(mut self, sink: Arc<dyn Sink>) -> Self {
        self.sinks.push(sink);
        self
    }

    /// Adds another member in place.
    pub fn push(&mut self, sink: Arc<dyn Sink>) {
        self.sinks.push(sink);
    }

    /// Number of member sinks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    /// Reports whether the fan-out has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

impl Sink for FanOut {
    fn write_line(&self, line: &[u8]) -> io::Result<()> {
        let mut first_error = None;
        for sink in &self.sinks {
            if let Err(error) = sink.write_line(line) {
                first_error.get_or_insert(error);
            }
        }
        first_error.map_or(Ok(()), Err)
    }
}

impl FromIterator<Arc<dyn Sink>> for FanOut {
    fn from_iter<I: IntoIterator<Item = Arc<dyn Sink>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl fmt::Debug for FanOut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FanOut")
            .field("sinks", &self.sinks.len())
            .finish()
    }
}
