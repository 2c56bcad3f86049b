//! crates/logging-sink/src/sink.rs
//! The sink capability plus the destinations every logger needs out of the box.

use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

/// A destination that accepts complete log lines.
///
/// Implementations receive one call per emitted line, including the trailing
/// newline. The method takes `&self`: a sink shared between threads must
/// serialize concurrent writers itself. The logger never adds locking around
/// a sink.
pub trait Sink: Send + Sync {
    /// Appends `line` to the destination.
    fn write_line(&self, line: &[u8]) -> io::Result<()>;
}

impl<S> Sink for Arc<S>
where
    S: Sink + ?Sized,
{
    fn write_line(&self, line: &[u8]) -> io::Result<()> {
        (**self).write_line(line)
    }
}

impl<S> Sink for Box<S>
where
    S: Sink + ?Sized,
{
    fn write_line(&self, line: &[u8]) -> io::Result<()> {
        (**self).write_line(line)
    }
}

/// Any [`Write`] implementor becomes a sink once wrapped in a [`Mutex`].
///
/// This is how already-open files are handed to a logger:
///
/// ```
/// use std::sync::{Arc, Mutex};
/// use logging_sink::Sink;
///
/// let file = tempfile::tempfile().unwrap();
/// let sink: Arc<dyn Sink> = Arc::new(Mutex::new(file));
/// sink.write_line(b"Ihello\n").unwrap();
/// ```
impl<W> Sink for Mutex<W>
where
    W: Write + Send,
{
    fn write_line(&self, line: &[u8]) -> io::Result<()> {
        let mut writer = self.lock().unwrap_or_else(PoisonError::into_inner);
        writer.write_all(line)?;
        writer.flush()
    }
}

/// The process's standard error stream.
#[derive(Clone, Copy, Debug, Default)]
pub struct Stderr;

impl Sink for Stderr {
    fn write_line(&self, line: &[u8]) -> io::Result<()> {
        io::stderr().lock().write_all(line)
    }
}

/// Returns a shareable handle to standard error, the default for every channel.
#[must_use]
pub fn stderr() -> Arc<dyn Sink> {
    Arc::new(Stderr)
}

/// Cloneable in-memory sink.
///
/// Clones share one buffer, so a test can keep a handle while the logger owns
/// another. The buffer only grows until [`clear`](Self::clear) is called.
///
/// ```
/// use logging_sink::{SharedBuffer, Sink};
///
/// let buffer = SharedBuffer::new();
/// let handle = buffer.clone();
/// buffer.write_line(b"Eboom\n").unwrap();
/// assert_eq!(handle.contents(), "Eboom\n");
///
/// handle.clear();
/// assert!(buffer.is_empty());
/// ```
#[derive(Clone, Default)]
pub struct SharedBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    /// Creates an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the buffered output decoded as UTF-8, replacing invalid sequences.
    #[must_use]
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.lock()).into_owned()
    }

    /// Returns a copy of the raw buffered bytes.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        self.lock().clone()
    }

    /// Number of buffered bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Reports whether nothing has been written since creation or the last clear.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Discards everything written so far.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<u8>> {
        self.bytes.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Sink for SharedBuffer {
    fn write_line(&self, line: &[u8]) -> io::Result<()> {
        self.lock().extend_from_slice(line);
        Ok(())
    }
}

impl fmt::Debug for SharedBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedBuffer")
            .field("len", &self.len())
            .finish()
    }
}
