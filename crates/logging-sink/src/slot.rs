//! crates/logging-sink/src/slot.rs
//! Redirectable binding between a severity channel and its current sink.

use std::fmt;
use std::io;
use std::mem;
use std::sync::{Arc, PoisonError, RwLock};

use crate::sink::{Sink, stderr};

/// Shared, replaceable reference to a sink.
///
/// Cloning a slot clones the handle, not the binding: every clone observes a
/// [`replace`](Self::replace) made through any other clone. The lock only
/// guards the pointer swap. A write reads the current sink, releases the lock
/// and then writes, so a line racing with a redirect may land on either the
/// old or the new sink.
#[derive(Clone)]
pub struct SinkSlot {
    current: Arc<RwLock<Arc<dyn Sink>>>,
}

impl SinkSlot {
    /// Creates a slot bound to `sink`.
    #[must_use]
    pub fn new(sink: Arc<dyn Sink>) -> Self {
        Self {
            current: Arc::new(RwLock::new(sink)),
        }
    }

    /// Creates a slot bound to standard error.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(stderr())
    }

    /// Returns the sink bound right now.
    #[must_use]
    pub fn get(&self) -> Arc<dyn Sink> {
        let current = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*current)
    }

    /// Binds `sink` and returns the previous binding.
    ///
    /// The previous sink is handed back so callers can flush or inspect what
    /// was written before the switch.
    #[must_use = "the returned sink holds the output written before the redirect"]
    pub fn replace(&self, mut sink: Arc<dyn Sink>) -> Arc<dyn Sink> {
        let mut current = self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        mem::swap(&mut *current, &mut sink);
        sink
    }

    /// Writes `line` to the sink bound at the time of the call.
    pub fn write_line(&self, line: &[u8]) -> io::Result<()> {
        self.get().write_line(line)
    }

    /// Reports whether two handles share one binding.
    #[must_use]
    pub fn same_slot(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.current, &other.current)
    }
}

impl Default for SinkSlot {
    fn default() -> Self {
        Self::stderr()
    }
}

impl fmt::Debug for SinkSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SinkSlot").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::SharedBuffer;

    #[test]
    fn replace_returns_previous_binding() {
        let first = SharedBuffer::new();
        let second = SharedBuffer::new();
        let slot = SinkSlot::new(Arc::new(first.clone()));

        slot.write_line(b"Ibefore\n").expect("write succeeds");
        let previous = slot.replace(Arc::new(second.clone()));
        slot.write_line(b"Iafter\n").expect("write succeeds");

        previous.write_line(b"Ilate\n").expect("write succeeds");
        assert_eq!(first.contents(), "Ibefore\nIlate\n");
        assert_eq!(second.contents(), "Iafter\n");
    }

    #[test]
    fn clones_follow_redirects() {
        let slot = SinkSlot::default();
        let clone = slot.clone();
        assert!(slot.same_slot(&clone));

        let buffer = SharedBuffer::new();
        let _ = slot.replace(Arc::new(buffer.clone()));
        clone.write_line(b"Wseen\n").expect("write succeeds");
        assert_eq!(buffer.contents(), "Wseen\n");
    }

    #[test]
    fn independent_slots_do_not_share_bindings() {
        let a = SinkSlot::stderr();
        let b = SinkSlot::stderr();
        assert!(!a.same_slot(&b));

        let buffer = SharedBuffer::new();
        let _ = a.replace(Arc::new(buffer.clone()));
        b.write_line(b"").expect("stderr accepts empty writes");
        assert!(buffer.is_empty());
    }
}
