//! A scriptable debugger for tests and dry runs.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use super::{Debugger, DebuggerError};

/// A mock debugger with controllable availability and a fire counter.
///
/// Useful for testing resolution logic without spawning real debuggers, in
/// this crate's own tests and downstream.
#[derive(Debug)]
pub struct FakeDebugger {
    name: String,
    available: bool,
    failing: bool,
    fired: Arc<AtomicUsize>,
}

impl FakeDebugger {
    /// A fake that reports itself available.
    pub fn available(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            available: true,
            failing: false,
            fired: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// A fake that reports itself unavailable.
    pub fn unavailable(name: impl Into<String>) -> Self {
        Self {
            available: false,
            ..Self::available(name)
        }
    }

    /// A fake that is available but fails every breakpoint attempt.
    pub fn failing(name: impl Into<String>) -> Self {
        Self {
            failing: true,
            ..Self::available(name)
        }
    }

    /// Handle on the fire counter, usable after the fake has been consumed
    /// by a [`Registry`](crate::Registry) or [`Trigger`](crate::Trigger).
    pub fn fire_count_handle(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.fired)
    }
}

impl Debugger for FakeDebugger {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_available(&self) -> bool {
        self.available
    }

    fn breakpoint(&self) -> Result<(), DebuggerError> {
        if self.failing {
            return Err(DebuggerError::Signal {
                signal: "FAKE",
                source: std::io::Error::other("scripted failure"),
            });
        }

        self.fired.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
