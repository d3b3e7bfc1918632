//! # Environment-driven debugger selection
//!
//! This crate binds one process-wide *breakpoint trigger*, resolved once
//! from the environment. Calling [`bb()`] drops the process into an
//! interactive debugger session, or does nothing when no debugging was
//! requested, so the call can be left in instrumented code paths.
//!
//! The selection is read from `RUST_DEBUGGER` (with `BB` as a short-form
//! fallback that gets promoted into `RUST_DEBUGGER`):
//!
//! - `1` walks the registered debuggers in order and binds the first one
//!   available on this host: `gdb`, then `lldb`, then the in-process `trap`
//!   provider, which is always available.
//! - `gdb`, `lldb` or `trap` bind that debugger directly, with no fallback:
//!   a named debugger that is missing makes [`init`] fail.
//! - anything else, including leaving both variables unset, binds a no-op.
//!
//! ## Examples
//!
//! Resolve at startup, then trigger wherever needed:
//!
//! ```no_run
//! fn main() -> Result<(), bb::Error> {
//!     bb::init()?;
//!
//!     // ... somewhere deep in the code under investigation:
//!     bb::bb();
//!     Ok(())
//! }
//! ```
//!
//! Resolve against a custom debugger set:
//!
//! ```no_run
//! use bb::{FakeDebugger, Registry};
//!
//! let registry = Registry::with_debuggers(vec![Box::new(FakeDebugger::available("fake"))]);
//! bb::init_with(registry)?;
//! # Ok::<(), bb::Error>(())
//! ```

pub mod config;
mod debugger;
mod error;

use once_cell::sync::OnceCell;

pub use crate::config::Selection;
pub use crate::debugger::{
    fake::FakeDebugger, gdb::Gdb, lldb::Lldb, noop::Noop, registry::Registry, trap::Trap, Debugger,
    DebuggerError, DebuggerInfo, Trigger,
};
pub use crate::error::Error;

/// The process-wide trigger. Written at most once, never reassigned.
static TRIGGER: OnceCell<Trigger> = OnceCell::new();

/// Resolve the process-wide trigger from the environment, using the
/// built-in debugger registry.
///
/// Call this once during startup. An explicit selection of a debugger that
/// is not available on this host fails here; treat that as a fatal startup
/// error, since the requested breakpoint capability cannot be established.
pub fn init() -> Result<(), Error> {
    init_with(Registry::new())
}

/// Resolve the process-wide trigger from the environment against a custom
/// [`Registry`].
pub fn init_with(registry: Registry) -> Result<(), Error> {
    let trigger = registry.resolve(Selection::from_env())?;

    tracing::debug!("breakpoint trigger bound to {}", trigger.name());

    TRIGGER.set(trigger).map_err(|_| Error::AlreadyInitialized)
}

/// Invoke the process-wide breakpoint trigger.
///
/// Depending on the resolved selection this attaches a debugger to the
/// current process and blocks until the session ends, stops the process
/// until something attaches, or does nothing at all.
///
/// # Panics
///
/// If [`init`] was never called, the trigger is resolved lazily on the
/// first call. In that path an explicit selection of an unavailable
/// debugger has no caller left to report to and panics instead; resolve
/// with [`init`] during startup to handle it as an error.
pub fn bb() {
    let trigger = TRIGGER.get_or_init(|| {
        match Registry::new().resolve(Selection::from_env()) {
            Ok(trigger) => trigger,
            Err(error) => panic!("debugger selection failed: {error}"),
        }
    });

    trigger.fire();
}
