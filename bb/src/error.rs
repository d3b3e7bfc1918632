use thiserror::Error;

use crate::debugger::DebuggerError;

/// The top-level error type of this crate.
#[derive(Error, Debug)]
pub enum Error {
    /// A debugger was selected by name but is not usable in this
    /// environment. Explicit selections have no fallback, so this is fatal
    /// for the host's startup.
    #[error("debugger `{name}` was requested but is not available")]
    DebuggerUnavailable {
        /// The name the selection asked for.
        name: String,
    },
    /// The process-wide trigger was already resolved.
    #[error("the breakpoint trigger is already initialized")]
    AlreadyInitialized,
    /// An error raised by the bound debugger itself.
    #[error("a debugger error occurred")]
    Debugger(#[from] DebuggerError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
