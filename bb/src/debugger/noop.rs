//! The trigger bound when no debugging is requested.

use super::{Debugger, DebuggerError};

/// Does nothing, successfully.
#[derive(Debug, Default)]
pub struct Noop;

impl Debugger for Noop {
    fn name(&self) -> &str {
        "noop"
    }

    fn is_available(&self) -> bool {
        true
    }

    fn breakpoint(&self) -> Result<(), DebuggerError> {
        Ok(())
    }
}
