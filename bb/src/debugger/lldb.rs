//! LLDB attach provider.

use super::{find_in_path, spawn_attached, Debugger, DebuggerError};

const LLDB_BINARY: &str = "lldb";

/// Attaches `lldb` to the current process.
#[derive(Debug, Default)]
pub struct Lldb;

impl Debugger for Lldb {
    fn name(&self) -> &str {
        LLDB_BINARY
    }

    fn is_available(&self) -> bool {
        find_in_path(LLDB_BINARY).is_some()
    }

    fn breakpoint(&self) -> Result<(), DebuggerError> {
        spawn_attached(LLDB_BINARY, &[])
    }
}
