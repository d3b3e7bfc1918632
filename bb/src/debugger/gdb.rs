//! GDB attach provider.

use super::{find_in_path, spawn_attached, Debugger, DebuggerError};

const GDB_BINARY: &str = "gdb";

/// Attaches `gdb` to the current process.
///
/// Preferred provider of the automatic fallback chain. Available whenever a
/// `gdb` binary is on `PATH`.
#[derive(Debug, Default)]
pub struct Gdb;

impl Debugger for Gdb {
    fn name(&self) -> &str {
        GDB_BINARY
    }

    fn is_available(&self) -> bool {
        find_in_path(GDB_BINARY).is_some()
    }

    fn breakpoint(&self) -> Result<(), DebuggerError> {
        // -q suppresses the banner so the prompt comes up at the call site.
        spawn_attached(GDB_BINARY, &["-q"])
    }
}
