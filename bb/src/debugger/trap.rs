//! In-process fallback provider.

use signal_hook::consts::signal::{SIGSTOP, SIGTRAP};
use signal_hook::low_level;

use super::{Debugger, DebuggerError};

/// The minimal debugger entry that ships with the crate itself.
///
/// If a tracer is already attached to the process, raises `SIGTRAP` so the
/// tracer gets control at the call site. Otherwise raises `SIGSTOP`,
/// suspending the process until a debugger attaches (`gdb -p <pid>`) or a
/// `SIGCONT` arrives.
///
/// Unlike the external providers this one needs nothing installed, so it
/// reports itself available in every environment. It terminates the
/// automatic fallback chain.
#[derive(Debug, Default)]
pub struct Trap;

impl Debugger for Trap {
    fn name(&self) -> &str {
        "trap"
    }

    fn is_available(&self) -> bool {
        true
    }

    fn breakpoint(&self) -> Result<(), DebuggerError> {
        if tracer_pid().is_some() {
            tracing::debug!("tracer attached, raising SIGTRAP");
            raise(SIGTRAP, "SIGTRAP")
        } else {
            let pid = std::process::id();
            tracing::warn!("stopping pid {pid}; attach a debugger or send SIGCONT to resume");
            raise(SIGSTOP, "SIGSTOP")
        }
    }
}

fn raise(signal: std::ffi::c_int, name: &'static str) -> Result<(), DebuggerError> {
    low_level::raise(signal).map_err(|source| DebuggerError::Signal {
        signal: name,
        source,
    })
}

/// The pid of the process currently tracing us, if any.
#[cfg(target_os = "linux")]
fn tracer_pid() -> Option<u32> {
    let status = std::fs::read_to_string("/proc/self/status").ok()?;
    parse_tracer_pid(&status)
}

/// Tracer detection is a Linux nicety; elsewhere we always stop and wait.
#[cfg(not(target_os = "linux"))]
fn tracer_pid() -> Option<u32> {
    None
}

#[cfg(target_os = "linux")]
fn parse_tracer_pid(status: &str) -> Option<u32> {
    let pid = status
        .lines()
        .find_map(|line| line.strip_prefix("TracerPid:"))?
        .trim()
        .parse()
        .ok()?;

    (pid != 0).then_some(pid)
}
