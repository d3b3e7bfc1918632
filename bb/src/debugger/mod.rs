//! Debugger providers and the resolved breakpoint trigger.

pub(crate) mod fake;
pub(crate) mod gdb;
pub(crate) mod lldb;
pub(crate) mod noop;
pub(crate) mod registry;
pub(crate) mod trap;

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An error raised by a debugger provider while trying to hand control to an
/// interactive session.
#[derive(Error, Debug)]
pub enum DebuggerError {
    /// The debugger process could not be spawned.
    #[error("failed to launch `{command}`")]
    Launch {
        /// The command that failed to start.
        command: String,
        #[source]
        source: std::io::Error,
    },
    /// The debugger process started but exited unsuccessfully.
    #[error("`{command}` exited with {status}")]
    Session {
        /// The command whose session failed.
        command: String,
        /// The exit status it reported.
        status: std::process::ExitStatus,
    },
    /// A signal could not be delivered to the current process.
    #[error("failed to raise {signal}")]
    Signal {
        /// Human readable signal name.
        signal: &'static str,
        #[source]
        source: std::io::Error,
    },
}

/// A debugger that may or may not be present in the current environment.
///
/// Providers are queried for presence via [`is_available`](Debugger::is_available);
/// "not installed" is an ordinary outcome there, never an error.
/// [`breakpoint`](Debugger::breakpoint) suspends the calling process and
/// hands control to an interactive debugging session.
pub trait Debugger: fmt::Debug + Send + Sync {
    /// The name this debugger is selected by, e.g. through
    /// [`SELECT_VAR`](crate::config::SELECT_VAR).
    fn name(&self) -> &str;

    /// Whether this debugger can currently be used.
    fn is_available(&self) -> bool;

    /// Suspend the calling process and enter an interactive debugging
    /// session. Returns once the session releases the process again.
    fn breakpoint(&self) -> Result<(), DebuggerError>;
}

/// Name and current availability of a registered debugger.
///
/// Returned by [`Registry::list`](crate::Registry::list).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebuggerInfo {
    /// The selection name of the debugger.
    pub name: String,
    /// Whether the debugger reported itself available when listed.
    pub available: bool,
}

/// The resolved breakpoint trigger.
///
/// A `Trigger` wraps exactly one [`Debugger`] (possibly the no-op) and is
/// immutable once resolved. Firing it never propagates an error: a debugger
/// that fails at runtime is logged, since an instrumentation call must not
/// take the host process down with it.
pub struct Trigger {
    inner: Box<dyn Debugger>,
}

impl Trigger {
    /// Wrap a specific debugger.
    pub fn new(debugger: impl Debugger + 'static) -> Self {
        Self {
            inner: Box::new(debugger),
        }
    }

    pub(crate) fn from_boxed(debugger: Box<dyn Debugger>) -> Self {
        Self { inner: debugger }
    }

    /// The trigger that does nothing.
    pub fn noop() -> Self {
        Self::new(noop::Noop)
    }

    /// The name of the bound debugger.
    pub fn name(&self) -> &str {
        self.inner.name()
    }

    /// Invoke the bound debugger.
    pub fn fire(&self) {
        if let Err(error) = self.inner.breakpoint() {
            tracing::error!("breakpoint via {} failed: {error}", self.inner.name());
        }
    }
}

impl fmt::Debug for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trigger")
            .field("debugger", &self.inner.name())
            .finish()
    }
}

/// Spawn `command` attached to the current process and wait for the session
/// to end.
///
/// The debugger inherits the terminal, so the call blocks until the user
/// detaches or quits.
pub(crate) fn spawn_attached(command: &str, args: &[&str]) -> Result<(), DebuggerError> {
    let pid = std::process::id();

    tracing::info!("attaching {command} to pid {pid}");

    let status = std::process::Command::new(command)
        .args(args)
        .arg("-p")
        .arg(pid.to_string())
        .status()
        .map_err(|source| DebuggerError::Launch {
            command: command.to_string(),
            source,
        })?;

    if !status.success() {
        return Err(DebuggerError::Session {
            command: command.to_string(),
            status,
        });
    }

    tracing::debug!("{command} session ended, resuming");

    Ok(())
}

/// Look up an executable in the directories named by `PATH`.
pub(crate) fn find_in_path(binary: &str) -> Option<PathBuf> {
    let path = std::env::var_os("PATH")?;

    std::env::split_paths(&path)
        .map(|dir| dir.join(binary))
        .find(|candidate| is_executable(candidate))
}

#[cfg(unix)]
fn is_executable(path: &std::path::Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    path.metadata()
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &std::path::Path) -> bool {
    path.is_file()
}

#[cfg(test)]
mod test {
    use super::fake::FakeDebugger;
    use super::Trigger;

    #[test]
    fn noop_trigger_fires_without_effect() {
        let trigger = Trigger::noop();
        assert_eq!(trigger.name(), "noop");
        trigger.fire();
        trigger.fire();
    }

    #[test]
    fn fire_counts_on_the_bound_debugger() {
        let fake = FakeDebugger::available("fake");
        let fired = fake.fire_count_handle();

        let trigger = Trigger::new(fake);
        trigger.fire();
        trigger.fire();

        assert_eq!(fired.load(std::sync::atomic::Ordering::SeqCst), 2);
    }

    #[test]
    fn fire_swallows_runtime_failures() {
        let trigger = Trigger::new(FakeDebugger::failing("broken"));
        // Must not panic or propagate.
        trigger.fire();
    }
}
