//! The ordered set of debuggers a selection is resolved against.

use crate::config::Selection;
use crate::error::Error;

use super::{gdb::Gdb, lldb::Lldb, trap::Trap, Debugger, DebuggerInfo, Trigger};

/// An ordered collection of [`Debugger`]s.
///
/// The built-in registry tries `gdb`, then `lldb`, then the in-process
/// `trap` provider. A custom set can be injected with
/// [`with_debuggers`](Registry::with_debuggers), which is also the seam
/// tests use to resolve against [`FakeDebugger`](crate::FakeDebugger)s.
#[derive(Debug)]
pub struct Registry {
    debuggers: Vec<Box<dyn Debugger>>,
}

impl Registry {
    /// Create a registry with the built-in debuggers.
    pub fn new() -> Self {
        Self {
            debuggers: vec![Box::new(Gdb), Box::new(Lldb), Box::new(Trap)],
        }
    }

    /// Create a registry with a custom debugger order.
    pub fn with_debuggers(debuggers: Vec<Box<dyn Debugger>>) -> Self {
        Self { debuggers }
    }

    /// Name and current availability of every registered debugger.
    pub fn list(&self) -> Vec<DebuggerInfo> {
        self.debuggers
            .iter()
            .map(|debugger| DebuggerInfo {
                name: debugger.name().to_string(),
                available: debugger.is_available(),
            })
            .collect()
    }

    /// Resolve a selection into the trigger it binds.
    ///
    /// - [`Selection::Disabled`] binds the no-op.
    /// - [`Selection::Auto`] binds the first available debugger in registry
    ///   order. An exhausted chain binds the no-op; the built-in registry
    ///   never exhausts because `trap` is unconditionally available.
    /// - [`Selection::Named`] binds the named debugger with no fallback.
    ///   A registered name that is currently unavailable is the one fatal
    ///   error ([`Error::DebuggerUnavailable`]); a name this registry does
    ///   not know counts as "no debugging requested" and binds the no-op.
    pub fn resolve(mut self, selection: Selection) -> Result<Trigger, Error> {
        match selection {
            Selection::Disabled => Ok(Trigger::noop()),
            Selection::Auto => {
                let position = self
                    .debuggers
                    .iter()
                    .position(|debugger| debugger.is_available());

                match position {
                    Some(position) => {
                        let debugger = self.debuggers.swap_remove(position);
                        tracing::debug!("auto selection bound {}", debugger.name());
                        Ok(Trigger::from_boxed(debugger))
                    }
                    None => {
                        tracing::warn!("no debugger available, breakpoints are disabled");
                        Ok(Trigger::noop())
                    }
                }
            }
            Selection::Named(name) => {
                let position = self
                    .debuggers
                    .iter()
                    .position(|debugger| debugger.name() == name);

                let Some(position) = position else {
                    tracing::debug!("unrecognized debugger selection {name:?}, using no-op");
                    return Ok(Trigger::noop());
                };

                let debugger = self.debuggers.swap_remove(position);
                if !debugger.is_available() {
                    return Err(Error::DebuggerUnavailable { name });
                }

                tracing::debug!("selection bound {}", debugger.name());
                Ok(Trigger::from_boxed(debugger))
            }
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
