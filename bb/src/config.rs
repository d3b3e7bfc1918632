//! Reading the debugger selection from the process environment.

use std::env;

use serde::{Deserialize, Serialize};

/// Primary environment variable holding the debugger selection.
pub const SELECT_VAR: &str = "RUST_DEBUGGER";

/// Short-form fallback variable. When [`SELECT_VAR`] is unset or empty and
/// this variable is non-empty, its value is copied into [`SELECT_VAR`] so
/// that later readers in the same process observe the effective selection.
pub const FALLBACK_VAR: &str = "BB";

/// Token selecting the automatic fallback chain.
const AUTO_TOKEN: &str = "1";

/// A parsed debugger selection.
///
/// Whether a [`Selection::Named`] value actually refers to a registered
/// debugger is decided against the active [`Registry`](crate::Registry) at
/// resolution time, not here. Parsing never fails: every string maps onto
/// one of the three variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selection {
    /// No debugging requested. Resolves to the no-op trigger.
    Disabled,
    /// Walk the registry in order and bind the first available debugger.
    Auto,
    /// Bind the named debugger, with no fallback.
    Named(String),
}

impl Selection {
    /// Classify a raw selector token.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "" => Selection::Disabled,
            AUTO_TOKEN => Selection::Auto,
            name => Selection::Named(name.to_string()),
        }
    }

    /// Read the selection from the process environment.
    ///
    /// Reads [`SELECT_VAR`] first. If it is unset or empty, [`FALLBACK_VAR`]
    /// is consulted, and a non-empty fallback value is written back into
    /// [`SELECT_VAR`]. That write-back is the only environment mutation this
    /// crate performs, and it only happens on the fallback path.
    pub fn from_env() -> Self {
        let mut raw = env::var(SELECT_VAR).unwrap_or_default();

        if raw.is_empty() {
            raw = env::var(FALLBACK_VAR).unwrap_or_default();
            if !raw.is_empty() {
                tracing::debug!("{FALLBACK_VAR}={raw} promoted to {SELECT_VAR}");
                env::set_var(SELECT_VAR, &raw);
            }
        }

        Selection::parse(&raw)
    }
}

impl std::fmt::Display for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Selection::Disabled => f.write_str("disabled"),
            Selection::Auto => f.write_str("auto"),
            Selection::Named(name) => f.write_str(name),
        }
    }
}

#[cfg(test)]
mod test {
    use std::env;
    use std::sync::Mutex;

    use test_case::test_case;

    use super::{Selection, FALLBACK_VAR, SELECT_VAR};

    // The environment is process-global and tests run on parallel threads.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn with_env(select: Option<&str>, fallback: Option<&str>, f: impl FnOnce()) {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());

        match select {
            Some(value) => env::set_var(SELECT_VAR, value),
            None => env::remove_var(SELECT_VAR),
        }
        match fallback {
            Some(value) => env::set_var(FALLBACK_VAR, value),
            None => env::remove_var(FALLBACK_VAR),
        }

        f();

        env::remove_var(SELECT_VAR);
        env::remove_var(FALLBACK_VAR);
    }

    #[test_case("" => Selection::Disabled; "empty is disabled")]
    #[test_case("1" => Selection::Auto; "one is auto")]
    #[test_case("gdb" => Selection::Named("gdb".into()); "name is named")]
    #[test_case("xyz" => Selection::Named("xyz".into()); "unknown names parse too")]
    #[test_case("GDB" => Selection::Named("GDB".into()); "case is preserved")]
    fn parse(raw: &str) -> Selection {
        Selection::parse(raw)
    }

    #[test]
    fn unset_is_disabled() {
        use pretty_assertions::assert_eq;
        with_env(None, None, || {
            assert_eq!(Selection::from_env(), Selection::Disabled);
            assert!(env::var(SELECT_VAR).is_err());
        });
    }

    #[test]
    fn fallback_is_promoted() {
        use pretty_assertions::assert_eq;
        with_env(None, Some("trap"), || {
            assert_eq!(Selection::from_env(), Selection::Named("trap".into()));
            assert_eq!(env::var(SELECT_VAR).as_deref(), Ok("trap"));
        });
    }

    #[test]
    fn empty_primary_falls_back() {
        use pretty_assertions::assert_eq;
        with_env(Some(""), Some("1"), || {
            assert_eq!(Selection::from_env(), Selection::Auto);
            assert_eq!(env::var(SELECT_VAR).as_deref(), Ok("1"));
        });
    }

    #[test]
    fn primary_wins_and_fallback_is_not_promoted() {
        use pretty_assertions::assert_eq;
        with_env(Some("lldb"), Some("gdb"), || {
            assert_eq!(Selection::from_env(), Selection::Named("lldb".into()));
            // No write-back when the primary variable was already set.
            assert_eq!(env::var(SELECT_VAR).as_deref(), Ok("lldb"));
            assert_eq!(env::var(FALLBACK_VAR).as_deref(), Ok("gdb"));
        });
    }

    #[test]
    fn empty_fallback_is_not_promoted() {
        use pretty_assertions::assert_eq;
        with_env(None, Some(""), || {
            assert_eq!(Selection::from_env(), Selection::Disabled);
            assert!(env::var(SELECT_VAR).is_err());
        });
    }
}
