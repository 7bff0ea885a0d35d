//! Environment variable source.
//!
//! This module reads the four `CLI_*` variables that override values from
//! the configuration file. Variables are read through an [`EnvProvider`] so
//! that callers (and tests) can substitute a plain map for the process
//! environment.

use std::collections::HashMap;
use std::env;

use crate::config::schema::{Field, RawEnvConfig};

/// A source of environment variables.
pub trait EnvProvider {
    /// Value of `key`, or `None` if it is not set.
    ///
    /// A variable set to the empty string must be reported as `Some("")`.
    fn var(&self, key: &str) -> Option<String>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvProvider for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        // A non-UTF-8 value is still a set variable.
        env::var_os(key).map(|value| value.to_string_lossy().into_owned())
    }
}

impl EnvProvider for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl EnvProvider for HashMap<&str, &str> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).map(|value| (*value).to_string())
    }
}

/// Reads `CLI_*` environment variables.
///
/// # Examples
///
/// ```
/// use clientconf::config::{EnvironmentConfig, Field};
/// use std::collections::HashMap;
///
/// let vars = HashMap::from([("CLI_ID", "7"), ("CLI_LOOP_PERIOD", "")]);
/// let raw = EnvironmentConfig::read(&vars);
///
/// assert_eq!(raw.get(Field::Id), Some("7"));
/// assert_eq!(raw.get(Field::LoopPeriod), Some(""));
/// assert!(!raw.is_present(Field::ServerAddress));
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Read every recognized variable from `provider`.
    ///
    /// Never fails: an unset variable is a normal state, not an error.
    pub fn read<P: EnvProvider + ?Sized>(provider: &P) -> RawEnvConfig {
        let mut raw = RawEnvConfig::default();

        for field in Field::ALL {
            let name = field.env_var();
            if let Some(value) = provider.var(&name) {
                log::debug!("{name} is set");
                *raw.slot_mut(field) = Some(value);
            }
        }

        raw
    }

    /// Read every recognized variable from the process environment.
    #[must_use]
    pub fn from_process() -> RawEnvConfig {
        Self::read(&ProcessEnv)
    }
}
