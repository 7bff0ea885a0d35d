//! Shared helpers for clientconf integration tests.

#![allow(dead_code)]

use std::env;
use std::path::PathBuf;

/// Path to a file under `tests/fixtures/configs`.
pub fn fixture_path(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("configs")
        .join(relative)
}

/// RAII guard for setting and restoring environment variables.
///
/// Tests using this guard must be marked `#[serial]`: the process
/// environment is shared by every test thread.
pub struct EnvGuard {
    key: String,
    old_value: Option<String>,
}

impl EnvGuard {
    pub fn new(key: &str, value: &str) -> Self {
        let old_value = env::var(key).ok();
        env::set_var(key, value);
        Self {
            key: key.to_string(),
            old_value,
        }
    }

    /// Create a guard that removes the env var.
    pub fn remove(key: &str) -> Self {
        let old_value = env::var(key).ok();
        env::remove_var(key);
        Self {
            key: key.to_string(),
            old_value,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.old_value {
            Some(val) => env::set_var(&self.key, val),
            None => env::remove_var(&self.key),
        }
    }
}

/// Clear every `CLI_*` variable the client recognizes.
pub fn clear_client_env_vars() -> Vec<EnvGuard> {
    clientconf::Field::ALL
        .iter()
        .map(|f| EnvGuard::remove(&f.env_var()))
        .collect()
}
