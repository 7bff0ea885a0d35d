//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with a temporary working directory
//! - Command builder helpers that isolate the process environment
//! - Writing `config/client_config.json` fixtures

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables the binary reads; cleared for every command.
pub const CLIENT_ENV_VARS: [&str; 5] = [
    "CLI_SERVER_ADDRESS",
    "CLI_ID",
    "CLI_LOOP_LAPSE",
    "CLI_LOOP_PERIOD",
    "CLIENT_LOG_MODE",
];

/// Test environment with an isolated working directory.
///
/// The binary looks for `./config/client_config.json`, so every command runs
/// with its current directory set to the temporary directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment with no configuration file.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();

        Self {
            temp_dir,
            temp_path,
        }
    }

    /// Get a command builder for the `client` binary.
    ///
    /// The command runs in the temp directory, with every `CLI_*` variable
    /// and `CLIENT_LOG_MODE` removed from its environment.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("client").expect("Failed to find client binary");
        cmd.current_dir(&self.temp_path);
        for var in CLIENT_ENV_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write `config/client_config.json` with the given contents.
    pub fn write_config(&self, contents: &str) -> PathBuf {
        let dir = self.temp_path.join("config");
        fs::create_dir_all(&dir).expect("Failed to create config directory");
        let path = dir.join("client_config.json");
        fs::write(&path, contents).expect("Failed to write config file");
        path
    }

    /// Run `client show --format json` and parse its output.
    ///
    /// # Panics
    /// Panics if the command fails or prints invalid JSON.
    pub fn show_json(&self, envs: &[(&str, &str)]) -> serde_json::Value {
        let output = self
            .command()
            .envs(envs.iter().copied())
            .args(["show", "--format", "json"])
            .output()
            .expect("Failed to run show command");

        assert!(
            output.status.success(),
            "show failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        serde_json::from_slice(&output.stdout).expect("Output is not valid JSON")
    }
}
