//! Utility functions for CLI operations.
//!
//! Every command resolves the configuration the same way: process
//! environment first, then `./config/client_config.json`, then defaults.

use std::io::Write;

use clientconf::{ConfigBuilder, Resolution};

use crate::error::CliError;

/// Global CLI options shared across all commands.
///
/// `--verbose` only selects the log level, which is applied before dispatch.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobalOptions {
    /// Suppress non-essential output.
    pub quiet: bool,
}

/// Resolve the client configuration from the process environment and the
/// default configuration file.
///
/// Source problems are logged and skipped by the builder; only a value that
/// cannot be coerced comes back as an error.
pub fn load_configuration() -> Result<Resolution, CliError> {
    resolve_with(ConfigBuilder::new())
}

/// Resolve through an already configured builder.
pub fn resolve_with(builder: ConfigBuilder) -> Result<Resolution, CliError> {
    builder.resolve().map_err(CliError::from)
}

/// Write command output, followed by a newline, and flush it.
///
/// A closed or full stdout is reported instead of panicking.
pub fn write_output<W: Write>(out: &mut W, text: &str) -> Result<(), CliError> {
    writeln!(out, "{text}")?;
    out.flush()?;
    Ok(())
}
