//! Command to check the resolved configuration for suspicious values.

use crate::error::CliError;
use crate::utils::{resolve_with, write_output, GlobalOptions};
use clap::Args;
use clientconf::config::{ConfigBuilder, ConfigValidator};
use std::io;

/// Resolve the configuration and report suspicious values.
///
/// Warnings never fail the command; only a configuration that cannot be
/// resolved does. They are printed once, on stdout, instead of being logged.
#[derive(Args)]
pub struct ValidateCommand {}

impl ValidateCommand {
    /// Execute the validate command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let resolution = resolve_with(ConfigBuilder::new().skip_warnings())?;
        let warnings = ConfigValidator::warnings(&resolution.config);

        let mut lines: Vec<String> = warnings.iter().map(|w| format!("warning: {w}")).collect();
        if warnings.is_empty() {
            lines.push("Configuration is valid".to_string());
        } else {
            lines.push(format!(
                "Configuration is valid, with {} warning(s)",
                warnings.len()
            ));
        }

        write_output(&mut io::stdout().lock(), &lines.join("\n"))
    }
}
