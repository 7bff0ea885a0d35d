//! Command to print the resolved configuration.

use crate::error::CliError;
use crate::utils::{load_configuration, write_output, GlobalOptions};
use clap::{Args, ValueEnum};
use clientconf::output::OutputFormat;
use std::io;

/// Print the resolved configuration.
#[derive(Args)]
pub struct ShowCommand {
    /// Output format
    #[arg(long, value_enum, default_value = "human", ignore_case = true)]
    pub format: ShowFormat,
}

/// Output format for the show command.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ShowFormat {
    /// Aligned text with the source of each value
    Human,
    /// JSON using the configuration file's keys
    Json,
    /// YAML using the configuration file's keys
    Yaml,
}

impl From<ShowFormat> for OutputFormat {
    fn from(format: ShowFormat) -> Self {
        match format {
            ShowFormat::Human => OutputFormat::Human,
            ShowFormat::Json => OutputFormat::Json,
            ShowFormat::Yaml => OutputFormat::Yaml,
        }
    }
}

impl ShowCommand {
    /// Execute the show command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let resolution = load_configuration()?;
        let formatter = OutputFormat::from(self.format).create_formatter();
        let rendered = formatter.format(&resolution)?;
        write_output(&mut io::stdout().lock(), &rendered)
    }
}
