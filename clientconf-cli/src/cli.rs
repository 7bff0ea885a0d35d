//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands. Configuration values are never
//! taken from flags; they come from `CLI_*` variables and the config file.

use crate::commands::{CompletionsCommand, RunCommand, ShowCommand, ValidateCommand};
use clap::{Parser, Subcommand};

/// Client process: resolves its configuration and runs the client loop.
#[derive(Parser)]
#[command(name = "client")]
#[command(
    version,
    about = "Resolve the client configuration and run the client loop",
    long_about = "Resolve the client configuration from CLI_* environment variables, \
                  ./config/client_config.json and built-in defaults, then run the client loop"
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Resolve the configuration and run the client loop (default)
    Run(RunCommand),

    /// Print the resolved configuration
    Show(ShowCommand),

    /// Resolve the configuration and report suspicious values
    Validate(ValidateCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
