//! Main entry point for the client process.
//!
//! Running `client` with no subcommand resolves the configuration and starts
//! the client loop. The other commands inspect the configuration:
//! - `run`: Resolve the configuration and run the client loop
//! - `show`: Print the resolved configuration
//! - `validate`: Report suspicious configuration values
//! - `completions`: Generate shell completion scripts

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use commands::RunCommand;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    if let Err(e) = clientconf::init_logger(cli.verbose, cli.quiet).install() {
        eprintln!("Error: failed to initialize logging: {e}");
    }

    let global = GlobalOptions { quiet: cli.quiet };

    // Execute the command
    let result = match cli.command {
        None => RunCommand::default().execute(&global),
        Some(cli::Command::Run(cmd)) => cmd.execute(&global),
        Some(cli::Command::Show(cmd)) => cmd.execute(&global),
        Some(cli::Command::Validate(cmd)) => cmd.execute(&global),
        Some(cli::Command::Completions(cmd)) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
