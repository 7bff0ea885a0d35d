//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `run`: Resolve the configuration and run the client loop
//! - `show`: Print the resolved configuration
//! - `validate`: Report suspicious configuration values
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod run;
pub mod show;
pub mod validate;

pub use completions::CompletionsCommand;
pub use run::RunCommand;
pub use show::ShowCommand;
pub use validate::ValidateCommand;
