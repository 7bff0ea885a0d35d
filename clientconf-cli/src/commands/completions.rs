//! Shell completion generation command.
//!
//! This module provides the `completions` command which generates shell completion
//! scripts for bash, zsh, fish, and PowerShell.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::{write_output, GlobalOptions};
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::io;

/// Name of the installed binary.
const BIN_NAME: &str = "client";

/// Generate shell completion scripts
#[derive(Parser)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command.
    pub fn execute(&self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut cmd = Cli::command();

        if !global.quiet {
            eprintln!("# Generating {} completion script", self.shell);
            match self.shell {
                Shell::Bash => {
                    eprintln!("#   client completions bash > ~/.local/share/bash-completion/completions/client");
                }
                Shell::Zsh => {
                    eprintln!("#   client completions zsh > ~/.zsh/completions/_client");
                }
                Shell::Fish => {
                    eprintln!("#   client completions fish > ~/.config/fish/completions/client.fish");
                }
                Shell::PowerShell => {
                    eprintln!("#   client completions powershell | Out-String | Invoke-Expression");
                }
                _ => {}
            }
        }

        let mut script = Vec::new();
        generate(self.shell, &mut cmd, BIN_NAME, &mut script);
        let script = String::from_utf8_lossy(&script);

        write_output(&mut io::stdout().lock(), script.trim_end())
    }
}
