//! Build script for clientconf-cli.
//!
//! This script generates the `client.1` man page at build time using
//! clap_mangen. The generated man page is placed in OUT_DIR for inclusion in
//! release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("client")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Resolve the client configuration and run the client loop")
        .long_about(
            "Resolve the client configuration from CLI_* environment variables, \
             ./config/client_config.json and built-in defaults, then run the client loop",
        )
        .after_long_help(
            "ENVIRONMENT:\n  \
             CLI_SERVER_ADDRESS  server address (default server:12345)\n  \
             CLI_ID              client identifier (default 1)\n  \
             CLI_LOOP_LAPSE      total loop duration (default 1m2s)\n  \
             CLI_LOOP_PERIOD     pause between iterations (default 10s)\n  \
             CLIENT_LOG_MODE     quiet, normal or verbose",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .subcommands(vec![
            Command::new("run")
                .about("Resolve the configuration and run the client loop (default)"),
            Command::new("show")
                .about("Print the resolved configuration")
                .arg(
                    Arg::new("format")
                        .long("format")
                        .help("Output format")
                        .value_parser(["human", "json", "yaml"])
                        .default_value("human"),
                ),
            Command::new("validate")
                .about("Resolve the configuration and report suspicious values"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .arg(Arg::new("shell").required(true).help("Shell to generate completions for")),
        ])
}

fn main() -> io::Result<()> {
    // Generate man pages at build time
    let out_dir = PathBuf::from(
        std::env::var_os("OUT_DIR")
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "OUT_DIR not set"))?,
    );
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;

    fs::write(man_dir.join("client.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
