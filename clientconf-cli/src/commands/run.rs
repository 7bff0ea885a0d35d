//! Command to resolve the configuration and run the client loop.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use clap::Args;
use clientconf::Client;

/// Resolve the configuration and run the client loop.
#[derive(Args, Default)]
pub struct RunCommand {}

impl RunCommand {
    /// Execute the run command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration()?.into_config();
        log::info!("client config: {config}");

        let summary = Client::new(config).start_loop()?;
        log::debug!(
            "loop ran {} iterations in {:?}",
            summary.iterations,
            summary.elapsed
        );
        Ok(())
    }
}
