//! Configuration system for the client.
//!
//! This module resolves the client's runtime configuration from:
//! - `CLI_*` environment variables
//! - the JSON file at `./config/client_config.json`
//! - built-in defaults
//!
//! # Configuration Precedence
//!
//! Every field is resolved on its own, highest to lowest:
//!
//! 1. Environment variable, when present (an empty value still counts)
//! 2. Non-empty value from the configuration file
//! 3. Built-in default
//!
//! A missing or malformed file only removes the file layer. A winning
//! `LoopLapse` or `LoopPeriod` that is not a valid duration is an error.
//!
//! # Examples
//!
//! Basic usage:
//!
//! ```no_run
//! use clientconf::config::ConfigBuilder;
//!
//! let config = ConfigBuilder::new().build().unwrap();
//! println!("client config: {config}");
//! ```
//!
//! Resolving from explicit inputs:
//!
//! ```
//! use clientconf::config::{ConfigResolver, RawEnvConfig};
//! use std::time::Duration;
//!
//! let resolution = ConfigResolver::resolve(&RawEnvConfig::default(), None).unwrap();
//! assert_eq!(resolution.config.server_address, "server:12345");
//! assert_eq!(resolution.config.loop_lapse, Duration::from_secs(62));
//! ```

pub mod builder;
pub mod duration;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(test)]
mod proptests;

// Re-export key types at module root
pub use builder::ConfigBuilder;
pub use duration::{format_duration, parse_duration};
pub use environment::{EnvProvider, EnvironmentConfig, ProcessEnv};
pub use loader::{ConfigLoader, DEFAULT_CONFIG_PATH};
pub use merger::ConfigResolver;
pub use schema::{
    ClientConfig, Field, Provenance, RawEnvConfig, RawFileConfig, Resolution, ENV_PREFIX,
};
pub use validator::ConfigValidator;
