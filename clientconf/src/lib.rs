#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # clientconf
//!
//! Runtime configuration for the client process.
//!
//! The client's configuration is resolved once at startup from `CLI_*`
//! environment variables, the JSON file `./config/client_config.json` and
//! built-in defaults, then handed to the client loop.
//!
//! ## Core Types
//!
//! - [`ConfigBuilder`]: reads both sources and resolves a [`ClientConfig`]
//! - [`ConfigResolver`]: the precedence and coercion rules, as a pure function
//! - [`Client`]: runs the loop described by a [`ClientConfig`]
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use clientconf::ConfigBuilder;
//! use std::collections::HashMap;
//! use std::time::Duration;
//!
//! let env = HashMap::from([("CLI_ID", "7")]);
//! let config = ConfigBuilder::new()
//!     .skip_file()
//!     .with_env_provider(env)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.id, "7");
//! assert_eq!(config.server_address, "server:12345");
//! assert_eq!(config.loop_lapse, Duration::from_secs(62));
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;

// Re-export key types at crate root for convenience
pub use client::{Client, Exchange, LogExchange, LoopSummary};
pub use config::{ClientConfig, ConfigBuilder, ConfigResolver, Field, Provenance, Resolution};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
