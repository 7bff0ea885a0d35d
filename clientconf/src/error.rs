//! Error types for the clientconf library.
//!
//! Source errors (`SourceUnavailable`, `SourceMalformed`) are recoverable and
//! are absorbed by [`ConfigBuilder`](crate::config::ConfigBuilder). A
//! `Coercion` error is not: it means the winning value for a duration field
//! could not be parsed, and it is propagated to the caller untouched.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a clientconf error.
///
/// # Examples
///
/// ```
/// use clientconf::{Error, Result};
///
/// fn example_operation() -> Result<u64> {
///     Ok(10)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the clientconf library.
#[derive(Debug, Error)]
pub enum Error {
    /// The configuration file could not be opened or read.
    #[error("configuration file {} unavailable: {source}", path.display())]
    SourceUnavailable {
        /// Path that was read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file was read but is not a JSON object of strings.
    #[error("configuration file {} is malformed: {source}", path.display())]
    SourceMalformed {
        /// Path that was read.
        path: PathBuf,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// The winning raw value for a typed field could not be coerced.
    #[error("configuration error: invalid duration for {field}: {value:?} ({reason})")]
    Coercion {
        /// Display name of the offending field (e.g. `LoopPeriod`).
        field: &'static str,
        /// The raw string that failed to parse.
        value: String,
        /// Why parsing failed.
        reason: String,
    },

    /// A client loop iteration failed.
    #[error("client loop failed on iteration {iteration}: {message}")]
    Exchange {
        /// The 1-based iteration that failed.
        iteration: u64,
        /// A description of the failure.
        message: String,
    },

    /// Rendering a configuration into an output format failed.
    #[error("failed to render {format} output: {message}")]
    Serialization {
        /// The output format being rendered.
        format: &'static str,
        /// A description of the failure.
        message: String,
    },
}

impl Error {
    /// Returns `true` for errors that only disable a single configuration
    /// source and must not stop resolution.
    #[must_use]
    pub const fn is_source_error(&self) -> bool {
        matches!(
            self,
            Self::SourceUnavailable { .. } | Self::SourceMalformed { .. }
        )
    }

    /// Returns `true` when the configuration file does not exist at all.
    #[must_use]
    pub fn is_missing_source(&self) -> bool {
        matches!(
            self,
            Self::SourceUnavailable { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}
