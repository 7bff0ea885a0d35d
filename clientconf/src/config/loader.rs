//! Configuration file loading.
//!
//! The client reads a single JSON document from a fixed path relative to
//! its working directory. Loading is a single attempt; any failure is
//! returned to the caller, which decides whether resolution continues.

use std::fs;
use std::path::Path;

use crate::config::schema::RawFileConfig;
use crate::error::{Error, Result};

/// Location of the configuration file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "./config/client_config.json";

/// Loads the JSON configuration file.
///
/// # Examples
///
/// ```no_run
/// use clientconf::config::{ConfigLoader, DEFAULT_CONFIG_PATH};
/// use std::path::Path;
///
/// match ConfigLoader::load_file(Path::new(DEFAULT_CONFIG_PATH)) {
///     Ok(raw) => println!("file sets ID to {:?}", raw.id),
///     Err(e) => eprintln!("{e}"),
/// }
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and parse a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SourceUnavailable`] if the file cannot be read and
    /// [`Error::SourceMalformed`] if it is not a JSON object whose known
    /// keys hold strings.
    pub fn load_file(path: &Path) -> Result<RawFileConfig> {
        let contents = fs::read_to_string(path).map_err(|source| Error::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(path, &contents)
    }

    /// Parse already-read file contents. `path` is only used in errors.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SourceMalformed`] for invalid JSON or a wrong shape.
    pub fn parse(path: &Path, contents: &str) -> Result<RawFileConfig> {
        serde_json::from_str(contents).map_err(|source| Error::SourceMalformed {
            path: path.to_path_buf(),
            source,
        })
    }
}
