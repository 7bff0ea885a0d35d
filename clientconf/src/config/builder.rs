//! Configuration builder: the single entry point for resolution.
//!
//! The builder reads the environment and the configuration file, tolerates
//! the failure of either source, and hands both raw records to
//! [`ConfigResolver`].

use std::path::{Path, PathBuf};

use crate::config::environment::{EnvProvider, EnvironmentConfig, ProcessEnv};
use crate::config::loader::{ConfigLoader, DEFAULT_CONFIG_PATH};
use crate::config::merger::ConfigResolver;
use crate::config::schema::{ClientConfig, Field, RawEnvConfig, RawFileConfig, Resolution};
use crate::config::validator::ConfigValidator;
use crate::error::{Error, Result};

/// Builds a [`ClientConfig`] from the environment, the file and defaults.
///
/// # Examples
///
/// ```
/// use clientconf::config::ConfigBuilder;
/// use std::collections::HashMap;
/// use std::time::Duration;
///
/// let env = HashMap::from([("CLI_LOOP_PERIOD", "250ms")]);
/// let config = ConfigBuilder::new()
///     .skip_file()
///     .with_env_provider(env)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.id, "1");
/// assert_eq!(config.loop_period, Duration::from_millis(250));
/// ```
pub struct ConfigBuilder {
    file_path: PathBuf,
    skip_file: bool,
    env: Option<Box<dyn EnvProvider>>,
    skip_env: bool,
    log_warnings: bool,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigBuilder {
    /// A builder reading the process environment and [`DEFAULT_CONFIG_PATH`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            file_path: PathBuf::from(DEFAULT_CONFIG_PATH),
            skip_file: false,
            env: None,
            skip_env: false,
            log_warnings: true,
        }
    }

    /// Read the configuration file from `path` instead of the default.
    #[must_use]
    pub fn with_file_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_path = path.into();
        self
    }

    /// Read variables from `provider` instead of the process environment.
    #[must_use]
    pub fn with_env_provider(mut self, provider: impl EnvProvider + 'static) -> Self {
        self.env = Some(Box::new(provider));
        self
    }

    /// Do not read the configuration file.
    #[must_use]
    pub fn skip_file(mut self) -> Self {
        self.skip_file = true;
        self
    }

    /// Do not read environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Do not log [`ConfigValidator`] warnings; the caller reports them.
    #[must_use]
    pub fn skip_warnings(mut self) -> Self {
        self.log_warnings = false;
        self
    }

    /// Path the file source reads from.
    #[must_use]
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Resolve the configuration.
    ///
    /// # Errors
    ///
    /// Only [`Error::Coercion`]: source failures are logged and the
    /// remaining layers are used.
    pub fn build(self) -> Result<ClientConfig> {
        self.resolve().map(Resolution::into_config)
    }

    /// Resolve the configuration, keeping the provenance of every field.
    ///
    /// # Errors
    ///
    /// Only [`Error::Coercion`], as for [`build`](Self::build).
    pub fn resolve(self) -> Result<Resolution> {
        let env = self.read_env();
        let file = self.read_file();

        let resolution = ConfigResolver::resolve(&env, file.as_ref())?;

        for field in Field::ALL {
            log::debug!(
                "{field} = {:?} (from {})",
                resolution.config.display_value(field),
                resolution.provenance(field)
            );
        }
        if self.log_warnings {
            for warning in ConfigValidator::warnings(&resolution.config) {
                log::warn!("{warning}");
            }
        }

        Ok(resolution)
    }

    fn read_env(&self) -> RawEnvConfig {
        if self.skip_env {
            return RawEnvConfig::default();
        }

        match &self.env {
            Some(provider) => EnvironmentConfig::read(provider.as_ref()),
            None => EnvironmentConfig::read(&ProcessEnv),
        }
    }

    fn read_file(&self) -> Option<RawFileConfig> {
        if self.skip_file {
            return None;
        }

        match ConfigLoader::load_file(&self.file_path) {
            Ok(raw) => {
                log::debug!("loaded {}", self.file_path.display());
                Some(raw)
            }
            Err(e) => {
                Self::report_source_error(&e);
                None
            }
        }
    }

    fn report_source_error(error: &Error) {
        if error.is_missing_source() {
            log::info!("{error}; using environment and defaults");
        } else {
            log::warn!("{error}; using environment and defaults");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Provenance;
    use std::collections::HashMap;
    use std::fs;
    use std::time::Duration;
    use tempfile::TempDir;

    fn no_env() -> HashMap<String, String> {
        HashMap::new()
    }

    #[test]
    fn test_build_defaults_with_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let config = ConfigBuilder::new()
            .with_file_path(temp_dir.path().join("missing.json"))
            .with_env_provider(no_env())
            .build()
            .unwrap();

        assert_eq!(config.server_address, "server:12345");
        assert_eq!(config.id, "1");
        assert_eq!(config.loop_lapse, Duration::from_secs(62));
        assert_eq!(config.loop_period, Duration::from_secs(10));
    }

    #[test]
    fn test_build_malformed_file_is_tolerated() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("client_config.json");
        fs::write(&path, "not json at all").unwrap();

        let env = HashMap::from([("CLI_ID", "9")]);
        let config = ConfigBuilder::new()
            .with_file_path(&path)
            .with_env_provider(env)
            .build()
            .unwrap();

        assert_eq!(config.id, "9");
        assert_eq!(config.server_address, "server:12345");
    }

    #[test]
    fn test_skip_env_ignores_provider() {
        let env = HashMap::from([("CLI_ID", "9")]);
        let config = ConfigBuilder::new()
            .skip_file()
            .with_env_provider(env)
            .skip_env()
            .build()
            .unwrap();
        assert_eq!(config.id, "1");
    }

    #[test]
    fn test_resolve_keeps_provenance() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("client_config.json");
        fs::write(&path, r#"{"CLI_SERVER_ADDRESS":"host:9999"}"#).unwrap();

        let resolution = ConfigBuilder::new()
            .with_file_path(&path)
            .with_env_provider(HashMap::from([("CLI_ID", "7")]))
            .resolve()
            .unwrap();

        assert_eq!(resolution.provenance(Field::ServerAddress), Provenance::File);
        assert_eq!(resolution.provenance(Field::Id), Provenance::Environment);
        assert_eq!(resolution.provenance(Field::LoopLapse), Provenance::Default);
    }

    #[test]
    fn test_coercion_failure_propagates() {
        let result = ConfigBuilder::new()
            .skip_file()
            .with_env_provider(HashMap::from([("CLI_LOOP_LAPSE", "soon")]))
            .build();
        assert!(matches!(result, Err(Error::Coercion { field: "LoopLapse", .. })));
    }

    #[test]
    fn test_skip_warnings_keeps_resolution() {
        let env = HashMap::from([("CLI_SERVER_ADDRESS", "no-port")]);
        let config = ConfigBuilder::new()
            .skip_file()
            .with_env_provider(env)
            .skip_warnings()
            .build()
            .unwrap();
        assert_eq!(config.server_address, "no-port");
        assert_eq!(ConfigValidator::warnings(&config).len(), 1);
    }

    #[test]
    fn test_default_file_path() {
        assert_eq!(
            ConfigBuilder::new().file_path(),
            Path::new("./config/client_config.json")
        );
    }
}
