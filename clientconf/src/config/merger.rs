//! Configuration merging and precedence handling.
//!
//! Each field is resolved on its own, in strict order:
//!
//! 1. The environment variable, if it is present (even when empty).
//! 2. The file value, if the file was loaded and the value is non-empty.
//! 3. The field's built-in default.
//!
//! Only after the winner is picked is it coerced. A malformed duration from
//! a higher layer is an error; it never falls through to a lower layer.

use std::time::Duration;

use crate::config::duration::parse_duration;
use crate::config::schema::{
    ClientConfig, Field, Provenance, RawEnvConfig, RawFileConfig, Resolution,
};
use crate::error::{Error, Result};

/// Merges the raw sources into a [`ClientConfig`].
///
/// # Examples
///
/// ```
/// use clientconf::config::{ConfigResolver, Field, Provenance, RawEnvConfig, RawFileConfig};
/// use std::time::Duration;
///
/// let env = RawEnvConfig { id: Some("7".to_string()), ..Default::default() };
/// let file = RawFileConfig {
///     id: Some("42".to_string()),
///     loop_period: Some("5s".to_string()),
///     ..Default::default()
/// };
///
/// let resolution = ConfigResolver::resolve(&env, Some(&file)).unwrap();
/// assert_eq!(resolution.config.id, "7");
/// assert_eq!(resolution.config.loop_period, Duration::from_secs(5));
/// assert_eq!(resolution.provenance(Field::ServerAddress), Provenance::Default);
/// ```
pub struct ConfigResolver;

impl ConfigResolver {
    /// Resolve every field. `file` is `None` when the file could not be loaded.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Coercion`] if the winning value of `LoopLapse` or
    /// `LoopPeriod` is not a valid duration.
    pub fn resolve(env: &RawEnvConfig, file: Option<&RawFileConfig>) -> Result<Resolution> {
        let (server_address, server_from) = Self::pick(Field::ServerAddress, env, file);
        let (id, id_from) = Self::pick(Field::Id, env, file);
        let (lapse, lapse_from) = Self::pick(Field::LoopLapse, env, file);
        let (period, period_from) = Self::pick(Field::LoopPeriod, env, file);

        let config = ClientConfig {
            server_address: server_address.to_string(),
            id: id.to_string(),
            loop_lapse: Self::coerce_duration(Field::LoopLapse, lapse)?,
            loop_period: Self::coerce_duration(Field::LoopPeriod, period)?,
        };

        Ok(Resolution::new(
            config,
            [server_from, id_from, lapse_from, period_from],
        ))
    }

    /// Pick the winning raw string for `field` and report where it came from.
    #[must_use]
    pub fn pick<'a>(
        field: Field,
        env: &'a RawEnvConfig,
        file: Option<&'a RawFileConfig>,
    ) -> (&'a str, Provenance) {
        if let Some(value) = env.get(field) {
            return (value, Provenance::Environment);
        }

        if let Some(value) = file.and_then(|f| f.get(field)).filter(|v| !v.is_empty()) {
            return (value, Provenance::File);
        }

        (field.default_value(), Provenance::Default)
    }

    fn coerce_duration(field: Field, raw: &str) -> Result<Duration> {
        parse_duration(raw).map_err(|reason| Error::Coercion {
            field: field.name(),
            value: raw.to_string(),
            reason,
        })
    }
}
