//! Configuration schema definitions.
//!
//! This module defines the raw records read from each source, the resolved
//! [`ClientConfig`] handed to the client loop, and the [`Field`] table that
//! ties the four logical keys to their environment variables, JSON keys and
//! built-in defaults.

use std::fmt;
use std::time::Duration;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::config::duration::format_duration;

/// Prefix shared by every recognized environment variable.
pub const ENV_PREFIX: &str = "CLI";

/// The four logical configuration keys.
///
/// # Examples
///
/// ```
/// use clientconf::config::Field;
///
/// assert_eq!(Field::LoopPeriod.env_var(), "CLI_LOOP_PERIOD");
/// assert_eq!(Field::LoopPeriod.name(), "LoopPeriod");
/// assert_eq!(Field::LoopPeriod.default_value(), "10s");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    /// Address of the server, as `host:port`.
    ServerAddress,
    /// Client identity.
    Id,
    /// Total time the client loop may run.
    LoopLapse,
    /// Interval between loop iterations.
    LoopPeriod,
}

impl Field {
    /// Every field, in resolution order.
    pub const ALL: [Self; 4] = [
        Self::ServerAddress,
        Self::Id,
        Self::LoopLapse,
        Self::LoopPeriod,
    ];

    /// Key token appended to [`ENV_PREFIX`].
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::ServerAddress => "SERVER_ADDRESS",
            Self::Id => "ID",
            Self::LoopLapse => "LOOP_LAPSE",
            Self::LoopPeriod => "LOOP_PERIOD",
        }
    }

    /// Environment variable read for this field (`CLI_<TOKEN>`).
    #[must_use]
    pub fn env_var(self) -> String {
        format!("{ENV_PREFIX}_{}", self.token())
    }

    /// Top-level key of this field in the JSON configuration file.
    #[must_use]
    pub const fn json_key(self) -> &'static str {
        match self {
            Self::ServerAddress => "CLI_SERVER_ADDRESS",
            Self::Id => "CLI_ID",
            Self::LoopLapse => "CLI_LOOP_LAPSE",
            Self::LoopPeriod => "CLI_LOOP_PERIOD",
        }
    }

    /// Name used in diagnostics and human output.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ServerAddress => "ServerAddress",
            Self::Id => "ID",
            Self::LoopLapse => "LoopLapse",
            Self::LoopPeriod => "LoopPeriod",
        }
    }

    /// Built-in default, in string form, used when no source provides a value.
    #[must_use]
    pub const fn default_value(self) -> &'static str {
        match self {
            Self::ServerAddress => "server:12345",
            Self::Id => "1",
            Self::LoopLapse => "1m2s",
            Self::LoopPeriod => "10s",
        }
    }

    /// Whether the winning string must be parsed as a duration.
    #[must_use]
    pub const fn is_duration(self) -> bool {
        matches!(self, Self::LoopLapse | Self::LoopPeriod)
    }

    const fn index(self) -> usize {
        match self {
            Self::ServerAddress => 0,
            Self::Id => 1,
            Self::LoopLapse => 2,
            Self::LoopPeriod => 3,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Configuration as parsed from the JSON file.
///
/// Missing keys and keys set to `null` are `None`. Unknown keys are ignored.
/// Only a JSON object is accepted; an array is never read positionally.
///
/// # Examples
///
/// ```
/// use clientconf::config::{Field, RawFileConfig};
///
/// let raw: RawFileConfig = serde_json::from_str(r#"{"CLI_ID": "42"}"#).unwrap();
/// assert_eq!(raw.get(Field::Id), Some("42"));
/// assert_eq!(raw.get(Field::LoopLapse), None);
///
/// assert!(serde_json::from_str::<RawFileConfig>(r#"["host:1", "42"]"#).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawFileConfig {
    /// `CLI_SERVER_ADDRESS`.
    pub server_address: Option<String>,

    /// `CLI_ID`.
    pub id: Option<String>,

    /// `CLI_LOOP_LAPSE`.
    pub loop_lapse: Option<String>,

    /// `CLI_LOOP_PERIOD`.
    pub loop_period: Option<String>,
}

/// On-disk shape of the file, decoded from an object that was already
/// checked to be a map.
#[derive(Deserialize)]
struct FileDocument {
    #[serde(rename = "CLI_SERVER_ADDRESS", default)]
    server_address: Option<String>,
    #[serde(rename = "CLI_ID", default)]
    id: Option<String>,
    #[serde(rename = "CLI_LOOP_LAPSE", default)]
    loop_lapse: Option<String>,
    #[serde(rename = "CLI_LOOP_PERIOD", default)]
    loop_period: Option<String>,
}

impl<'de> Deserialize<'de> for RawFileConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Derived struct visitors also accept sequences; require a map first.
        let object = Map::<String, Value>::deserialize(deserializer)?;
        let document: FileDocument =
            serde_json::from_value(Value::Object(object)).map_err(D::Error::custom)?;

        Ok(Self {
            server_address: document.server_address,
            id: document.id,
            loop_lapse: document.loop_lapse,
            loop_period: document.loop_period,
        })
    }
}

impl RawFileConfig {
    /// Raw value for `field`, if the key was present in the file.
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::ServerAddress => self.server_address.as_deref(),
            Field::Id => self.id.as_deref(),
            Field::LoopLapse => self.loop_lapse.as_deref(),
            Field::LoopPeriod => self.loop_period.as_deref(),
        }
    }
}

/// Configuration as read from the environment.
///
/// `None` means the variable was not set; `Some("")` means it was set to
/// the empty string. Only presence matters for precedence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawEnvConfig {
    /// `CLI_SERVER_ADDRESS`.
    pub server_address: Option<String>,
    /// `CLI_ID`.
    pub id: Option<String>,
    /// `CLI_LOOP_LAPSE`.
    pub loop_lapse: Option<String>,
    /// `CLI_LOOP_PERIOD`.
    pub loop_period: Option<String>,
}

impl RawEnvConfig {
    /// Raw value for `field`, if the variable was present.
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::ServerAddress => self.server_address.as_deref(),
            Field::Id => self.id.as_deref(),
            Field::LoopLapse => self.loop_lapse.as_deref(),
            Field::LoopPeriod => self.loop_period.as_deref(),
        }
    }

    /// Whether the variable for `field` was present.
    #[must_use]
    pub fn is_present(&self, field: Field) -> bool {
        self.get(field).is_some()
    }

    pub(crate) fn slot_mut(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::ServerAddress => &mut self.server_address,
            Field::Id => &mut self.id,
            Field::LoopLapse => &mut self.loop_lapse,
            Field::LoopPeriod => &mut self.loop_period,
        }
    }
}

/// Fully resolved client configuration.
///
/// Every field carries a concrete value, and the loop timings are parsed
/// durations. Serializes with the same key names as the configuration file.
///
/// # Examples
///
/// ```
/// use clientconf::config::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig {
///     server_address: "server:12345".to_string(),
///     id: "1".to_string(),
///     loop_lapse: Duration::from_secs(62),
///     loop_period: Duration::from_secs(10),
/// };
/// assert_eq!(
///     config.to_string(),
///     "ServerAddress: server:12345, ID: 1, LoopLapse: 1m2s, LoopPeriod: 10s"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientConfig {
    /// Address of the server, as `host:port`.
    #[serde(rename = "CLI_SERVER_ADDRESS")]
    pub server_address: String,

    /// Client identity.
    #[serde(rename = "CLI_ID")]
    pub id: String,

    /// Total time the client loop may run.
    #[serde(rename = "CLI_LOOP_LAPSE", serialize_with = "serialize_duration")]
    pub loop_lapse: Duration,

    /// Interval between loop iterations.
    #[serde(rename = "CLI_LOOP_PERIOD", serialize_with = "serialize_duration")]
    pub loop_period: Duration,
}

impl ClientConfig {
    /// Resolved value of `field` rendered as a string.
    #[must_use]
    pub fn display_value(&self, field: Field) -> String {
        match field {
            Field::ServerAddress => self.server_address.clone(),
            Field::Id => self.id.clone(),
            Field::LoopLapse => format_duration(self.loop_lapse),
            Field::LoopPeriod => format_duration(self.loop_period),
        }
    }
}

impl fmt::Display for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ServerAddress: {}, ID: {}, LoopLapse: {}, LoopPeriod: {}",
            self.server_address,
            self.id,
            format_duration(self.loop_lapse),
            format_duration(self.loop_period)
        )
    }
}

fn serialize_duration<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_duration(*duration))
}

/// The layer that supplied a field's winning raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    /// A `CLI_*` environment variable.
    Environment,
    /// The JSON configuration file.
    File,
    /// The built-in default.
    Default,
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Environment => write!(f, "environment"),
            Self::File => write!(f, "file"),
            Self::Default => write!(f, "default"),
        }
    }
}

/// A resolved configuration together with where each value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The resolved configuration.
    pub config: ClientConfig,
    provenance: [Provenance; 4],
}

impl Resolution {
    pub(crate) fn new(config: ClientConfig, provenance: [Provenance; 4]) -> Self {
        Self { config, provenance }
    }

    /// Layer that supplied `field`.
    #[must_use]
    pub fn provenance(&self, field: Field) -> Provenance {
        self.provenance[field.index()]
    }

    /// Consume the resolution, keeping only the configuration.
    #[must_use]
    pub fn into_config(self) -> ClientConfig {
        self.config
    }
}
