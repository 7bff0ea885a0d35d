//! Advisory checks on a resolved configuration.
//!
//! None of these checks fail resolution. An operator may legitimately set a
//! value the client will struggle with (an empty ID, say), so they are only
//! reported.

use crate::config::schema::{ClientConfig, Field};

/// Produces warnings for a resolved configuration.
///
/// # Examples
///
/// ```
/// use clientconf::config::{ClientConfig, ConfigValidator};
/// use std::time::Duration;
///
/// let config = ClientConfig {
///     server_address: "server:12345".to_string(),
///     id: "1".to_string(),
///     loop_lapse: Duration::from_secs(62),
///     loop_period: Duration::from_secs(10),
/// };
/// assert!(ConfigValidator::warnings(&config).is_empty());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Return one message per suspicious value, in field order.
    #[must_use]
    pub fn warnings(config: &ClientConfig) -> Vec<String> {
        let mut warnings = Vec::new();

        if let Err(message) = Self::validate_server_address(&config.server_address) {
            warnings.push(format!("{}: {message}", Field::ServerAddress));
        }

        if config.id.is_empty() {
            warnings.push(format!("{}: client identity is empty", Field::Id));
        }

        if config.loop_period.is_zero() {
            warnings.push(format!(
                "{}: zero period, iterations will run back to back",
                Field::LoopPeriod
            ));
        } else if config.loop_period > config.loop_lapse {
            warnings.push(format!(
                "{}: longer than {}, the loop will run at most once",
                Field::LoopPeriod,
                Field::LoopLapse
            ));
        }

        warnings
    }

    /// Check that an address has the form `host:port` with a numeric port.
    fn validate_server_address(address: &str) -> Result<(), String> {
        if address.is_empty() {
            return Err("server address is empty".to_string());
        }

        let Some((host, port)) = address.rsplit_once(':') else {
            return Err(format!("{address:?} has no port (expected host:port)"));
        };

        if host.is_empty() {
            return Err(format!("{address:?} has no host (expected host:port)"));
        }

        if port.parse::<u16>().is_err() {
            return Err(format!("{address:?} has an invalid port {port:?}"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn config() -> ClientConfig {
        ClientConfig {
            server_address: "server:12345".to_string(),
            id: "1".to_string(),
            loop_lapse: Duration::from_secs(62),
            loop_period: Duration::from_secs(10),
        }
    }

    #[test]
    fn test_defaults_are_clean() {
        assert!(ConfigValidator::warnings(&config()).is_empty());
    }

    #[test]
    fn test_server_address_checks() {
        assert!(ConfigValidator::validate_server_address("host:9999").is_ok());
        assert!(ConfigValidator::validate_server_address("[::1]:80").is_ok());
        assert!(ConfigValidator::validate_server_address("").is_err());
        assert!(ConfigValidator::validate_server_address("host").is_err());
        assert!(ConfigValidator::validate_server_address(":80").is_err());
        assert!(ConfigValidator::validate_server_address("host:http").is_err());
        assert!(ConfigValidator::validate_server_address("host:70000").is_err());
    }

    #[test]
    fn test_empty_values_warn() {
        let config = ClientConfig {
            server_address: String::new(),
            id: String::new(),
            ..config()
        };
        let warnings = ConfigValidator::warnings(&config);
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].starts_with("ServerAddress"));
        assert!(warnings[1].starts_with("ID"));
    }

    #[test]
    fn test_zero_period_warns() {
        let config = ClientConfig {
            loop_period: Duration::ZERO,
            ..config()
        };
        let warnings = ConfigValidator::warnings(&config);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("zero period"));
    }

    #[test]
    fn test_period_longer_than_lapse_warns() {
        let config = ClientConfig {
            loop_lapse: Duration::from_secs(5),
            loop_period: Duration::from_secs(10),
            ..config()
        };
        let warnings = ConfigValidator::warnings(&config);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("at most once"));
    }
}
