//! Formatter implementations for each output format.

use crate::config::{Field, Resolution};
use crate::error::{Error, Result};
use crate::output::OutputFormatter;

/// Formatter for JSON output.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, resolution: &Resolution) -> Result<String> {
        serde_json::to_string_pretty(&resolution.config).map_err(|e| Error::Serialization {
            format: "json",
            message: e.to_string(),
        })
    }
}

/// Formatter for YAML output.
pub struct YamlFormatter;

impl OutputFormatter for YamlFormatter {
    fn format(&self, resolution: &Resolution) -> Result<String> {
        let rendered =
            serde_yaml::to_string(&resolution.config).map_err(|e| Error::Serialization {
                format: "yaml",
                message: e.to_string(),
            })?;
        Ok(rendered.trim_end().to_string())
    }
}

/// Formatter for human-readable output.
pub struct HumanFormatter;

impl OutputFormatter for HumanFormatter {
    fn format(&self, resolution: &Resolution) -> Result<String> {
        let width = Field::ALL
            .iter()
            .map(|f| f.name().len())
            .max()
            .unwrap_or(0);

        let mut lines = vec!["Client configuration:".to_string()];
        for field in Field::ALL {
            lines.push(format!(
                "  {:<width$}  {}  ({})",
                field.name(),
                resolution.config.display_value(field),
                resolution.provenance(field),
            ));
        }

        Ok(lines.join("\n"))
    }
}
