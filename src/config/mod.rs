#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::TomlConfig;

use crate::utils::error::{InspectError, Result};
use crate::utils::validation::{validate_path, Validate};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;
use std::str::FromStr;

pub const VALID_FORMATS: [&str; 2] = ["text", "json"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = InspectError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(InspectError::InvalidConfigValueError {
                field: "format".to_string(),
                value: other.to_string(),
                reason: format!("Unsupported format. Valid formats: {}", VALID_FORMATS.join(", ")),
            }),
        }
    }
}

/// CLI 與 TOML 合併後的最終設定
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InspectSettings {
    pub values: Vec<Value>,
    pub default_value: Option<Value>,
    pub format: OutputFormat,
    pub verbose: bool,
    pub json_logs: bool,
}

impl InspectSettings {
    pub fn set_default_value(&mut self, value: Value) {
        self.default_value = non_null(value);
    }
}

impl Validate for InspectSettings {
    fn validate(&self) -> Result<()> {
        if self.values.is_empty() {
            return Err(InspectError::MissingConfigError {
                field: "values".to_string(),
            });
        }
        Ok(())
    }
}

/// Parses a raw argument as JSON, keeping it as a plain string when it is not.
pub fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

/// Reads a JSON file; a top-level array contributes each element as a value.
pub fn load_values_file<P: AsRef<Path>>(path: P) -> Result<Vec<Value>> {
    let path = path.as_ref();
    validate_path("file", &path.to_string_lossy())?;

    let content = std::fs::read_to_string(path)?;
    let parsed: Value = serde_json::from_str(&content)?;
    let values = match parsed {
        Value::Array(items) => items,
        other => vec![other],
    };
    tracing::debug!("Loaded {} values from {}", values.len(), path.display());
    Ok(values)
}

fn non_null(value: Value) -> Option<Value> {
    if value.is_null() {
        None
    } else {
        Some(value)
    }
}
