use crate::config::{load_values_file, parse_value, InspectSettings, OutputFormat, TomlConfig};
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use clap::Parser;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "object-inspect")]
#[command(about = "Check values for null/emptiness and runtime type")]
pub struct CliConfig {
    /// Values to inspect, parsed as JSON or taken as plain strings
    pub values: Vec<String>,

    #[arg(long, help = "JSON file with one value or an array of values")]
    pub file: Option<String>,

    #[arg(long = "default", help = "Fallback used when a value is null or empty")]
    pub default_value: Option<String>,

    #[arg(long, help = "TOML configuration file")]
    pub config: Option<String>,

    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl CliConfig {
    /// 合併 TOML 設定與命令列參數，命令列優先
    pub fn load_settings(&self) -> Result<InspectSettings> {
        self.validate()?;

        let toml_config = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };
        toml_config.validate()?;

        let mut settings = toml_config.into_settings()?;
        self.apply_to(&mut settings)?;
        settings.validate()?;

        Ok(settings)
    }

    fn apply_to(&self, settings: &mut InspectSettings) -> Result<()> {
        if let Some(raw) = &self.default_value {
            settings.set_default_value(parse_value(raw));
        }
        if let Some(format) = self.format {
            settings.format = format;
        }
        settings.verbose |= self.verbose;
        settings.json_logs |= self.json_logs;

        settings
            .values
            .extend(self.values.iter().map(|raw| parse_value(raw)));
        if let Some(file) = &self.file {
            settings.values.extend(load_values_file(file)?);
        }
        Ok(())
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        if let Some(path) = &self.file {
            validate_path("file", path)?;
            validate_non_empty_string("file", path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::InspectError;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_arguments() {
        let config = CliConfig::parse_from([
            "object-inspect",
            "--default",
            "zz",
            "--format",
            "json",
            "abc",
            "1",
        ]);
        assert_eq!(config.values, vec!["abc", "1"]);
        assert_eq!(config.default_value.as_deref(), Some("zz"));
        assert_eq!(config.format, Some(OutputFormat::Json));

        let settings = config.load_settings().unwrap();
        assert_eq!(settings.values, vec![json!("abc"), json!(1)]);
        assert_eq!(settings.default_value, Some(json!("zz")));
    }

    #[test]
    fn test_cli_overrides_toml() {
        let mut toml_file = NamedTempFile::new().unwrap();
        toml_file
            .write_all(b"[inspect]\ndefault = \"from-toml\"\nformat = \"json\"\nvalues = [true]\n")
            .unwrap();

        let config = CliConfig {
            values: vec!["[]".to_string()],
            default_value: Some("from-cli".to_string()),
            config: Some(toml_file.path().to_str().unwrap().to_string()),
            format: Some(OutputFormat::Text),
            ..CliConfig::default()
        };

        let settings = config.load_settings().unwrap();
        assert_eq!(settings.format, OutputFormat::Text);
        assert_eq!(settings.default_value, Some(json!("from-cli")));
        assert_eq!(settings.values, vec![json!(true), json!([])]);
    }

    #[test]
    fn test_missing_values_is_an_error() {
        let err = CliConfig::default().load_settings().unwrap_err();
        assert!(matches!(err, InspectError::MissingConfigError { .. }));
    }

    #[test]
    fn test_invalid_file_path() {
        let config = CliConfig {
            file: Some("   ".to_string()),
            ..CliConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
