use crate::config::{load_values_file, InspectSettings, OutputFormat, VALID_FORMATS};
use crate::utils::error::Result;
use crate::utils::validation::{validate_one_of, validate_path, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is a valid regex"));

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub inspect: Option<InspectSection>,
    pub logging: Option<LoggingSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InspectSection {
    pub default: Option<Value>,
    pub format: Option<String>,
    pub values: Option<Vec<Value>>,
    pub file: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingSection {
    pub verbose: Option<bool>,
    pub json: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${DEFAULT_VALUE})，未設定的保留原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_PATTERN
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn format(&self) -> Option<&str> {
        self.inspect.as_ref().and_then(|i| i.format.as_deref())
    }

    pub fn verbose(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.verbose).unwrap_or(false)
    }

    pub fn json_logs(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }

    /// 轉換成設定，會讀取 `inspect.file` 指定的檔案
    pub fn into_settings(self) -> Result<InspectSettings> {
        let mut settings = InspectSettings {
            format: match self.format() {
                Some(format) => format.parse()?,
                None => OutputFormat::default(),
            },
            verbose: self.verbose(),
            json_logs: self.json_logs(),
            ..InspectSettings::default()
        };

        if let Some(inspect) = self.inspect {
            if let Some(default) = inspect.default {
                settings.set_default_value(default);
            }
            settings.values.extend(inspect.values.unwrap_or_default());
            if let Some(file) = inspect.file {
                settings.values.extend(load_values_file(&file)?);
            }
        }

        Ok(settings)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(format) = self.format() {
            validate_one_of("inspect.format", format, &VALID_FORMATS)?;
        }
        if let Some(file) = self.inspect.as_ref().and_then(|i| i.file.as_deref()) {
            validate_path("inspect.file", file)?;
        }
        Ok(())
    }
}
