use thiserror::Error;

#[derive(Error, Debug)]
pub enum InspectError {
    #[error("Invalid argument `{name}`: {reason}")]
    InvalidArgument { name: String, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid value for `{field}` ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

impl InspectError {
    pub fn invalid_argument(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// 對應 CLI 的退出碼
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgument { .. } => 1,
            Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => 2,
            Self::IoError(_) | Self::SerializationError(_) | Self::TomlError(_) => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, InspectError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_message() {
        let err = InspectError::invalid_argument("value", "value can't be null");
        assert_eq!(err.to_string(), "Invalid argument `value`: value can't be null");
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_exit_codes_by_category() {
        let missing = InspectError::MissingConfigError {
            field: "values".to_string(),
        };
        assert_eq!(missing.exit_code(), 2);

        let io = InspectError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(io.exit_code(), 3);
    }
}
