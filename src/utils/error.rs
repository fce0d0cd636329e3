use thiserror::Error;

#[derive(Error, Debug)]
pub enum HrError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

impl HrError {
    pub fn validation(message: impl Into<String>) -> Self {
        HrError::ValidationError {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, HrError>;
