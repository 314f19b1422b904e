use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResponseError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Failed to construct HTTP response: {0}")]
    Build(#[from] http::Error),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}

impl ConfigError {
    pub fn invalid(key: &str, value: &str) -> Self {
        ConfigError::InvalidValue { key: key.to_string(), value: value.to_string() }
    }
}
