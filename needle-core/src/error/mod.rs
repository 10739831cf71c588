//! Core error types for needle

use thiserror::Error;

/// Main error type for needle operations
#[derive(Error, Debug)]
pub enum NeedleError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Alignment error: {0}")]
    Alignment(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Operation cancelled")]
    Cancelled,

    #[error("Other error: {0}")]
    Other(String),
}

/// Result type alias for needle operations
pub type NeedleResult<T> = Result<T, NeedleError>;

impl From<serde_json::Error> for NeedleError {
    fn from(err: serde_json::Error) -> Self {
        NeedleError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for NeedleError {
    fn from(err: toml::de::Error) -> Self {
        NeedleError::Configuration(format!("Failed to parse config: {}", err))
    }
}

impl From<toml::ser::Error> for NeedleError {
    fn from(err: toml::ser::Error) -> Self {
        NeedleError::Serialization(format!("Failed to serialize config: {}", err))
    }
}

impl From<anyhow::Error> for NeedleError {
    fn from(err: anyhow::Error) -> Self {
        NeedleError::Other(err.to_string())
    }
}
