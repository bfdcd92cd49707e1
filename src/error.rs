use miette::{Diagnostic, Result};
use thiserror::Error;

/// Main error type for the application
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("Configuration error: {0}")]
    #[diagnostic(code(shift_tally::config))]
    Config(String),

    #[error("Invalid time: {0}")]
    #[diagnostic(
        code(shift_tally::invalid_time),
        help("Times are written as HH:MM, e.g. 20:00")
    )]
    InvalidTime(String),

    #[error("Invalid shift: {0}")]
    #[diagnostic(code(shift_tally::invalid_shift))]
    InvalidShift(String),

    #[error("Storage error: {0}")]
    #[diagnostic(code(shift_tally::storage))]
    Storage(String),

    #[error("Redis error: {0}")]
    #[diagnostic(code(shift_tally::redis))]
    Redis(#[from] redis::RedisError),

    #[error(transparent)]
    #[diagnostic(code(shift_tally::io))]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    #[diagnostic(code(shift_tally::serialization))]
    Serialization(String),

    #[error("Other error: {0}")]
    #[diagnostic(code(shift_tally::other))]
    Other(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

// TOML config file parse errors
impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

/// Type alias for Result with our Error type
pub type TallyResult<T> = Result<T, Error>;

/// Helper to create configuration errors
pub fn config_error(message: &str) -> Error {
    Error::Config(message.to_string())
}

/// Helper to create time parsing errors
pub fn invalid_time_error(message: &str) -> Error {
    Error::InvalidTime(message.to_string())
}

/// Helper to create shift validation errors
pub fn invalid_shift_error(message: &str) -> Error {
    Error::InvalidShift(message.to_string())
}

/// Helper to create storage errors
pub fn storage_error(message: &str) -> Error {
    Error::Storage(message.to_string())
}
