use std::io;
use thiserror::Error;

/// Application-wide error type for the outer surfaces (config, input, CLI).
/// The analysis functions themselves are total and never fail.
#[derive(Debug, Error)]
pub enum AppError {
    /// Represents standard input/output errors.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Represents configuration-related errors (e.g., unparsable environment variables).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Represents data validation errors (e.g., thresholds out of range).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Represents input text that cannot be analyzed (binary or non-UTF-8 data).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Represents a diagnostics category that does not exist.
    #[error("Unknown diagnostics category: {0}")]
    UnknownCategory(String),
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        match self {
            AppError::Io(e) => AppError::Io(io::Error::new(e.kind(), e.to_string())),
            AppError::Config(s) => AppError::Config(s.clone()),
            AppError::Validation(s) => AppError::Validation(s.clone()),
            AppError::InvalidInput(s) => AppError::InvalidInput(s.clone()),
            AppError::UnknownCategory(s) => AppError::UnknownCategory(s.clone()),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Validation(format!("JSON error: {}", err))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(format!("Validation errors: {}", err))
    }
}

impl From<tracing_subscriber::util::TryInitError> for AppError {
    fn from(err: tracing_subscriber::util::TryInitError) -> Self {
        AppError::Config(format!("Logging already initialized: {}", err))
    }
}

impl From<std::string::FromUtf8Error> for AppError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        AppError::InvalidInput(format!("Invalid UTF-8 content: {}", err))
    }
}
