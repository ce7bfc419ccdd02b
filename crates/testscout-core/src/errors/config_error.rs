//! Configuration errors.

use super::error_code::{self, ErrorCode};

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found: {path}")]
    FileNotFound { path: String },

    #[error("Config parse error in {path}: {message}")]
    Parse { path: String, message: String },

    #[error("Invalid test macro pattern `{pattern}`: {message}")]
    InvalidPattern { pattern: String, message: String },
}

impl ErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        error_code::CONFIG_ERROR
    }
}
