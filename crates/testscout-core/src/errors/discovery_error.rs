//! Top-level discovery error.

use super::config_error::ConfigError;
use super::error_code::ErrorCode;
use super::query_error::QueryError;

/// Failure of a whole discovery request.
///
/// The host treats any of these as "no result"; partial suites are never
/// surfaced through this type.
#[derive(Debug, thiserror::Error)]
pub enum DiscoveryError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Query(#[from] QueryError),
}

impl ErrorCode for DiscoveryError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Query(e) => e.error_code(),
        }
    }
}
