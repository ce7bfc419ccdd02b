//! CMake file-API query errors.

use std::path::PathBuf;

use super::error_code::{self, ErrorCode};

/// Errors that can occur while driving the CMake file API.
///
/// Codemodel generation is all-or-nothing: any of these aborts the
/// whole query rather than producing partial data.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("Cannot create query directory {path}: {source}")]
    CreateQueryDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Cannot write query file {path}: {source}")]
    WriteQueryFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Configure step `{command}` failed: {message}")]
    Configure { command: String, message: String },

    #[error("Reply directory {path} is missing or unreadable: {source}")]
    ReplyDirUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Cannot read reply file {path}: {source}")]
    ReplyRead {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl ErrorCode for QueryError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::ReplyDirUnreadable { .. } | Self::ReplyRead { .. } => error_code::REPLY_ERROR,
            _ => error_code::QUERY_ERROR,
        }
    }
}
