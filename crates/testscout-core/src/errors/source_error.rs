//! Source analysis errors.

use std::path::PathBuf;

use super::error_code::{self, ErrorCode};

/// Errors that can occur while scanning a test source file.
///
/// A failure on one file never aborts the surrounding target or suite;
/// the assembly layer logs it and moves on.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl ErrorCode for SourceError {
    fn error_code(&self) -> &'static str {
        error_code::SOURCE_ERROR
    }
}
