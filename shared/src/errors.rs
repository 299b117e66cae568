//! Shared error types for the key toolkit

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the newline-delimited key file store
#[derive(Error, Debug)]
pub enum KeyfileError {
    #[error("key file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("failed to read key file {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write key file {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
