//! Scraper error types

use thiserror::Error;

/// Result type for scraper operations
pub type ScraperResult<T> = Result<T, ScraperError>;

/// Scraper error types
#[derive(Error, Debug)]
pub enum ScraperError {
    #[error("config file not found: {path}")]
    ConfigMissing { path: String },

    #[error("config file {path} is malformed: {message}")]
    ConfigMalformed { path: String, message: String },

    #[error("login check failed: marker {marker:?} missing from the first page")]
    LoginFailed { marker: String },

    #[error("page request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
}
