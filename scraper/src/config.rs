//! Scraper configuration loaded from config.json

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{ScraperError, ScraperResult};

/// Session configuration for the scraping target
#[derive(Debug, Clone, Deserialize)]
pub struct ScraperConfig {
    /// Page source root; the page loop appends `?status=200&page=N`
    pub base_url: String,
    /// Session cookies, name to value
    pub cookies: HashMap<String, String>,
    /// String expected somewhere on the first page of a logged-in session
    pub login_marker: String,
}

impl ScraperConfig {
    /// Load and parse the JSON config file
    pub fn load(path: &Path) -> ScraperResult<Self> {
        if !path.exists() {
            return Err(ScraperError::ConfigMissing {
                path: path.display().to_string(),
            });
        }

        let raw = fs::read_to_string(path).map_err(|e| ScraperError::ConfigMalformed {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        serde_json::from_str(&raw).map_err(|e| ScraperError::ConfigMalformed {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Cookie header value for page requests
    pub fn cookie_header(&self) -> String {
        self.cookies
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_parses_cookies() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{
                "base_url": "https://keys.example.test/",
                "cookies": { "session": "abc123" },
                "login_marker": "operator"
            }"#,
        )
        .unwrap();

        let config = ScraperConfig::load(&path).unwrap();

        assert_eq!(config.base_url, "https://keys.example.test/");
        assert_eq!(config.cookie_header(), "session=abc123");
        assert_eq!(config.login_marker, "operator");
    }

    #[test]
    fn test_missing_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = ScraperConfig::load(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(ScraperError::ConfigMissing { .. })));
    }

    #[test]
    fn test_malformed_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        let result = ScraperConfig::load(&path);
        assert!(matches!(result, Err(ScraperError::ConfigMalformed { .. })));
    }

    #[test]
    fn test_missing_cookies_field_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{ "base_url": "https://keys.example.test/", "login_marker": "x" }"#,
        )
        .unwrap();

        let result = ScraperConfig::load(&path);
        assert!(matches!(result, Err(ScraperError::ConfigMalformed { .. })));
    }
}
