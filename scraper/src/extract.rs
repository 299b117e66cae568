//! Regex extraction of candidate keys from raw page text

use std::collections::BTreeSet;

use regex::Regex;

/// Lexical pattern for a candidate key: fixed prefix plus a 33-character body
const KEY_PATTERN: &str = "AIzaSy[A-Za-z0-9_-]{33}";

/// Extracts the set of candidate keys appearing in a page
pub struct KeyExtractor {
    pattern: Regex,
}

impl KeyExtractor {
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(KEY_PATTERN).expect("valid key pattern"),
        }
    }

    /// Collect the unique candidate keys in the text. Malformed input simply
    /// yields an empty set; extraction never fails.
    pub fn extract(&self, page_text: &str) -> BTreeSet<String> {
        self.pattern
            .find_iter(page_text)
            .map(|found| found.as_str().to_string())
            .collect()
    }
}

impl Default for KeyExtractor {
    fn default() -> Self {
        Self::new()
    }
}
