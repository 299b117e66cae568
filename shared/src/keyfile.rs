//! Newline-delimited key file store
//!
//! Candidate keys are opaque strings, one per line. Loading preserves file
//! order and duplicates; deduplication is the caller's concern. Saving an
//! empty bucket writes no file, so output directories never collect
//! zero-byte artifacts.

use std::fs;
use std::path::Path;

use tracing::{error, info};

use crate::errors::KeyfileError;

/// Load keys from a newline-delimited file, trimming whitespace and dropping
/// blank lines. File order is preserved.
pub fn load_keys(path: &Path) -> Result<Vec<String>, KeyfileError> {
    if !path.exists() {
        return Err(KeyfileError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let raw = fs::read_to_string(path).map_err(|source| KeyfileError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let keys: Vec<String> = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    info!("loaded {} keys from {}", keys.len(), path.display());
    Ok(keys)
}

/// Write keys one per line, unconditionally overwriting any existing file.
/// An empty key list writes nothing.
pub fn save_keys(label: &str, keys: &[String], path: &Path) -> Result<(), KeyfileError> {
    if keys.is_empty() {
        info!("no {label} keys to save, not writing {}", path.display());
        return Ok(());
    }

    let mut contents = String::with_capacity(keys.len() * 40);
    for key in keys {
        contents.push_str(key);
        contents.push('\n');
    }

    fs::write(path, contents).map_err(|source| KeyfileError::WriteFailed {
        path: path.to_path_buf(),
        source,
    })?;

    info!("saved {} {label} keys to {}", keys.len(), path.display());
    Ok(())
}

/// Save keys, falling back to dumping every key into the log stream when the
/// write fails, so an operator never silently loses results.
pub fn save_or_dump(label: &str, keys: &[String], path: &Path) {
    if let Err(e) = save_keys(label, keys, path) {
        error!("{e}");
        error!("listing {label} keys below for manual recovery:");
        for key in keys {
            error!("{key}");
        }
    }
}

/// Normalize a raw pasted block of keys: strip one enclosing fullwidth
/// corner-bracket pair, split into lines, trim each, drop blanks, then
/// dedupe and sort ascending by codepoint.
pub fn normalize_keys(raw: &str) -> Vec<String> {
    let mut text = raw.trim();
    text = text.strip_prefix('「').unwrap_or(text);
    text = text.strip_suffix('」').unwrap_or(text);

    let mut keys: Vec<String> = text
        .trim()
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    keys.sort();
    keys.dedup();
    keys
}
