//! Cleanup utility: tidy a pasted block of candidate keys
//!
//! Reads the raw block, strips decoration, dedupes, sorts, and prints the
//! result with a count. No file output; the list goes to stdout for copying.

use std::fs;

use tracing::warn;

use shared::{keyfile, logging, ToolId};

/// Raw key block to tidy, mounted under /data
const CHECK_KEYS_FILE: &str = "/data/check_keys.txt";

fn main() {
    ToolId::init(ToolId::Dedup);
    logging::init_tracing();

    let raw = match fs::read_to_string(CHECK_KEYS_FILE) {
        Ok(raw) => raw,
        Err(e) => {
            warn!("could not read {CHECK_KEYS_FILE}: {e}");
            String::new()
        }
    };

    let keys = keyfile::normalize_keys(&raw);

    println!("Deduplicated keys, sorted, one per line:");
    println!("=======================================================");
    if keys.is_empty() {
        println!("no keys found");
        println!("=======================================================");
        return;
    }
    for key in &keys {
        println!("{key}");
    }
    println!("=======================================================");
    println!("{} unique keys in total", keys.len());
}
