//! Scraper binary entry point
//!
//! Pages through the cookie-gated key source and writes the harvested keys,
//! deduplicated and sorted, for the tester and analyzer to probe later.

use std::collections::BTreeSet;
use std::path::Path;

use tracing::{error, info};

use scraper::{PageScraper, ScraperConfig};
use shared::{keyfile, logging, ToolId};

/// Session config with cookies, resolved against the working directory
const CONFIG_FILE: &str = "config.json";

/// Harvest destination, one key per line
const OUTPUT_FILE: &str = "found_api_keys.txt";

#[tokio::main]
async fn main() {
    ToolId::init(ToolId::Scraper);
    logging::init_tracing();

    info!("🚀 starting key scraper");

    let config = match ScraperConfig::load(Path::new(CONFIG_FILE)) {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            return;
        }
    };

    let scraper = PageScraper::new(config);
    let mut found = BTreeSet::new();
    if let Err(e) = scraper.harvest(&mut found).await {
        error!("harvest stopped early: {e}");
    }

    if found.is_empty() {
        info!("no keys found on any page");
        return;
    }

    info!("found {} unique keys in total", found.len());
    let keys: Vec<String> = found.into_iter().collect();
    keyfile::save_or_dump("found", &keys, Path::new(OUTPUT_FILE));
}
