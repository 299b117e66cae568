//! Analyzer binary entry point
//!
//! Splits candidate keys by how the chat probe answers: keys that respond
//! land in the dated `_200` file, quota-limited keys in the dated `_429`
//! file, and everything else is reported invalid. Unlike the tester there is
//! no per-key liveness pre-check and quota state is reported, not folded
//! into validity.

use std::path::Path;

use chrono::Local;
use tracing::{info, warn};

use prober::{CheckPolicy, GeminiClient, KeyBucket, KeyRun, ProbeConfig};
use shared::{keyfile, logging, ToolId};

/// Candidate key file, resolved against the working directory
const API_KEYS_FILE: &str = "api_keys.txt";

fn responding_filename(date_stamp: &str) -> String {
    format!("{date_stamp}_200.txt")
}

fn quota_filename(date_stamp: &str) -> String {
    format!("{date_stamp}_429.txt")
}

#[tokio::main]
async fn main() {
    ToolId::init(ToolId::Analyzer);
    logging::init_tracing();

    info!("🚀 starting Gemini API response analyzer");

    let keys = match keyfile::load_keys(Path::new(API_KEYS_FILE)) {
        Ok(keys) => keys,
        Err(e) => {
            warn!("{e}; continuing with an empty candidate list");
            Vec::new()
        }
    };

    let probe = ProbeConfig::default();
    let client = GeminiClient::new(probe.timeout_seconds);
    let run = KeyRun::new(client, CheckPolicy::Analyze).with_probe_config(probe);

    let report = run.run(&keys).await;

    let date_stamp = Local::now().format("%Y%m%d").to_string();
    keyfile::save_or_dump(
        "200",
        report.keys_in(KeyBucket::Valid),
        Path::new(&responding_filename(&date_stamp)),
    );
    keyfile::save_or_dump(
        "429",
        report.keys_in(KeyBucket::RateLimited),
        Path::new(&quota_filename(&date_stamp)),
    );

    report.log_summary();
    info!("✅ analyzer finished");
}
