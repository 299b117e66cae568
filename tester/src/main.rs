//! Tester binary entry point
//!
//! Classifies candidate keys as valid or invalid: a cheap liveness probe
//! first, then one short chat turn. Quota-limited keys count as valid here;
//! the operator only cares whether the credential authenticates. Paths are
//! fixed constants so the tool can run unattended in a container.

use std::path::Path;

use chrono::Local;
use tracing::{info, warn};

use prober::{CheckPolicy, GeminiClient, KeyBucket, KeyRun, ProbeConfig};
use shared::{keyfile, logging, ToolId};

/// Candidate key file, mounted under /data for container use
const API_KEYS_FILE: &str = "/data/api_keys.txt";

/// Directory the dated verified-key file lands in
const OUTPUT_DIR: &str = "/data";

fn verified_filename(date_stamp: &str) -> String {
    format!("api_keys_verified_{date_stamp}.txt")
}

#[tokio::main]
async fn main() {
    ToolId::init(ToolId::Tester);
    logging::init_tracing();

    info!("🚀 starting Gemini API key tester");

    let keys = match keyfile::load_keys(Path::new(API_KEYS_FILE)) {
        Ok(keys) => keys,
        Err(e) => {
            warn!("{e}; continuing with an empty candidate list");
            Vec::new()
        }
    };

    let probe = ProbeConfig::default();
    let client = GeminiClient::new(probe.timeout_seconds);
    let run = KeyRun::new(client, CheckPolicy::Verify).with_probe_config(probe);

    let report = run.run(&keys).await;

    let date_stamp = Local::now().format("%Y%m%d").to_string();
    let output_path = Path::new(OUTPUT_DIR).join(verified_filename(&date_stamp));
    keyfile::save_or_dump("verified", report.keys_in(KeyBucket::Valid), &output_path);

    report.log_summary();
    info!("✅ tester finished");
}
