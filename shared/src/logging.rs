//! Logging bootstrap shared by every binary
//!
//! One explicit initialization at startup, keyed off the [`ToolId`]
//! singleton; components receive the subscriber implicitly through `tracing`
//! rather than through module-level mutable state.

use tracing_subscriber::{fmt, EnvFilter};

use crate::types::ToolId;

/// Initialize the tracing subscriber for the current tool at the default level
pub fn init_tracing() {
    init_tracing_with_level(None);
}

/// Initialize the tracing subscriber with an explicit base level
pub fn init_tracing_with_level(log_level: Option<&str>) {
    let tool = ToolId::current();
    let base_level = log_level.unwrap_or("info");

    let env_filter = format!(
        "{tool}={base_level},shared={base_level},prober={base_level},reqwest=warn"
    );

    fmt()
        .with_env_filter(EnvFilter::new(&env_filter))
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}
