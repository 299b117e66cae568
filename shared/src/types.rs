//! Core types shared by every tool in the workspace

use std::fmt;
use std::sync::OnceLock;

/// Global tool ID singleton - set once at startup
static TOOL_ID: OnceLock<ToolId> = OnceLock::new();

/// Identifies which binary is running; drives log filtering and diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolId {
    /// Key tester (liveness + chat probe, valid/invalid split)
    Tester,
    /// Response analyzer (chat probe only, 200/429/invalid split)
    Analyzer,
    /// Page scraper companion
    Scraper,
    /// Dedup/cleanup utility
    Dedup,
}

impl ToolId {
    /// Initialize the global tool ID; the first call wins
    pub fn init(tool: ToolId) -> &'static ToolId {
        TOOL_ID.get_or_init(|| tool)
    }

    /// Get the global tool ID (must be initialized first)
    pub fn current() -> &'static ToolId {
        TOOL_ID.get().expect("ToolId not initialized - call ToolId::init first")
    }
}

impl fmt::Display for ToolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToolId::Tester => write!(f, "tester"),
            ToolId::Analyzer => write!(f, "analyzer"),
            ToolId::Scraper => write!(f, "scraper"),
            ToolId::Dedup => write!(f, "dedup"),
        }
    }
}

/// Redacted form of a candidate key for logging: the first eight characters.
/// Whole keys stay out of the log stream.
pub fn redacted(key: &str) -> String {
    let cut = key
        .char_indices()
        .nth(8)
        .map(|(index, _)| index)
        .unwrap_or(key.len());
    format!("{}...", &key[..cut])
}
