//! Shared library for the key toolkit
//!
//! Holds the pieces every tool needs: tool identity for log filtering, the
//! tracing bootstrap, the newline-delimited key file store, and the error
//! types those produce.

pub mod errors;
pub mod keyfile;
pub mod logging;
pub mod types;

// Re-export main types
pub use errors::KeyfileError;
pub use types::{redacted, ToolId};
