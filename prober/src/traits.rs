//! Prober trait definitions for dependency injection

use async_trait::async_trait;

use crate::types::ProbeOutcome;

/// Remote model API used to probe candidate keys.
///
/// `list_models` doubles as the liveness probe: a credential that can list
/// models authenticates regardless of its quota state.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ModelApi: Send + Sync {
    /// List the model names visible to the credential
    async fn list_models(&self, api_key: &str) -> Result<Vec<String>, ProbeOutcome>;

    /// Send one chat turn with a bounded output budget and interpret the result
    async fn send_chat(
        &self,
        api_key: &str,
        model: &str,
        prompt: &str,
        max_output_tokens: u32,
    ) -> ProbeOutcome;
}
