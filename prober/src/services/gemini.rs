//! Gemini API client implementing the `ModelApi` probe seam

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::traits::ModelApi;
use crate::types::{ProbeOutcome, EMPTY_REPLY_MARKER};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Quota indicators surfaced inside Gemini error payloads. The API reports
/// quota exhaustion with the same error shape as an outright invalid key, so
/// this text check must run before any status-based dispatch.
pub(crate) fn is_quota_error(message: &str) -> bool {
    message.contains("429") || message.contains("Quota exceeded")
}

/// Map an HTTP error response from the API to a probe outcome
pub(crate) fn outcome_from_api_error(status: StatusCode, body: &str) -> ProbeOutcome {
    let message = format!("HTTP {status}: {body}");
    if is_quota_error(&message) {
        ProbeOutcome::QuotaExceeded(message)
    } else {
        ProbeOutcome::ClientError(message)
    }
}

/// Map a transport-level failure to a probe outcome
pub(crate) fn outcome_from_transport_error(error: reqwest::Error) -> ProbeOutcome {
    if error.is_timeout() {
        ProbeOutcome::TransientError(format!("network timeout: {error}"))
    } else {
        ProbeOutcome::TransientError(format!("network error: {error}"))
    }
}

/// Gemini REST client. One bounded timeout per request, no retries: a
/// transient failure classifies the candidate for this run, and re-running
/// the tool is the retry mechanism.
pub struct GeminiClient {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl GeminiClient {
    /// Create a client against the production endpoint
    pub fn new(timeout_seconds: u64) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, timeout_seconds)
    }

    /// Point the client at a different endpoint; tests use this to talk to a
    /// local mock server
    pub fn with_base_url(base_url: impl Into<String>, timeout_seconds: u64) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            timeout: Duration::from_secs(timeout_seconds),
        }
    }
}

#[async_trait]
impl ModelApi for GeminiClient {
    async fn list_models(&self, api_key: &str) -> Result<Vec<String>, ProbeOutcome> {
        let url = format!("{}/v1beta/models", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[("key", api_key)])
            .timeout(self.timeout)
            .send()
            .await
            .map_err(outcome_from_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(outcome_from_api_error(status, &body));
        }

        let response_json: serde_json::Value = response.json().await.map_err(|e| {
            ProbeOutcome::TransientError(format!("failed to parse model list: {e}"))
        })?;

        let models = response_json
            .get("models")
            .and_then(|models| models.as_array())
            .map(|models| {
                models
                    .iter()
                    .filter_map(|model| model.get("name").and_then(|name| name.as_str()))
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Ok(models)
    }

    async fn send_chat(
        &self,
        api_key: &str,
        model: &str,
        prompt: &str,
        max_output_tokens: u32,
    ) -> ProbeOutcome {
        let request_body = serde_json::json!({
            "contents": [
                {
                    "parts": [
                        {
                            "text": prompt
                        }
                    ]
                }
            ],
            "generationConfig": {
                "maxOutputTokens": max_output_tokens
            }
        });

        let url = format!("{}/v1beta/models/{}:generateContent", self.base_url, model);

        let response = match self
            .client
            .post(&url)
            .query(&[("key", api_key)])
            .header("Content-Type", "application/json")
            .json(&request_body)
            .timeout(self.timeout)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => return outcome_from_transport_error(e),
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return outcome_from_api_error(status, &body);
        }

        let response_json: serde_json::Value = match response.json().await {
            Ok(json) => json,
            Err(e) => {
                return ProbeOutcome::TransientError(format!("failed to parse chat response: {e}"))
            }
        };

        let text = response_json
            .get("candidates")
            .and_then(|candidates| candidates.get(0))
            .and_then(|candidate| candidate.get("content"))
            .and_then(|content| content.get("parts"))
            .and_then(|parts| parts.get(0))
            .and_then(|part| part.get("text"))
            .and_then(|text| text.as_str())
            .unwrap_or("");

        if text.is_empty() {
            ProbeOutcome::Success(EMPTY_REPLY_MARKER.to_string())
        } else {
            ProbeOutcome::Success(text.to_string())
        }
    }
}
