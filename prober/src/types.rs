//! Core types for key probing and classification

use std::time::Duration;

use rand::Rng;
use tracing::{info, warn};

use shared::redacted;

/// Marker text recorded when a chat probe succeeds with an empty body.
/// An empty reply is a successful probe, not an error.
pub const EMPTY_REPLY_MARKER: &str = "(empty reply)";

/// Interpreted result of one remote probe call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The call succeeded; carries the response text
    Success(String),
    /// The remote reported quota or rate-limit exhaustion. The credential is
    /// live and reachable; this is a classification signal, not a failure.
    QuotaExceeded(String),
    /// The remote rejected the call with an API-level error
    ClientError(String),
    /// Transport-level or otherwise unexpected failure
    TransientError(String),
}

impl ProbeOutcome {
    /// The response text or error message this outcome carries
    pub fn message(&self) -> &str {
        match self {
            ProbeOutcome::Success(text)
            | ProbeOutcome::QuotaExceeded(text)
            | ProbeOutcome::ClientError(text)
            | ProbeOutcome::TransientError(text) => text,
        }
    }
}

/// Terminal classification bucket for a candidate key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyBucket {
    /// Authenticates and answers; under the tester policy this also covers
    /// quota-limited keys
    Valid,
    /// Live but quota-exhausted; only the analyzer policy reports this bucket
    RateLimited,
    /// Everything else
    Invalid,
}

/// Request parameters for the chat probe
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    pub model: String,
    pub max_output_tokens: u32,
    pub timeout_seconds: u64,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            model: "gemma-3-1b-it".to_string(),
            max_output_tokens: 10,
            timeout_seconds: 30,
        }
    }
}

/// Politeness pause drawn between consecutive probes.
///
/// The remote side watches for abusive call patterns; the pause is part of
/// the contract against it and must survive any restructuring of the run
/// loop.
#[derive(Debug, Clone, Copy)]
pub struct PacingPolicy {
    pub min_secs: u64,
    pub max_secs: u64,
}

impl PacingPolicy {
    /// Zero pause, for tests
    pub fn none() -> Self {
        Self {
            min_secs: 0,
            max_secs: 0,
        }
    }

    /// Sample a pause uniformly from the inclusive [min, max] interval
    pub fn sample(&self) -> Duration {
        if self.max_secs <= self.min_secs {
            return Duration::from_secs(self.min_secs);
        }
        let secs = rand::thread_rng().gen_range(self.min_secs..=self.max_secs);
        Duration::from_secs(secs)
    }
}

impl Default for PacingPolicy {
    fn default() -> Self {
        Self {
            min_secs: 2,
            max_secs: 5,
        }
    }
}

/// Accumulated classification result of one run.
///
/// Buckets keep insertion order; every input key lands in exactly one bucket.
#[derive(Debug, Default)]
pub struct RunReport {
    pub valid: Vec<String>,
    pub rate_limited: Vec<String>,
    pub invalid: Vec<String>,
    /// Model names fetched best-effort before probing began, if any
    pub reference_models: Vec<String>,
    /// The key that fetched the reference model list
    pub model_fetch_key: Option<String>,
}

impl RunReport {
    /// Append a key to its terminal bucket
    pub fn record(&mut self, bucket: KeyBucket, key: String) {
        match bucket {
            KeyBucket::Valid => self.valid.push(key),
            KeyBucket::RateLimited => self.rate_limited.push(key),
            KeyBucket::Invalid => self.invalid.push(key),
        }
    }

    /// Keys recorded in a bucket, in insertion order
    pub fn keys_in(&self, bucket: KeyBucket) -> &[String] {
        match bucket {
            KeyBucket::Valid => &self.valid,
            KeyBucket::RateLimited => &self.rate_limited,
            KeyBucket::Invalid => &self.invalid,
        }
    }

    /// Total keys classified across all buckets
    pub fn total(&self) -> usize {
        self.valid.len() + self.rate_limited.len() + self.invalid.len()
    }

    /// Log end-of-run totals and the reference model fetch result
    pub fn log_summary(&self) {
        info!("--- run summary ---");
        info!("keys checked: {}", self.total());
        info!("valid: {}", self.valid.len());
        if !self.rate_limited.is_empty() {
            info!("rate limited: {}", self.rate_limited.len());
        }
        info!("invalid: {}", self.invalid.len());
        match &self.model_fetch_key {
            Some(key) => info!(
                "model list fetched with key {} ({} models)",
                redacted(key),
                self.reference_models.len()
            ),
            None => warn!("the model list could not be fetched with any key"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pacing_sample_stays_in_bounds() {
        let pacing = PacingPolicy {
            min_secs: 2,
            max_secs: 5,
        };
        for _ in 0..50 {
            let pause = pacing.sample();
            assert!(pause >= Duration::from_secs(2));
            assert!(pause <= Duration::from_secs(5));
        }
    }

    #[test]
    fn test_pacing_none_is_zero() {
        assert_eq!(PacingPolicy::none().sample(), Duration::ZERO);
    }

    #[test]
    fn test_report_buckets_keep_insertion_order() {
        let mut report = RunReport::default();
        report.record(KeyBucket::Valid, "b".to_string());
        report.record(KeyBucket::Valid, "a".to_string());
        report.record(KeyBucket::Invalid, "c".to_string());

        assert_eq!(report.keys_in(KeyBucket::Valid), ["b", "a"]);
        assert_eq!(report.keys_in(KeyBucket::Invalid), ["c"]);
        assert_eq!(report.total(), 3);
    }
}
