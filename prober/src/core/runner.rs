//! Sequential run orchestrator
//!
//! Iterates candidates in input order, probes each through the injected
//! `ModelApi`, classifies with the configured policy, and pauses between
//! probes. Probing is strictly sequential: the pause is a politeness
//! contract with the remote service, so candidates are never probed in
//! parallel.

use rand::Rng;
use tracing::{error, info, warn};

use shared::redacted;

use crate::core::classifier::{CheckPolicy, ANALYZER_PROMPT, TESTER_PROMPTS};
use crate::traits::ModelApi;
use crate::types::{KeyBucket, PacingPolicy, ProbeConfig, RunReport};

/// One-shot classification run over a finite candidate list
pub struct KeyRun<A: ModelApi> {
    api: A,
    policy: CheckPolicy,
    probe: ProbeConfig,
    pacing: PacingPolicy,
}

impl<A: ModelApi> KeyRun<A> {
    pub fn new(api: A, policy: CheckPolicy) -> Self {
        Self {
            api,
            policy,
            probe: ProbeConfig::default(),
            pacing: PacingPolicy::default(),
        }
    }

    pub fn with_probe_config(mut self, probe: ProbeConfig) -> Self {
        self.probe = probe;
        self
    }

    pub fn with_pacing(mut self, pacing: PacingPolicy) -> Self {
        self.pacing = pacing;
        self
    }

    /// Run the full candidate list to completion and return the bucketed
    /// report. Never fails: per-candidate problems become buckets, not
    /// errors.
    pub async fn run(&self, keys: &[String]) -> RunReport {
        let mut report = RunReport::default();

        if keys.is_empty() {
            warn!("no candidate keys to check, nothing to do");
            return report;
        }

        info!("checking {} candidate keys", keys.len());
        self.fetch_reference_models(keys, &mut report).await;

        for (index, key) in keys.iter().enumerate() {
            self.check_one(key, index, keys.len(), &mut report).await;

            if index + 1 < keys.len() {
                let pause = self.pacing.sample();
                info!("waiting {}s before the next probe", pause.as_secs());
                tokio::time::sleep(pause).await;
            }
        }

        report
    }

    /// Probe one candidate and record its bucket
    async fn check_one(&self, key: &str, index: usize, total: usize, report: &mut RunReport) {
        info!("checking key {}/{}: {}", index + 1, total, redacted(key));

        if self.policy.requires_liveness() {
            if let Err(outcome) = self.api.list_models(key).await {
                warn!(
                    "key {} failed the liveness probe: {}",
                    redacted(key),
                    outcome.message()
                );
                report.record(KeyBucket::Invalid, key.to_string());
                return;
            }
            info!("key {} passed the liveness probe", redacted(key));
        }

        let prompt = self.pick_prompt();
        let outcome = self
            .api
            .send_chat(key, &self.probe.model, prompt, self.probe.max_output_tokens)
            .await;
        let bucket = self.policy.classify(&outcome);

        match bucket {
            KeyBucket::Valid => info!("key {} classified valid", redacted(key)),
            KeyBucket::RateLimited => info!(
                "key {} classified rate-limited: {}",
                redacted(key),
                outcome.message()
            ),
            KeyBucket::Invalid => warn!(
                "key {} classified invalid: {}",
                redacted(key),
                outcome.message()
            ),
        }

        report.record(bucket, key.to_string());
    }

    fn pick_prompt(&self) -> &'static str {
        match self.policy {
            CheckPolicy::Verify => {
                let index = rand::thread_rng().gen_range(0..TESTER_PROMPTS.len());
                TESTER_PROMPTS[index]
            }
            CheckPolicy::Analyze => ANALYZER_PROMPT,
        }
    }

    /// Best-effort reference model fetch with the first key that can list
    /// models. Informational only; failure never aborts the run and has no
    /// effect on classification.
    async fn fetch_reference_models(&self, keys: &[String], report: &mut RunReport) {
        info!("trying to fetch the model list with a working key");
        for key in keys {
            match self.api.list_models(key).await {
                Ok(models) => {
                    info!(
                        "fetched {} models with key {}",
                        models.len(),
                        redacted(key)
                    );
                    report.reference_models = models;
                    report.model_fetch_key = Some(key.clone());
                    return;
                }
                Err(outcome) => {
                    warn!(
                        "model list fetch with key {} failed: {}",
                        redacted(key),
                        outcome.message()
                    );
                }
            }
        }
        error!("no candidate key could fetch the model list");
    }
}
