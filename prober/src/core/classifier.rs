//! Classification policies mapping probe outcomes to terminal buckets
//!
//! Two policies coexist on purpose and must not be merged. The tester only
//! cares whether a credential authenticates, so quota exhaustion folds into
//! `Valid`. The analyzer reports quota exhaustion as its own bucket.

use crate::types::{KeyBucket, ProbeOutcome};

/// Chat prompts the tester draws from, one at random per candidate
pub(crate) const TESTER_PROMPTS: [&str; 5] = [
    "Describe today's weather.",
    "Can you tell me a simple fact?",
    "Share an interesting piece of trivia.",
    "What do you think about technology?",
    "Give me one simple suggestion.",
];

/// Fixed prompt the analyzer sends to every candidate
pub(crate) const ANALYZER_PROMPT: &str = "Give me one simple suggestion.";

/// Named classification policy for one run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckPolicy {
    /// Tester variant: liveness pre-check, then a valid/invalid split only
    Verify,
    /// Analyzer variant: chat probe only, quota keys get their own bucket
    Analyze,
}

impl CheckPolicy {
    /// Whether the run performs the cheap liveness probe before the chat probe
    pub fn requires_liveness(&self) -> bool {
        matches!(self, CheckPolicy::Verify)
    }

    /// Map a chat probe outcome to a terminal bucket. Total and pure: every
    /// outcome lands in exactly one bucket.
    pub fn classify(&self, outcome: &ProbeOutcome) -> KeyBucket {
        match (self, outcome) {
            (CheckPolicy::Verify, ProbeOutcome::Success(_) | ProbeOutcome::QuotaExceeded(_)) => {
                KeyBucket::Valid
            }
            (CheckPolicy::Verify, _) => KeyBucket::Invalid,
            (CheckPolicy::Analyze, ProbeOutcome::Success(_)) => KeyBucket::Valid,
            (CheckPolicy::Analyze, ProbeOutcome::QuotaExceeded(_)) => KeyBucket::RateLimited,
            (CheckPolicy::Analyze, _) => KeyBucket::Invalid,
        }
    }
}
