use serde::Deserialize;
use std::time::Duration;

/// Orchestrator settings. Missing keys fall back to [`OrchestratorConfig::default`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct OrchestratorConfig {
    /// Upper bound on how long a submission may stay busy
    pub request_timeout_ms: u64,

    /// Submit button label while idle
    pub submit_label: String,

    /// Submit button label while a submission is in flight
    pub busy_label: String,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            request_timeout_ms: 30_000,
            submit_label: "Analyze Accident".to_string(),
            busy_label: "Analyzing...".to_string(),
        }
    }
}

impl OrchestratorConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}
