//! Busy/idle state and the text shown in the form's result regions.

use crate::config::OrchestratorConfig;
use common::{AnalysisResult, PredictionResult};

/// Result region text while a submission is in flight
pub const LOADING_TEXT: &str = "Loading...";

/// Placeholder for empty result and analysis regions
pub const PLACEHOLDER: &str = "---";

/// Result text when the service answered without a severity label
pub const MISSING_SEVERITY: &str = "Error";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiState {
    #[default]
    Idle,
    Busy,
}

impl UiState {
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Busy)
    }
}

/// Snapshot of everything the form shows outside the chart
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub state: UiState,
    pub submit_enabled: bool,
    pub submit_label: String,
    pub result_text: String,
    pub cluster_text: String,
    pub description_text: String,
}

impl Panel {
    /// Panel as shown before the first submission
    pub fn idle(config: &OrchestratorConfig) -> Self {
        Self {
            state: UiState::Idle,
            submit_enabled: true,
            submit_label: config.submit_label.clone(),
            result_text: PLACEHOLDER.to_string(),
            cluster_text: PLACEHOLDER.to_string(),
            description_text: PLACEHOLDER.to_string(),
        }
    }

    /// Disables the submit control and puts every region into its loading text
    pub fn enter_busy(&mut self, config: &OrchestratorConfig) {
        self.state = UiState::Busy;
        self.submit_enabled = false;
        self.submit_label = config.busy_label.clone();
        self.result_text = LOADING_TEXT.to_string();
        self.cluster_text = PLACEHOLDER.to_string();
        self.description_text = PLACEHOLDER.to_string();
    }

    /// Re-enables the submit control. Result regions are left as they are.
    pub fn enter_idle(&mut self, config: &OrchestratorConfig) {
        self.state = UiState::Idle;
        self.submit_enabled = true;
        self.submit_label = config.submit_label.clone();
    }

    pub fn show_results(&mut self, prediction: &PredictionResult, analysis: &AnalysisResult) {
        self.result_text = prediction.severity().unwrap_or(MISSING_SEVERITY).to_string();
        self.cluster_text = format!("Cluster #{}", analysis.cluster_number);
        self.description_text = analysis.description.clone();
    }

    pub fn show_failure(&mut self, message: impl Into<String>) {
        self.result_text = message.into();
        self.cluster_text = PLACEHOLDER.to_string();
        self.description_text = PLACEHOLDER.to_string();
    }
}
