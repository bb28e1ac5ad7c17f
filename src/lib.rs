//! Form orchestration for the accident severity predictor.
//!
//! [`Orchestrator`] takes one form submission, sends it to the `/predict` and
//! `/analyze` endpoints at the same time, and renders either both results or a
//! single failure message. The HTTP client, chart library, clock and UI are
//! plugged in through [`PredictionService`], [`ChartSurface`], [`Timer`] and
//! [`FormView`], so the same lifecycle runs in the browser and under tests.

pub mod chart;
pub mod config;
pub mod error;
pub mod orchestrator;
pub mod service;
pub mod ui_state;

#[cfg(test)]
mod test_utils;

pub use chart::{BarChartSpec, ChartSurface};
pub use config::OrchestratorConfig;
pub use error::{CONNECTION_FAILED, ChartError, ServiceError, SubmitError};
pub use orchestrator::{FormView, Orchestrator, SubmissionOutcome};
pub use service::{ANALYZE_ENDPOINT, PREDICT_ENDPOINT, PredictionService, Timer};
pub use ui_state::{Panel, UiState};

// Re-export the transport types so callers need a single dependency
pub use common;
