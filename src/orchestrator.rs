use crate::chart::{BarChartSpec, ChartSurface};
use crate::config::OrchestratorConfig;
use crate::error::SubmitError;
use crate::service::{PredictionService, Timer, fetch_both, with_timeout};
use crate::ui_state::{Panel, UiState};
use common::{AnalysisResult, ClusterId, FormInput, PredictionResult};
use tracing::{debug, error, info, instrument, trace, warn};

/// Where the orchestrator publishes [`Panel`] updates
pub trait FormView {
    fn render(&mut self, panel: &Panel);
}

/// How a single submission ended
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    /// Both endpoints answered and the results were rendered
    Rendered {
        severity: Option<String>,
        cluster: ClusterId,
    },
    /// Nothing was rendered; the result region shows the error's user message
    Failed(SubmitError),
}

impl SubmissionOutcome {
    pub fn is_rendered(&self) -> bool {
        matches!(self, Self::Rendered { .. })
    }
}

/// Drives the form: one submission in, one request pair out, one outcome rendered.
///
/// The orchestrator is the only owner of the live chart handle. Any previous
/// chart is destroyed before a new one is created.
pub struct Orchestrator<S, C, T, V>
where
    C: ChartSurface,
{
    service: S,
    chart_surface: C,
    chart: Option<C::Handle>,
    timer: T,
    view: V,
    config: OrchestratorConfig,
    panel: Panel,
}

impl<S, C, T, V> Orchestrator<S, C, T, V>
where
    S: PredictionService,
    C: ChartSurface,
    T: Timer,
    V: FormView,
{
    pub fn new(service: S, chart_surface: C, timer: T, mut view: V, config: OrchestratorConfig) -> Self {
        let panel = Panel::idle(&config);
        view.render(&panel);
        Self {
            service,
            chart_surface,
            chart: None,
            timer,
            view,
            config,
            panel,
        }
    }

    pub fn state(&self) -> UiState {
        self.panel.state
    }

    pub fn panel(&self) -> &Panel {
        &self.panel
    }

    pub fn has_chart(&self) -> bool {
        self.chart.is_some()
    }

    /// Runs one submission from raw `(name, value)` form fields.
    ///
    /// Every call goes through exactly one Busy -> Idle cycle, whatever the
    /// outcome. Errors never escape; they are logged and rendered.
    #[instrument(skip_all)]
    pub async fn handle_submit<I, K, Val>(&mut self, fields: I) -> SubmissionOutcome
    where
        I: IntoIterator<Item = (K, Val)>,
        K: Into<String>,
        Val: Into<String>,
    {
        let input = FormInput::from_fields(fields);
        self.enter_busy();

        let outcome = match input {
            Ok(input) => self.fetch(&input).await,
            Err(err) => Err(SubmitError::from(err)),
        };

        let outcome = match outcome {
            Ok((prediction, analysis)) => {
                self.show_results(&prediction, &analysis);
                SubmissionOutcome::Rendered {
                    severity: prediction.severity().map(str::to_string),
                    cluster: analysis.cluster_number,
                }
            }
            Err(err) => {
                error!(%err, "Submission failed");
                self.panel.show_failure(err.user_message());
                SubmissionOutcome::Failed(err)
            }
        };

        self.enter_idle();
        outcome
    }

    async fn fetch(&self, input: &FormInput) -> Result<(PredictionResult, AnalysisResult), SubmitError> {
        if let Ok(payload) = serde_json::to_string(input) {
            debug!(%payload, "Sending form data");
        }
        let timeout = self.config.request_timeout();
        let (prediction, analysis) =
            with_timeout(&self.timer, timeout, fetch_both(&self.service, input)).await?;
        debug!(?prediction, "Prediction received");
        debug!(?analysis, "Analysis received");
        Ok((prediction, analysis))
    }

    fn enter_busy(&mut self) {
        trace!("Entering busy state");
        self.panel.enter_busy(&self.config);
        self.destroy_chart();
        self.view.render(&self.panel);
    }

    fn enter_idle(&mut self) {
        trace!("Entering idle state");
        self.panel.enter_idle(&self.config);
        self.view.render(&self.panel);
    }

    fn show_results(&mut self, prediction: &PredictionResult, analysis: &AnalysisResult) {
        self.panel.show_results(prediction, analysis);
        self.replace_chart(BarChartSpec::from_probabilities(&prediction.probabilities));
        info!(
            severity = self.panel.result_text.as_str(),
            cluster = %analysis.cluster_number,
            "Rendered prediction"
        );
    }

    fn replace_chart(&mut self, spec: BarChartSpec) {
        self.destroy_chart();
        match self.chart_surface.create(&spec) {
            Ok(handle) => self.chart = Some(handle),
            Err(err) => warn!(%err, "Probability chart not drawn"),
        }
    }

    fn destroy_chart(&mut self) {
        if let Some(handle) = self.chart.take() {
            trace!("Destroying previous chart");
            self.chart_surface.destroy(handle);
        }
    }
}
