#[cfg(test)]
pub mod test_utils {
    use crate::chart::{BarChartSpec, ChartSurface};
    use crate::config::OrchestratorConfig;
    use crate::error::{ChartError, ServiceError};
    use crate::orchestrator::{FormView, Orchestrator};
    use crate::service::{ANALYZE_ENDPOINT, PREDICT_ENDPOINT, PredictionService, Timer};
    use crate::ui_state::Panel;
    use async_trait::async_trait;
    use common::{AnalysisResult, ClusterId, FormInput, PredictionResult, SeverityProbability};
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;
    use tracing::Level;
    use tracing_subscriber::FmtSubscriber;

    pub type TestOrchestrator =
        Orchestrator<ScriptedService, RecordingChartSurface, TokioTimer, RecordingView>;

    /// `Fatal` at 62.5% and `Injury` at 37.5%
    pub fn fatal_prediction() -> PredictionResult {
        PredictionResult {
            predicted_severity: Some("Fatal".to_string()),
            probabilities: vec![
                SeverityProbability {
                    class: "Fatal".to_string(),
                    probability: 62.5,
                },
                SeverityProbability {
                    class: "Injury".to_string(),
                    probability: 37.5,
                },
            ],
        }
    }

    /// Cluster 3, "High-speed intersection collisions"
    pub fn sample_analysis() -> AnalysisResult {
        AnalysisResult {
            cluster_number: ClusterId(3),
            description: "High-speed intersection collisions".to_string(),
        }
    }

    pub fn sample_form() -> Vec<(&'static str, &'static str)> {
        vec![
            ("weather_condition", "CLEAR"),
            ("lighting_condition", "DAYLIGHT"),
            ("prim_contributory_cause", "FAILING TO YIELD RIGHT-OF-WAY"),
            ("crash_hour", "14"),
            ("crash_day_of_week", "6"),
        ]
    }

    pub fn server_error(endpoint: &str) -> ServiceError {
        ServiceError::Status {
            endpoint: endpoint.to_string(),
            status: 500,
            reason: "INTERNAL SERVER ERROR".to_string(),
        }
    }

    struct Script {
        predict: Result<PredictionResult, ServiceError>,
        analyze: Result<AnalysisResult, ServiceError>,
        predict_hangs: bool,
        analyze_hangs: bool,
        requests: Vec<(&'static str, serde_json::Value)>,
    }

    /// Prediction backend that answers from a script and records every request body.
    /// Clones share the same script.
    #[derive(Clone)]
    pub struct ScriptedService {
        script: Rc<RefCell<Script>>,
    }

    impl ScriptedService {
        pub fn new(
            predict: Result<PredictionResult, ServiceError>,
            analyze: Result<AnalysisResult, ServiceError>,
        ) -> Self {
            Self {
                script: Rc::new(RefCell::new(Script {
                    predict,
                    analyze,
                    predict_hangs: false,
                    analyze_hangs: false,
                    requests: Vec::new(),
                })),
            }
        }

        pub fn succeeding() -> Self {
            Self::new(Ok(fatal_prediction()), Ok(sample_analysis()))
        }

        pub fn with_predict_hanging(self) -> Self {
            self.script.borrow_mut().predict_hangs = true;
            self
        }

        pub fn with_analyze_hanging(self) -> Self {
            self.script.borrow_mut().analyze_hangs = true;
            self
        }

        pub fn set_predict(&self, response: Result<PredictionResult, ServiceError>) {
            self.script.borrow_mut().predict = response;
        }

        pub fn set_analyze(&self, response: Result<AnalysisResult, ServiceError>) {
            self.script.borrow_mut().analyze = response;
        }

        pub fn requests(&self) -> Vec<(&'static str, serde_json::Value)> {
            self.script.borrow().requests.clone()
        }

        pub fn predict_calls(&self) -> usize {
            self.calls_to(PREDICT_ENDPOINT)
        }

        pub fn analyze_calls(&self) -> usize {
            self.calls_to(ANALYZE_ENDPOINT)
        }

        fn calls_to(&self, endpoint: &str) -> usize {
            self.script
                .borrow()
                .requests
                .iter()
                .filter(|(called, _)| *called == endpoint)
                .count()
        }

        fn record(&self, endpoint: &'static str, input: &FormInput) {
            let body = serde_json::to_value(input).expect("form input serializes");
            self.script.borrow_mut().requests.push((endpoint, body));
        }
    }

    #[async_trait(?Send)]
    impl PredictionService for ScriptedService {
        async fn predict(&self, input: &FormInput) -> Result<PredictionResult, ServiceError> {
            self.record(PREDICT_ENDPOINT, input);
            let (hangs, response) = {
                let script = self.script.borrow();
                (script.predict_hangs, script.predict.clone())
            };
            if hangs {
                futures::future::pending::<()>().await;
            }
            tokio::task::yield_now().await;
            response
        }

        async fn analyze(&self, input: &FormInput) -> Result<AnalysisResult, ServiceError> {
            self.record(ANALYZE_ENDPOINT, input);
            let (hangs, response) = {
                let script = self.script.borrow();
                (script.analyze_hangs, script.analyze.clone())
            };
            if hangs {
                futures::future::pending::<()>().await;
            }
            tokio::task::yield_now().await;
            response
        }
    }

    #[derive(Default)]
    pub struct ChartLog {
        next_id: u32,
        pub live: Vec<u32>,
        pub created: Vec<BarChartSpec>,
        pub destroyed: Vec<u32>,
        pub fail_next: bool,
    }

    /// Chart surface that tracks which charts are alive
    #[derive(Clone, Default)]
    pub struct RecordingChartSurface {
        pub log: Rc<RefCell<ChartLog>>,
    }

    impl RecordingChartSurface {
        pub fn live_count(&self) -> usize {
            self.log.borrow().live.len()
        }

        pub fn created_count(&self) -> usize {
            self.log.borrow().created.len()
        }

        pub fn last_created(&self) -> Option<BarChartSpec> {
            self.log.borrow().created.last().cloned()
        }

        pub fn fail_next(&self) {
            self.log.borrow_mut().fail_next = true;
        }
    }

    impl ChartSurface for RecordingChartSurface {
        type Handle = u32;

        fn create(&mut self, spec: &BarChartSpec) -> Result<u32, ChartError> {
            let mut log = self.log.borrow_mut();
            if log.fail_next {
                log.fail_next = false;
                return Err(ChartError::Render("canvas unavailable".to_string()));
            }
            log.next_id += 1;
            let id = log.next_id;
            log.live.push(id);
            log.created.push(spec.clone());
            Ok(id)
        }

        fn destroy(&mut self, handle: u32) {
            let mut log = self.log.borrow_mut();
            log.live.retain(|live| *live != handle);
            log.destroyed.push(handle);
        }
    }

    /// View that keeps every rendered panel
    #[derive(Clone, Default)]
    pub struct RecordingView {
        pub panels: Rc<RefCell<Vec<Panel>>>,
    }

    impl RecordingView {
        pub fn rendered(&self) -> Vec<Panel> {
            self.panels.borrow().clone()
        }
    }

    impl FormView for RecordingView {
        fn render(&mut self, panel: &Panel) {
            self.panels.borrow_mut().push(panel.clone());
        }
    }

    pub struct TokioTimer;

    #[async_trait(?Send)]
    impl Timer for TokioTimer {
        async fn sleep(&self, duration: Duration) {
            tokio::time::sleep(duration).await;
        }
    }

    /// Orchestrator wired to the recording fakes, plus handles to inspect them
    pub struct Harness {
        pub orchestrator: TestOrchestrator,
        pub service: ScriptedService,
        pub chart: RecordingChartSurface,
        pub view: RecordingView,
    }

    pub fn setup_harness(service: ScriptedService) -> Harness {
        setup_harness_with_config(service, OrchestratorConfig::default())
    }

    pub fn setup_harness_with_config(service: ScriptedService, config: OrchestratorConfig) -> Harness {
        let chart = RecordingChartSurface::default();
        let view = RecordingView::default();
        let orchestrator = Orchestrator::new(
            service.clone(),
            chart.clone(),
            TokioTimer,
            view.clone(),
            config,
        );
        // Drop the initial idle render so tests only see submission renders
        view.panels.borrow_mut().clear();

        Harness {
            orchestrator,
            service,
            chart,
            view,
        }
    }

    /// Initialize tracing for tests with output to STDERR.
    ///
    /// The log level is read from RUST_LOG, defaulting to WARN.
    pub fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let log_level = std::env::var("RUST_LOG")
            .ok()
            .and_then(|level| match level.to_uppercase().as_str() {
                "ERROR" => Some(Level::ERROR),
                "WARN" => Some(Level::WARN),
                "INFO" => Some(Level::INFO),
                "DEBUG" => Some(Level::DEBUG),
                "TRACE" => Some(Level::TRACE),
                _ => None,
            })
            .unwrap_or(Level::WARN);

        let subscriber = FmtSubscriber::builder()
            .with_max_level(log_level)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }
}
