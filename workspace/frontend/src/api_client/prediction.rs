use async_trait::async_trait;
use common::{AnalysisResult, FormInput, PredictionResult};
use crashlens::{ANALYZE_ENDPOINT, PREDICT_ENDPOINT, PredictionService, ServiceError};
use crate::api_client;

/// Prediction backend reached over HTTP at the configured base URL
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpPredictionService;

#[async_trait(?Send)]
impl PredictionService for HttpPredictionService {
    async fn predict(&self, input: &FormInput) -> Result<PredictionResult, ServiceError> {
        log::trace!("Requesting severity prediction");
        let result: Result<PredictionResult, ServiceError> =
            api_client::post(PREDICT_ENDPOINT, input).await;
        match &result {
            Ok(prediction) => log::info!(
                "Predicted severity {:?} over {} classes",
                prediction.predicted_severity,
                prediction.probabilities.len()
            ),
            Err(e) => log::error!("Failed to fetch prediction: {}", e),
        }
        result
    }

    async fn analyze(&self, input: &FormInput) -> Result<AnalysisResult, ServiceError> {
        log::trace!("Requesting cluster analysis");
        let result: Result<AnalysisResult, ServiceError> =
            api_client::post(ANALYZE_ENDPOINT, input).await;
        match &result {
            Ok(analysis) => log::info!("Accident falls in cluster {}", analysis.cluster_number),
            Err(e) => log::error!("Failed to fetch analysis: {}", e),
        }
        result
    }
}
