//! Seams to the remote prediction backend and the host's clock, plus the
//! join/timeout combinators the orchestrator builds on them.

use crate::error::{Result, ServiceError};
use async_trait::async_trait;
use common::{AnalysisResult, FormInput, PredictionResult};
use futures::future::{self, Either};
use std::future::Future;
use std::time::Duration;
use tracing::{debug, instrument};

pub const PREDICT_ENDPOINT: &str = "/predict";
pub const ANALYZE_ENDPOINT: &str = "/analyze";

/// The two remote endpoints. Both take the same [`FormInput`] body.
#[async_trait(?Send)]
pub trait PredictionService {
    async fn predict(&self, input: &FormInput) -> Result<PredictionResult>;

    async fn analyze(&self, input: &FormInput) -> Result<AnalysisResult>;
}

/// Clock of the hosting runtime
#[async_trait(?Send)]
pub trait Timer {
    async fn sleep(&self, duration: Duration);
}

/// Issues `/predict` and `/analyze` together and waits for both.
///
/// The first failure wins: the other call is dropped and its result, if any,
/// is ignored.
#[instrument(skip_all)]
pub async fn fetch_both<S>(service: &S, input: &FormInput) -> Result<(PredictionResult, AnalysisResult)>
where
    S: PredictionService + ?Sized,
{
    debug!("Dispatching predict and analyze requests");
    future::try_join(service.predict(input), service.analyze(input)).await
}

/// Fails with [`ServiceError::Timeout`] if `fut` has not settled after `after`
pub async fn with_timeout<T, F, C>(timer: &C, after: Duration, fut: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
    C: Timer + ?Sized,
{
    let sleep = timer.sleep(after);
    futures::pin_mut!(fut);

    match future::select(fut, sleep).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(ServiceError::Timeout { after }),
    }
}
