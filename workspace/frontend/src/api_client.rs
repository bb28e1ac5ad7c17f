pub mod prediction;

use crashlens::ServiceError;
use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use crate::settings;

fn api_base() -> String {
    settings::get_settings().api_base_url()
}

/// Error body the prediction backend sends alongside a 4xx/5xx
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Common POST request handler
pub async fn post<T, B>(endpoint: &str, body: &B) -> Result<T, ServiceError>
where
    T: for<'de> Deserialize<'de>,
    B: Serialize,
{
    let url = format!("{}{}", api_base(), endpoint);
    log::debug!("POST request to: {}", url);

    let response = Request::post(&url)
        .json(body)
        .map_err(|e| {
            log::error!("POST {} - Failed to serialize request: {}", endpoint, e);
            ServiceError::Transport {
                endpoint: endpoint.to_string(),
                message: e.to_string(),
            }
        })?
        .send()
        .await
        .map_err(|e| {
            log::error!("POST {} - Request failed: {}", endpoint, e);
            ServiceError::Transport {
                endpoint: endpoint.to_string(),
                message: e.to_string(),
            }
        })?;

    if !response.ok() {
        let status = response.status();
        let reason = response.status_text();
        log::warn!("POST {} - Non-OK response: {} {}", endpoint, status, reason);
        if let Ok(err) = response.json::<ErrorResponse>().await {
            log::error!("POST {} - API error: {}", endpoint, err.error);
        }
        return Err(ServiceError::Status {
            endpoint: endpoint.to_string(),
            status,
            reason,
        });
    }

    log::trace!("POST {} - Response received, parsing JSON", endpoint);
    let data: T = response.json().await.map_err(|e| {
        log::error!("POST {} - Failed to parse response: {}", endpoint, e);
        ServiceError::Decode {
            endpoint: endpoint.to_string(),
            message: e.to_string(),
        }
    })?;

    log::info!("POST {} - Success", endpoint);
    Ok(data)
}
