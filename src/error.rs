use common::FormError;
use std::time::Duration;
use thiserror::Error;

/// Message shown in the result region whenever either endpoint fails
pub const CONNECTION_FAILED: &str = "Error: Connection failed.";

/// Error types for calls to the prediction backend
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ServiceError {
    /// The endpoint answered with a non-success status
    #[error("{endpoint} returned {status} {reason}")]
    Status {
        endpoint: String,
        status: u16,
        reason: String,
    },

    /// The request never produced a response
    #[error("{endpoint} request failed: {message}")]
    Transport { endpoint: String, message: String },

    /// The response body was not the expected JSON
    #[error("{endpoint} returned an unreadable body: {message}")]
    Decode { endpoint: String, message: String },

    /// The request pair did not settle in time
    #[error("no response within {after:?}")]
    Timeout { after: Duration },
}

/// Error types for the chart drawing surface
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    #[error("Chart render error: {0}")]
    Render(String),
}

/// Everything that can end a submission without results
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SubmitError {
    #[error("Invalid form input: {0}")]
    Form(#[from] FormError),

    #[error("Prediction service error: {0}")]
    Service(#[from] ServiceError),
}

impl SubmitError {
    /// Text for the result region.
    ///
    /// Service failures of any kind collapse into [`CONNECTION_FAILED`].
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Form(FormError::InvalidInteger { field, .. }) => {
                format!("Error: {} must be a whole number.", field)
            }
            SubmitError::Service(_) => CONNECTION_FAILED.to_string(),
        }
    }
}

/// Type alias for Result with ServiceError
pub type Result<T> = std::result::Result<T, ServiceError>;
