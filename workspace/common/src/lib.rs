//! Common transport-layer types shared between the prediction backend and the frontend.
//! These structs mirror the `/predict` and `/analyze` request/response payloads
//! so the orchestrator and the browser client agree on a single set of shapes.

mod form;
mod prediction;

pub use form::{CRASH_DAY_OF_WEEK, CRASH_HOUR, FieldValue, FormError, FormInput, INTEGER_FIELDS};
pub use prediction::{AnalysisResult, ClusterId, PredictionResult, SeverityProbability};
