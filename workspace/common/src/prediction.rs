use serde::{Deserialize, Serialize};
use std::fmt;

/// One entry of the model's class distribution, in percent (0-100)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeverityProbability {
    pub class: String,
    pub probability: f64,
}

/// Response of `POST /predict`.
///
/// `probabilities` is rendered in the order the service sends it; the client
/// never re-sorts it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    #[serde(default)]
    pub predicted_severity: Option<String>,
    pub probabilities: Vec<SeverityProbability>,
}

impl PredictionResult {
    /// The predicted label, if the service sent a non-empty one
    pub fn severity(&self) -> Option<&str> {
        self.predicted_severity
            .as_deref()
            .filter(|label| !label.is_empty())
    }
}

/// Identifier of the accident cluster returned by `/analyze`.
///
/// The backend reports it either as a JSON integer or as a numeric string
/// (`"3"`), so both are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawClusterId")]
pub struct ClusterId(pub i64);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawClusterId {
    Number(i64),
    Text(String),
}

impl TryFrom<RawClusterId> for ClusterId {
    type Error = String;

    fn try_from(raw: RawClusterId) -> Result<Self, Self::Error> {
        match raw {
            RawClusterId::Number(value) => Ok(ClusterId(value)),
            RawClusterId::Text(text) => text
                .trim()
                .parse::<i64>()
                .map(ClusterId)
                .map_err(|_| format!("cluster_number is not an integer: {:?}", text)),
        }
    }
}

impl fmt::Display for ClusterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Response of `POST /analyze`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub cluster_number: ClusterId,
    #[serde(default)]
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_prediction_keeps_service_order() {
        let result: PredictionResult = serde_json::from_value(json!({
            "predicted_severity": "Fatal",
            "probabilities": [
                { "class": "Injury", "probability": 37.5 },
                { "class": "Fatal", "probability": 62.5 }
            ]
        }))
        .unwrap();

        assert_eq!(result.severity(), Some("Fatal"));
        let classes: Vec<&str> = result.probabilities.iter().map(|p| p.class.as_str()).collect();
        assert_eq!(classes, vec!["Injury", "Fatal"]);
        assert_eq!(result.probabilities[1].probability, 62.5);
    }

    #[test]
    fn test_missing_or_empty_severity() {
        let missing: PredictionResult =
            serde_json::from_value(json!({ "probabilities": [] })).unwrap();
        assert_eq!(missing.severity(), None);

        let empty: PredictionResult =
            serde_json::from_value(json!({ "predicted_severity": "", "probabilities": [] }))
                .unwrap();
        assert_eq!(empty.severity(), None);
    }

    #[test]
    fn test_missing_probabilities_is_a_decode_error() {
        let result = serde_json::from_value::<PredictionResult>(json!({ "predicted_severity": "Fatal" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_cluster_number_accepts_integer_and_string() {
        let from_int: AnalysisResult = serde_json::from_value(json!({
            "cluster_number": 3,
            "description": "High-speed intersection collisions"
        }))
        .unwrap();
        let from_str: AnalysisResult = serde_json::from_value(json!({
            "cluster_number": "3",
            "description": "High-speed intersection collisions"
        }))
        .unwrap();

        assert_eq!(from_int, from_str);
        assert_eq!(from_int.cluster_number.to_string(), "3");
    }

    #[test]
    fn test_cluster_number_rejects_non_numeric_text() {
        let result = serde_json::from_value::<AnalysisResult>(json!({
            "cluster_number": "three",
            "description": ""
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_description_defaults_to_empty() {
        let result: AnalysisResult = serde_json::from_value(json!({ "cluster_number": 0 })).unwrap();
        assert_eq!(result.description, "");
    }
}
