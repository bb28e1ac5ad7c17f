//! Form payload sent to both prediction endpoints.

use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{trace, warn};

/// Hour of day the crash happened (0-23).
pub const CRASH_HOUR: &str = "crash_hour";

/// Day of week the crash happened (1 = Sunday ... 7 = Saturday).
pub const CRASH_DAY_OF_WEEK: &str = "crash_day_of_week";

/// Fields the backend expects as JSON integers. Every other field is sent as text.
pub const INTEGER_FIELDS: [&str; 2] = [CRASH_HOUR, CRASH_DAY_OF_WEEK];

/// Errors raised while building a [`FormInput`] from raw form values
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// A field that must be an integer held something else
    #[error("{field} must be a whole number (got {value:?})")]
    InvalidInteger { field: String, value: String },
}

/// A single coerced form value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Integer(i64),
    Text(String),
}

/// Request body for `/predict` and `/analyze`.
///
/// Keeps the fields in the order they were read from the form and serializes
/// as a flat JSON object, e.g. `{"weather_condition": "RAIN", "crash_hour": 14}`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormInput {
    fields: Vec<(String, FieldValue)>,
}

impl FormInput {
    /// Builds the payload from `(name, value)` pairs as read from the form.
    ///
    /// [`INTEGER_FIELDS`] are parsed as base-10 integers (surrounding whitespace
    /// is ignored); anything unparsable is rejected rather than forwarded.
    /// A repeated field name keeps its first position and its last value.
    pub fn from_fields<I, K, V>(fields: I) -> Result<Self, FormError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut input = FormInput::default();
        for (name, raw) in fields {
            let name = name.into();
            let raw = raw.into();
            let value = if INTEGER_FIELDS.contains(&name.as_str()) {
                FieldValue::Integer(coerce_integer(&name, &raw)?)
            } else {
                FieldValue::Text(raw)
            };
            input.insert(name, value);
        }
        trace!(fields = input.len(), "Built form input");
        Ok(input)
    }

    /// Sets a field, replacing the value in place if the name already exists
    pub fn insert(&mut self, name: impl Into<String>, value: FieldValue) {
        let name = name.into();
        match self.fields.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl Serialize for FormInput {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

fn coerce_integer(field: &str, raw: &str) -> Result<i64, FormError> {
    raw.trim().parse::<i64>().map_err(|_| {
        warn!(field, value = raw, "Rejecting non-integer form value");
        FormError::InvalidInteger {
            field: field.to_string(),
            value: raw.to_string(),
        }
    })
}
