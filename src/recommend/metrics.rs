//! Caller-supplied metrics bag

use crate::errors::{AppError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Open mapping of metric name to value
///
/// Only numeric values are interpreted by the rule evaluator; everything
/// else is carried along untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetricsBag(Map<String, Value>);

impl MetricsBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON object such as `{"mape": 20.5}`
    pub fn from_json(input: &str) -> Result<Self> {
        parse_json_object(input, "metrics").map(Self)
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Numeric value for `key`, `None` when missing or not a number
    pub fn number(&self, key: &str) -> Option<f64> {
        self.0.get(key).and_then(Value::as_f64)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<Map<String, Value>> for MetricsBag {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Parse `input` as a JSON object, naming `what` in the error
pub fn parse_json_object(input: &str, what: &str) -> Result<Map<String, Value>> {
    let value: Value = serde_json::from_str(input)
        .map_err(|e| AppError::ParseFailure(format!("invalid {} JSON: {}", what, e)))?;

    match value {
        Value::Object(map) => Ok(map),
        other => Err(AppError::ParseFailure(format!(
            "{} must be a JSON object, got {}",
            what,
            json_type_name(&other)
        ))),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_lookup() {
        let metrics = MetricsBag::new().with("mape", 20).with("label", "x");
        assert_eq!(metrics.number("mape"), Some(20.0));
        assert_eq!(metrics.number("label"), None);
        assert_eq!(metrics.number("missing"), None);
    }

    #[test]
    fn test_from_json() {
        let metrics = MetricsBag::from_json(r#"{"accuracy": 0.65}"#).unwrap();
        assert_eq!(metrics.len(), 1);
        assert_eq!(metrics.number("accuracy"), Some(0.65));
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        let err = MetricsBag::from_json("{accuracy: }").unwrap_err();
        assert!(matches!(err, AppError::ParseFailure(_)));
    }

    #[test]
    fn test_from_json_rejects_non_object() {
        let err = MetricsBag::from_json("[1, 2]").unwrap_err();
        assert!(err.to_string().contains("array"));
    }
}
