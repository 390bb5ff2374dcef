//! Type definitions for the analysis backend
//!
//! Wire shapes of the analysis REST API plus the request builder used for
//! uploads.

use crate::catalog::parameter_specs;
use crate::errors::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::path::Path;

/// Metadata for one model parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelParameter {
    pub description: String,
    pub required: bool,
    #[serde(rename = "type")]
    pub value_type: String,
}

/// Response from `GET /analyze/models/{model_type}/parameters`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelParametersResponse {
    pub model_id: String,
    pub parameters: Vec<String>,
    #[serde(default)]
    pub metadata: BTreeMap<String, ModelParameter>,
}

impl ModelParametersResponse {
    /// Build the response from the local parameter table
    pub fn local(model_type: &str) -> Self {
        let specs = parameter_specs(model_type);
        Self {
            model_id: model_type.to_string(),
            parameters: specs.iter().map(|spec| spec.name.to_string()).collect(),
            metadata: specs
                .iter()
                .map(|spec| {
                    (
                        spec.name.to_string(),
                        ModelParameter {
                            description: spec.description.to_string(),
                            required: spec.required,
                            value_type: spec.value_type.to_string(),
                        },
                    )
                })
                .collect(),
        }
    }

    /// Names of the required parameters
    pub fn required(&self) -> Vec<&str> {
        self.parameters
            .iter()
            .filter(|name| self.metadata.get(*name).map(|m| m.required).unwrap_or(false))
            .map(String::as_str)
            .collect()
    }
}

/// Response from `GET /analyze/industries`
#[derive(Debug, Deserialize)]
pub struct IndustriesResponse {
    #[serde(default)]
    pub industries: Vec<String>,
}

/// Response from `GET /analyze/categories`
#[derive(Debug, Deserialize)]
pub struct CategoriesResponse {
    #[serde(default)]
    pub categories: Vec<String>,
}

/// Error body returned by the backend on failure
///
/// `detail` is usually a string but validation errors carry a list.
#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub detail: Value,
}

impl ErrorEnvelope {
    pub fn message(&self) -> String {
        match &self.detail {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

/// Multipart upload for `POST /analyze/`
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub file_name: String,
    pub file_bytes: Vec<u8>,
    pub industry: String,
    pub model_type: String,
    pub parameters: Map<String, Value>,
    pub file_id: String,
}

impl AnalysisRequest {
    /// Request for in-memory data; a fresh file id is generated
    pub fn new(
        file_name: impl Into<String>,
        file_bytes: Vec<u8>,
        industry: impl Into<String>,
        model_type: impl Into<String>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            file_bytes,
            industry: industry.into(),
            model_type: model_type.into(),
            parameters: Map::new(),
            file_id: uuid::Uuid::new_v4().to_string(),
        }
    }

    /// Read the upload from disk
    pub async fn from_path(path: &Path, industry: &str, model_type: &str) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        Ok(Self::new(file_name, bytes, industry, model_type))
    }

    pub fn with_parameters(mut self, parameters: Map<String, Value>) -> Self {
        self.parameters = parameters;
        self
    }

    pub fn with_file_id(mut self, file_id: impl Into<String>) -> Self {
        self.file_id = file_id.into();
        self
    }

    /// MIME type inferred from the file extension
    pub fn mime_type(&self) -> &'static str {
        let extension = Path::new(&self.file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("csv") => "text/csv",
            Some("xlsx") => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            Some("xls") => "application/vnd.ms-excel",
            Some("json") => "application/json",
            _ => "application/octet-stream",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_parameters() {
        let response = ModelParametersResponse::local("sarima");
        assert_eq!(response.model_id, "sarima");
        assert_eq!(response.parameters[0], "target_column");
        assert_eq!(response.required(), vec!["target_column"]);
        assert_eq!(response.metadata["s"].value_type, "integer");
    }

    #[test]
    fn test_local_parameters_unknown_model() {
        let response = ModelParametersResponse::local("mystery");
        assert!(response.parameters.is_empty());
        assert!(response.metadata.is_empty());
    }

    #[test]
    fn test_parameters_response_deserializes() {
        let body = r#"{
            "model_id": "kmeans",
            "parameters": ["n_clusters"],
            "metadata": {"n_clusters": {"description": "k", "required": true, "type": "integer"}}
        }"#;
        let response: ModelParametersResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.required(), vec!["n_clusters"]);
    }

    #[test]
    fn test_error_envelope_message() {
        let text: ErrorEnvelope = serde_json::from_str(r#"{"detail": "Invalid file"}"#).unwrap();
        assert_eq!(text.message(), "Invalid file");

        let list: ErrorEnvelope =
            serde_json::from_str(r#"{"detail": [{"loc": ["body", "file"]}]}"#).unwrap();
        assert!(list.message().contains("body"));
    }

    #[test]
    fn test_request_defaults() {
        let request = AnalysisRequest::new("ventas.CSV", vec![1, 2], "retail", "sarima");
        assert_eq!(request.mime_type(), "text/csv");
        assert!(!request.file_id.is_empty());
        assert!(request.parameters.is_empty());

        let other = request.clone().with_file_id("abc");
        assert_eq!(other.file_id, "abc");
    }
}
