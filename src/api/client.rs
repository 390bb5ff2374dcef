//! HTTP client for the analysis backend
//!
//! Thin wrapper over the REST endpoints. Parameter and industry lookups
//! degrade to local tables when the backend is unavailable; uploads and
//! result fetches surface the backend error to the caller.

use crate::api::types::{
    AnalysisRequest, CategoriesResponse, ErrorEnvelope, IndustriesResponse,
    ModelParametersResponse,
};
use crate::catalog::{ModelFamily, SUPPORTED_INDUSTRIES};
use crate::flows::flows_by_industry;
use crate::config::ApiConfig;
use crate::errors::{AppError, Result};
use reqwest::header::CONTENT_TYPE;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde_json::{json, Value};
use std::time::Duration;
use tracing::{debug, info, warn};

/// HTTP client for the analysis API
pub struct AnalysisClient {
    client: Client,
    base_url: String,
}

impl AnalysisClient {
    /// Create a new client from `[api]` settings
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Parameter metadata for a model
    ///
    /// Calls GET /analyze/models/{model_type}/parameters and falls back to
    /// the local parameter table on any failure.
    pub async fn model_parameters(&self, model_type: &str) -> ModelParametersResponse {
        let url = format!("{}/analyze/models/{}/parameters", self.base_url, model_type);

        match self.fetch_json::<ModelParametersResponse>(&url, &[]).await {
            Ok(response) => response,
            Err(err) => {
                warn!(model_type, error = %err, "using local parameter table");
                ModelParametersResponse::local(model_type)
            }
        }
    }

    /// Upload a file for analysis
    ///
    /// Calls POST /analyze/ with a multipart form and returns the backend's
    /// JSON result untouched.
    pub async fn submit_analysis(&self, request: AnalysisRequest) -> Result<Value> {
        let url = format!("{}/analyze/", self.base_url);
        let parameters = serde_json::to_string(&request.parameters)?;
        let mime = request.mime_type();

        let file_part = Part::bytes(request.file_bytes)
            .file_name(request.file_name.clone())
            .mime_str(mime)?;

        let form = Form::new()
            .part("file", file_part)
            .text("industry", request.industry.clone())
            .text("model_type", request.model_type.clone())
            .text("parameters", parameters)
            .text("file_id", request.file_id.clone());

        info!(
            file = %request.file_name,
            file_id = %request.file_id,
            model_type = %request.model_type,
            "submitting analysis"
        );

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| AppError::TransientFailure(format!("Failed to reach analysis API: {}", e)))?;

        Self::json_or_error(response).await
    }

    /// Stored results of a previous analysis
    ///
    /// Calls GET /api/files/{file_id}/results
    pub async fn analysis_results(&self, file_id: &str) -> Result<Value> {
        let url = format!("{}/api/files/{}/results", self.base_url, file_id);
        self.fetch_json(&url, &[]).await
    }

    /// Industries the backend can analyse, or the built-in list
    pub async fn supported_industries(&self) -> Vec<String> {
        let url = format!("{}/analyze/industries", self.base_url);

        match self.fetch_json::<IndustriesResponse>(&url, &[]).await {
            Ok(response) if !response.industries.is_empty() => response.industries,
            Ok(_) => default_industries(),
            Err(err) => {
                warn!(error = %err, "using built-in industry list");
                default_industries()
            }
        }
    }

    /// Models the backend offers for an industry
    ///
    /// Calls GET /analyze/models?industry=..; on failure lists the models
    /// used by the industry's built-in flows.
    pub async fn available_models(&self, industry: &str) -> Vec<Value> {
        let url = format!("{}/analyze/models", self.base_url);

        match self
            .fetch_json::<Vec<Value>>(&url, &[("industry", industry)])
            .await
        {
            Ok(models) => models,
            Err(err) => {
                warn!(industry, error = %err, "using models from built-in flows");
                local_models(industry)
            }
        }
    }

    /// Model categories, or the built-in model families
    pub async fn model_categories(&self) -> Vec<String> {
        let url = format!("{}/analyze/categories", self.base_url);

        match self.fetch_json::<CategoriesResponse>(&url, &[]).await {
            Ok(response) if !response.categories.is_empty() => response.categories,
            Ok(_) => default_categories(),
            Err(err) => {
                warn!(error = %err, "using built-in model categories");
                default_categories()
            }
        }
    }

    async fn fetch_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        debug!(url, ?query, "GET");
        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| AppError::TransientFailure(format!("Failed to reach analysis API: {}", e)))?;

        let value = Self::json_or_error(response).await?;
        Ok(serde_json::from_value(value)?)
    }

    async fn json_or_error(response: Response) -> Result<Value> {
        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        let body = response.text().await?;

        if !status.is_success() {
            return Err(parse_error_body(status.as_u16(), content_type.as_deref(), &body));
        }

        serde_json::from_str(&body)
            .map_err(|e| AppError::ParseFailure(format!("invalid JSON from analysis API: {}", e)))
    }
}

/// Convert a non-success response body into an `AppError::Api`
///
/// JSON bodies are read as `{detail}` envelopes; anything else is kept as
/// opaque text.
pub fn parse_error_body(status: u16, content_type: Option<&str>, body: &str) -> AppError {
    let is_json = content_type
        .map(|ct| ct.to_ascii_lowercase().contains("application/json"))
        .unwrap_or(false);

    let message = if is_json {
        serde_json::from_str::<ErrorEnvelope>(body)
            .map(|envelope| envelope.message())
            .unwrap_or_else(|_| body.to_string())
    } else {
        body.trim().to_string()
    };

    let message = if message.is_empty() {
        reqwest::StatusCode::from_u16(status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or("request failed")
            .to_string()
    } else {
        message
    };

    AppError::Api { status, message }
}

fn default_industries() -> Vec<String> {
    SUPPORTED_INDUSTRIES.iter().map(|s| s.to_string()).collect()
}

fn default_categories() -> Vec<String> {
    ModelFamily::SPECIFIC
        .iter()
        .map(|family| family.as_str().to_string())
        .collect()
}

/// Distinct model types across the industry's flows, in step order
pub fn local_models(industry: &str) -> Vec<Value> {
    let mut seen = Vec::new();
    for flow in flows_by_industry(industry) {
        for step in flow.steps {
            if !seen.contains(&step.model_type) {
                seen.push(step.model_type);
            }
        }
    }

    seen.into_iter()
        .map(|model_type| {
            json!({
                "model_type": model_type,
                "category": ModelFamily::from_model_type(model_type).as_str(),
                "industry": industry,
            })
        })
        .collect()
}
