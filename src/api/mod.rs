//! Analysis backend client
//!
//! Endpoints:
//! - GET  /analyze/models/{model_type}/parameters (local fallback)
//! - POST /analyze/ (multipart upload)
//! - GET  /api/files/{file_id}/results
//! - GET  /analyze/industries (built-in fallback)
//! - GET  /analyze/models?industry= (flow models fallback)
//! - GET  /analyze/categories (model family fallback)

pub mod client;
pub mod types;

pub use client::{local_models, parse_error_body, AnalysisClient};
pub use types::{AnalysisRequest, ModelParameter, ModelParametersResponse};
