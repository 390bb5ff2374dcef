//! Error types for Analitica
//!
//! One error enum shared by the engine, tool runtime, API client and
//! template writer. Every variant is recoverable: callers surface it to the
//! user and the process keeps running.

use thiserror::Error;

/// Main error type for the analitica crate
#[derive(Error, Debug)]
pub enum AppError {
    /// Lookup of a catalogued entity (tool, flow) failed
    #[error("{kind} with id '{id}' not found")]
    NotFound { kind: String, id: String },

    /// Tool invoked without all of its required parameters
    #[error("Missing required parameters for {tool}: {}", .params.join(", "))]
    MissingParams { tool: String, params: Vec<String> },

    /// External call failed in a way a manual retry may fix
    #[error("External call failed: {0}")]
    TransientFailure(String),

    /// Analysis backend answered with a non-success status
    #[error("Analysis API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// User-supplied JSON could not be parsed
    #[error("Parse error: {0}")]
    ParseFailure(String),

    /// Numeric input outside its accepted range
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Spreadsheet generation errors
    #[error("Workbook error: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),

    /// HTTP client errors
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic errors with context
    #[error("{0}")]
    Generic(String),
}

impl AppError {
    /// Unknown tool id
    pub fn tool_not_found(id: impl Into<String>) -> Self {
        AppError::NotFound {
            kind: "Tool".to_string(),
            id: id.into(),
        }
    }

    /// Unknown analysis flow id
    pub fn flow_not_found(id: impl Into<String>) -> Self {
        AppError::NotFound {
            kind: "Analysis flow".to_string(),
            id: id.into(),
        }
    }

    /// Whether a manual retry could succeed
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            AppError::TransientFailure(_) | AppError::Http(_) | AppError::Api { .. }
        )
    }
}

/// Result type alias for analitica operations
pub type Result<T> = std::result::Result<T, AppError>;

/// Convert anyhow errors to AppError
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Generic(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = AppError::tool_not_found("ghost-toolkit");
        assert_eq!(err.to_string(), "Tool with id 'ghost-toolkit' not found");
        assert!(!err.is_transient());
    }

    #[test]
    fn test_missing_params_lists_names() {
        let err = AppError::MissingParams {
            tool: "clustering-toolkit".to_string(),
            params: vec!["data".to_string(), "n_clusters".to_string()],
        };
        assert!(err.to_string().contains("data, n_clusters"));
    }

    #[test]
    fn test_api_error_is_transient() {
        let err = AppError::Api {
            status: 503,
            message: "busy".to_string(),
        };
        assert!(err.is_transient());
        assert!(err.to_string().contains("503"));
    }
}
