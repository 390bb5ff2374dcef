//! Tool invocation types
//!
//! Core types for tool execution results and bookkeeping.

use crate::catalog::Tool;
use crate::errors::Result;
use crate::recommend::metrics::parse_json_object;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::time::Duration;

/// Parameters passed to a tool invocation
pub type ToolParams = Map<String, Value>;

/// Parse tool parameters from a JSON object string
pub fn parse_params(input: &str) -> Result<ToolParams> {
    parse_json_object(input, "tool parameters")
}

/// Required parameters of `tool` absent from `params`, in catalog order
pub fn missing_params(tool: &Tool, params: &ToolParams) -> Vec<String> {
    tool.required_params
        .iter()
        .filter(|name| !params.contains_key(**name))
        .map(|name| name.to_string())
        .collect()
}

/// Success descriptor of a tool invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolExecution {
    pub success: bool,

    /// Tool id that was executed
    pub tool_id: String,

    /// Parameters echoed back from the request
    pub params: ToolParams,

    pub message: String,

    pub timestamp: DateTime<Utc>,

    /// Execution duration in milliseconds
    pub duration_ms: u64,
}

impl ToolExecution {
    /// Create successful execution descriptor
    pub fn success(tool: &Tool, params: ToolParams, duration: Duration) -> Self {
        Self {
            success: true,
            tool_id: tool.id.to_string(),
            params,
            message: format!("Successfully executed {}", tool.name),
            timestamp: Utc::now(),
            duration_ms: duration.as_millis() as u64,
        }
    }
}

/// Tool execution statistics
#[derive(Debug, Clone, Default, Serialize)]
pub struct ToolStats {
    /// Total executions
    pub total_executions: u64,

    /// Successful executions
    pub successful_executions: u64,

    /// Failed executions
    pub failed_executions: u64,

    /// Total execution time (ms)
    pub total_duration_ms: u64,
}

impl ToolStats {
    /// Record successful execution
    pub fn record_success(&mut self, duration_ms: u64) {
        self.total_executions += 1;
        self.successful_executions += 1;
        self.total_duration_ms += duration_ms;
    }

    /// Record failed execution
    pub fn record_failure(&mut self, duration_ms: u64) {
        self.total_executions += 1;
        self.failed_executions += 1;
        self.total_duration_ms += duration_ms;
    }

    /// Calculate average duration
    pub fn average_duration_ms(&self) -> f64 {
        if self.total_executions == 0 {
            0.0
        } else {
            self.total_duration_ms as f64 / self.total_executions as f64
        }
    }

    /// Calculate success rate
    pub fn success_rate(&self) -> f64 {
        if self.total_executions == 0 {
            0.0
        } else {
            self.successful_executions as f64 / self.total_executions as f64
        }
    }
}
