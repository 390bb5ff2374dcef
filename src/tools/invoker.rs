//! Tool invokers
//!
//! `ToolInvoker` is the seam between the runtime and whatever actually
//! talks to a tool. `SimulatedInvoker` stands in for a real integration:
//! fixed latency plus injected transient failures.

use crate::catalog::Tool;
use crate::errors::{AppError, Result};
use crate::tools::types::{ToolExecution, ToolParams};
use async_trait::async_trait;
use rand::Rng;
use std::time::Duration;
use tokio::time::Instant;

/// Default simulated network latency
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(2000);

/// Default probability of an injected connection failure
pub const DEFAULT_FAILURE_RATE: f64 = 0.2;

/// Executes a catalogued tool
#[async_trait]
pub trait ToolInvoker: Send + Sync {
    async fn invoke(&self, tool: &Tool, params: &ToolParams) -> Result<ToolExecution>;
}

/// External call with transient-failure injection
#[derive(Debug, Clone)]
pub struct SimulatedInvoker {
    latency: Duration,
    failure_rate: f64,
}

impl SimulatedInvoker {
    /// `failure_rate` is clamped to `0.0..=1.0`
    pub fn new(latency: Duration, failure_rate: f64) -> Self {
        let failure_rate = if failure_rate.is_nan() {
            0.0
        } else {
            failure_rate.clamp(0.0, 1.0)
        };
        Self {
            latency,
            failure_rate,
        }
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    pub fn failure_rate(&self) -> f64 {
        self.failure_rate
    }
}

impl Default for SimulatedInvoker {
    fn default() -> Self {
        Self::new(DEFAULT_LATENCY, DEFAULT_FAILURE_RATE)
    }
}

#[async_trait]
impl ToolInvoker for SimulatedInvoker {
    async fn invoke(&self, tool: &Tool, params: &ToolParams) -> Result<ToolExecution> {
        let start = Instant::now();
        tokio::time::sleep(self.latency).await;

        let failed = rand::thread_rng().gen_bool(self.failure_rate);
        if failed {
            return Err(AppError::TransientFailure(format!(
                "simulated connection error while calling {}",
                tool.name
            )));
        }

        Ok(ToolExecution::success(tool, params.clone(), start.elapsed()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::find_tool;

    #[test]
    fn test_failure_rate_clamped() {
        assert_eq!(SimulatedInvoker::new(Duration::ZERO, 1.7).failure_rate(), 1.0);
        assert_eq!(SimulatedInvoker::new(Duration::ZERO, -0.3).failure_rate(), 0.0);
        assert_eq!(SimulatedInvoker::new(Duration::ZERO, f64::NAN).failure_rate(), 0.0);
    }

    #[test]
    fn test_default_latency_and_failure_rate() {
        let invoker = SimulatedInvoker::default();
        assert_eq!(invoker.latency(), Duration::from_secs(2));
        assert_eq!(invoker.failure_rate(), 0.2);
    }

    #[tokio::test]
    async fn test_never_fails_at_zero_rate() {
        let invoker = SimulatedInvoker::new(Duration::from_millis(5), 0.0);
        let tool = find_tool("viz-toolkit").unwrap();

        for _ in 0..10 {
            let exec = invoker.invoke(tool, &ToolParams::new()).await.unwrap();
            assert_eq!(exec.tool_id, "viz-toolkit");
        }
    }

    #[tokio::test]
    async fn test_always_fails_at_full_rate() {
        let invoker = SimulatedInvoker::new(Duration::from_millis(1), 1.0);
        let tool = find_tool("viz-toolkit").unwrap();

        let err = invoker.invoke(tool, &ToolParams::new()).await.unwrap_err();
        assert!(matches!(err, AppError::TransientFailure(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_latency_applied() {
        let invoker = SimulatedInvoker::new(Duration::from_secs(2), 0.0);
        let tool = find_tool("data-profiler").unwrap();

        let started = tokio::time::Instant::now();
        invoker.invoke(tool, &ToolParams::new()).await.unwrap();
        assert!(started.elapsed() >= Duration::from_secs(2));
    }
}
