//! Tool runtime coordinator
//!
//! Validates a request against the tool catalog, notifies the observer,
//! delegates to the invoker and records statistics. Invocations may run
//! concurrently; the runtime counts in-flight calls per tool id so callers
//! can reflect busy state. No retries are attempted here.

use crate::catalog::{find_tool, TOOLS};
use crate::config::ToolsConfig;
use crate::errors::{AppError, Result};
use crate::tools::events::{NoopObserver, ToolEvent, ToolObserver};
use crate::tools::invoker::{SimulatedInvoker, ToolInvoker};
use crate::tools::types::{missing_params, ToolExecution, ToolParams, ToolStats};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::time::Instant;
use tracing::{info, warn};

/// Tool runtime coordinator
pub struct ToolRuntime {
    invoker: Arc<dyn ToolInvoker>,
    observer: Arc<dyn ToolObserver>,
    stats: Mutex<ToolStats>,
    in_flight: Mutex<HashMap<String, usize>>,
}

impl ToolRuntime {
    /// Create runtime around an invoker, with no observer
    pub fn new(invoker: Arc<dyn ToolInvoker>) -> Self {
        Self {
            invoker,
            observer: Arc::new(NoopObserver),
            stats: Mutex::new(ToolStats::default()),
            in_flight: Mutex::new(HashMap::new()),
        }
    }

    /// Runtime backed by the simulated invoker configured in `[tools]`
    pub fn simulated(config: &ToolsConfig) -> Self {
        let invoker = SimulatedInvoker::new(
            Duration::from_millis(config.latency_ms),
            config.failure_rate,
        );
        Self::new(Arc::new(invoker))
    }

    /// Attach an observer for lifecycle notifications
    pub fn with_observer(mut self, observer: Arc<dyn ToolObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Execute a catalogued tool
    ///
    /// # Flow
    /// 1. Resolve the tool id (`NotFound` otherwise)
    /// 2. Check required parameters (`MissingParams` otherwise)
    /// 3. Notify start, invoke, notify outcome
    pub async fn execute_tool(&self, tool_id: &str, params: &ToolParams) -> Result<ToolExecution> {
        let tool = match find_tool(tool_id) {
            Some(tool) => tool,
            None => return Err(self.reject(tool_id, AppError::tool_not_found(tool_id))),
        };

        let missing = missing_params(tool, params);
        if !missing.is_empty() {
            return Err(self.reject(
                tool_id,
                AppError::MissingParams {
                    tool: tool.id.to_string(),
                    params: missing,
                },
            ));
        }

        info!(tool = tool.id, "executing tool");
        self.observer.notify(ToolEvent::Started {
            tool_id: tool.id.to_string(),
            tool_name: tool.name.to_string(),
        });

        let start = Instant::now();
        let result = {
            let _guard = InFlightGuard::enter(&self.in_flight, tool.id);
            self.invoker.invoke(tool, params).await
        };
        let duration_ms = start.elapsed().as_millis() as u64;

        match &result {
            Ok(_) => {
                self.lock_stats().record_success(duration_ms);
                info!(tool = tool.id, duration_ms, "tool succeeded");
                self.observer.notify(ToolEvent::Succeeded {
                    tool_id: tool.id.to_string(),
                    tool_name: tool.name.to_string(),
                    duration_ms,
                });
            }
            Err(err) => {
                self.lock_stats().record_failure(duration_ms);
                warn!(tool = tool.id, error = %err, "tool failed");
                self.observer.notify(ToolEvent::Failed {
                    tool_id: tool.id.to_string(),
                    error: err.to_string(),
                });
            }
        }

        result
    }

    /// Number of invocations of `tool_id` currently running
    pub fn in_flight(&self, tool_id: &str) -> usize {
        self.in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(tool_id)
            .copied()
            .unwrap_or(0)
    }

    /// Snapshot of execution statistics
    pub fn stats(&self) -> ToolStats {
        self.lock_stats().clone()
    }

    /// Get all tool ids
    pub fn tool_ids(&self) -> Vec<&'static str> {
        TOOLS.iter().map(|tool| tool.id).collect()
    }

    /// Check if tool exists
    pub fn has_tool(&self, tool_id: &str) -> bool {
        find_tool(tool_id).is_some()
    }

    fn reject(&self, tool_id: &str, err: AppError) -> AppError {
        warn!(tool = tool_id, error = %err, "tool request rejected");
        self.observer.notify(ToolEvent::Failed {
            tool_id: tool_id.to_string(),
            error: err.to_string(),
        });
        err
    }

    fn lock_stats(&self) -> std::sync::MutexGuard<'_, ToolStats> {
        self.stats.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Increments the in-flight count for a tool id until dropped
struct InFlightGuard<'a> {
    counts: &'a Mutex<HashMap<String, usize>>,
    tool_id: &'a str,
}

impl<'a> InFlightGuard<'a> {
    fn enter(counts: &'a Mutex<HashMap<String, usize>>, tool_id: &'a str) -> Self {
        *counts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(tool_id.to_string())
            .or_insert(0) += 1;
        Self { counts, tool_id }
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        let mut counts = self.counts.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(count) = counts.get_mut(self.tool_id) {
            *count -= 1;
            if *count == 0 {
                counts.remove(self.tool_id);
            }
        }
    }
}
