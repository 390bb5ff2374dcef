//! Integration tests for the tool runtime
//!
//! Uses scripted invokers plugged in through the public `ToolInvoker`
//! trait so outcomes are deterministic.

use analitica::catalog::Tool;
use analitica::config::ToolsConfig;
use analitica::errors::{AppError, Result};
use analitica::tools::{
    parse_params, EventBus, ToolEvent, ToolExecution, ToolInvoker, ToolParams, ToolRuntime,
};
use async_trait::async_trait;
use futures_util::future::join_all;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

/// Fails for the listed tool ids, succeeds otherwise
struct ScriptedInvoker {
    failing: HashSet<&'static str>,
    delay: Duration,
}

#[async_trait]
impl ToolInvoker for ScriptedInvoker {
    async fn invoke(&self, tool: &Tool, params: &ToolParams) -> Result<ToolExecution> {
        tokio::time::sleep(self.delay).await;
        if self.failing.contains(tool.id) {
            return Err(AppError::TransientFailure(format!(
                "Connection to {} failed",
                tool.name
            )));
        }
        Ok(ToolExecution::success(tool, params.clone(), self.delay))
    }
}

fn runtime(failing: &[&'static str]) -> (ToolRuntime, tokio::sync::mpsc::Receiver<ToolEvent>) {
    let (bus, events) = EventBus::new();
    let invoker = ScriptedInvoker {
        failing: failing.iter().copied().collect(),
        delay: Duration::from_millis(50),
    };
    (ToolRuntime::new(Arc::new(invoker)).with_observer(Arc::new(bus)), events)
}

/// Satisfies the required parameters of every catalogued tool
fn full_params() -> ToolParams {
    parse_params(
        r#"{
            "data": "ventas.csv", "horizon": 12, "frequency": "M",
            "target": "churn", "features": ["edad"], "n_clusters": 4,
            "test_type": "anova", "n_components": 2, "sensitivity": 0.9,
            "text": "comentarios.csv", "task": "sentiment"
        }"#,
    )
    .unwrap()
}

fn drain(events: &mut tokio::sync::mpsc::Receiver<ToolEvent>) -> Vec<ToolEvent> {
    let mut out = Vec::new();
    while let Ok(event) = events.try_recv() {
        out.push(event);
    }
    out
}

#[tokio::test(start_paused = true)]
async fn test_concurrent_fan_out() {
    let (runtime, mut events) = runtime(&["stats-toolkit"]);
    let params = full_params();
    let ids = ["forecasting-toolkit", "stats-toolkit", "data-profiler"];

    let outcomes = join_all(ids.iter().map(|id| runtime.execute_tool(id, &params))).await;

    assert!(outcomes[0].is_ok());
    assert!(matches!(outcomes[1], Err(AppError::TransientFailure(_))));
    assert_eq!(outcomes[2].as_ref().unwrap().params["data"], "ventas.csv");

    let stats = runtime.stats();
    assert_eq!(stats.total_executions, 3);
    assert_eq!(stats.successful_executions, 2);
    assert_eq!(stats.failed_executions, 1);

    for id in ids {
        assert_eq!(runtime.in_flight(id), 0);
    }

    let events = drain(&mut events);
    assert_eq!(events.len(), 6);
    // Every tool reports Started before its outcome
    for id in ids {
        let mine: Vec<_> = events.iter().filter(|e| e.tool_id() == id).collect();
        assert_eq!(mine.len(), 2);
        assert!(matches!(mine[0], ToolEvent::Started { .. }));
    }
    assert!(events
        .iter()
        .any(|e| matches!(e, ToolEvent::Failed { tool_id, .. } if tool_id == "stats-toolkit")));
}

#[tokio::test(start_paused = true)]
async fn test_same_tool_in_flight_twice() {
    let (runtime, _events) = runtime(&[]);
    let runtime = Arc::new(runtime);
    let params = full_params();

    let first = {
        let runtime = runtime.clone();
        let params = params.clone();
        tokio::spawn(async move { runtime.execute_tool("sklearn-toolkit", &params).await })
    };
    let second = {
        let runtime = runtime.clone();
        let params = params.clone();
        tokio::spawn(async move { runtime.execute_tool("sklearn-toolkit", &params).await })
    };

    // Let both tasks reach the invoker's sleep
    tokio::time::sleep(Duration::from_millis(10)).await;
    assert_eq!(runtime.in_flight("sklearn-toolkit"), 2);

    assert!(first.await.unwrap().is_ok());
    assert!(second.await.unwrap().is_ok());
    assert_eq!(runtime.in_flight("sklearn-toolkit"), 0);
}

#[tokio::test]
async fn test_validation_failures_notify_without_invoking() {
    let (runtime, mut events) = runtime(&[]);

    let err = runtime
        .execute_tool("does-not-exist", &ToolParams::new())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound { .. }));

    let err = runtime
        .execute_tool("viz-toolkit", &ToolParams::new())
        .await
        .unwrap_err();
    match err {
        AppError::MissingParams { tool, params } => {
            assert_eq!(tool, "viz-toolkit");
            assert_eq!(params, vec!["data".to_string()]);
        }
        other => panic!("unexpected error: {other}"),
    }

    let events = drain(&mut events);
    assert_eq!(events.len(), 2);
    assert!(events.iter().all(|e| matches!(e, ToolEvent::Failed { .. })));
    assert!(events[0].message().starts_with("Error executing tool:"));

    // Rejected requests never reach the invoker
    assert_eq!(runtime.stats().total_executions, 0);
}

#[tokio::test(start_paused = true)]
async fn test_simulated_runtime_from_config() {
    let config = ToolsConfig {
        latency_ms: 2000,
        failure_rate: 0.0,
    };
    let runtime = ToolRuntime::simulated(&config);

    let execution = runtime
        .execute_tool("clustering-toolkit", &full_params())
        .await
        .unwrap();

    assert!(execution.success);
    assert_eq!(execution.tool_id, "clustering-toolkit");
    assert!(execution.duration_ms >= 2000);
}

#[tokio::test(start_paused = true)]
async fn test_simulated_runtime_always_failing() {
    let config = ToolsConfig {
        latency_ms: 10,
        failure_rate: 1.0,
    };
    let runtime = ToolRuntime::simulated(&config);

    let err = runtime
        .execute_tool("nlp-toolkit", &full_params())
        .await
        .unwrap_err();
    assert!(err.is_transient());
    assert_eq!(runtime.stats().failed_executions, 1);
}
