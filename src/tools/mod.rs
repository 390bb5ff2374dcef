//! Tool invocation layer
//!
//! Provides execution of catalogued external tools with:
//! - Catalog validation (unknown ids, missing parameters)
//! - Pluggable invokers (simulated latency + transient failures by default)
//! - Lifecycle notifications through an observer
//! - Per-tool in-flight tracking and execution statistics

pub mod types;
pub mod invoker;
pub mod events;
pub mod runtime;

// Re-export commonly used types
pub use types::{parse_params, ToolExecution, ToolParams, ToolStats};
pub use invoker::{SimulatedInvoker, ToolInvoker};
pub use events::{EventBus, NoopObserver, ToolEvent, ToolObserver};
pub use runtime::ToolRuntime;
