//! Tool lifecycle notifications
//!
//! The runtime reports start, success and failure of every invocation to a
//! `ToolObserver`. The CLI renders these as transient notices; tests use
//! the channel to assert on ordering.

use tokio::sync::mpsc;

/// Event bus capacity; events beyond it are dropped
pub const EVENT_CAPACITY: usize = 100;

/// Tool lifecycle events
#[derive(Debug, Clone, PartialEq)]
pub enum ToolEvent {
    Started { tool_id: String, tool_name: String },
    Succeeded { tool_id: String, tool_name: String, duration_ms: u64 },
    Failed { tool_id: String, error: String },
}

impl ToolEvent {
    pub fn tool_id(&self) -> &str {
        match self {
            ToolEvent::Started { tool_id, .. }
            | ToolEvent::Succeeded { tool_id, .. }
            | ToolEvent::Failed { tool_id, .. } => tool_id,
        }
    }

    /// User-facing notice text
    pub fn message(&self) -> String {
        match self {
            ToolEvent::Started { tool_name, .. } => format!("Executing {}...", tool_name),
            ToolEvent::Succeeded {
                tool_name,
                duration_ms,
                ..
            } => format!("{} finished in {}ms", tool_name, duration_ms),
            ToolEvent::Failed { error, .. } => format!("Error executing tool: {}", error),
        }
    }
}

/// Receives tool lifecycle events
pub trait ToolObserver: Send + Sync {
    fn notify(&self, event: ToolEvent);
}

/// Observer that discards every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl ToolObserver for NoopObserver {
    fn notify(&self, _event: ToolEvent) {}
}

/// Bounded-channel publisher for tool events
#[derive(Clone)]
pub struct EventBus {
    sender: mpsc::Sender<ToolEvent>,
}

impl EventBus {
    /// Create new event bus with bounded channel
    pub fn new() -> (Self, mpsc::Receiver<ToolEvent>) {
        let (sender, receiver) = mpsc::channel(EVENT_CAPACITY);
        (EventBus { sender }, receiver)
    }
}

impl ToolObserver for EventBus {
    fn notify(&self, event: ToolEvent) {
        // Non-blocking; a full or closed channel drops the event
        let _ = self.sender.try_send(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::{timeout, Duration};

    #[tokio::test]
    async fn test_event_delivery() {
        let (bus, mut receiver) = EventBus::new();

        bus.notify(ToolEvent::Started {
            tool_id: "nlp-toolkit".to_string(),
            tool_name: "NLP Toolkit".to_string(),
        });

        let event = timeout(Duration::from_millis(100), receiver.recv())
            .await
            .expect("Timeout waiting for event")
            .expect("Channel closed");

        assert_eq!(event.tool_id(), "nlp-toolkit");
        assert_eq!(event.message(), "Executing NLP Toolkit...");
    }

    #[tokio::test]
    async fn test_closed_receiver_is_ignored() {
        let (bus, receiver) = EventBus::new();
        drop(receiver);

        bus.notify(ToolEvent::Failed {
            tool_id: "x".to_string(),
            error: "boom".to_string(),
        });
    }

    #[test]
    fn test_failure_message() {
        let event = ToolEvent::Failed {
            tool_id: "x".to_string(),
            error: "timeout".to_string(),
        };
        assert_eq!(event.message(), "Error executing tool: timeout");
    }
}
