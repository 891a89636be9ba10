//! Streaming event records.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One decoded unit from a line-oriented streaming response, discriminated
/// by its `type` tag. Payload shapes vary per tag, so content is carried as
/// raw JSON; unknown tags decode to [`StreamEvent::Unknown`] rather than
/// failing the line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StreamEvent {
    /// Progress note from the server.
    Status {
        #[serde(default)]
        content: Value,
    },
    /// Partial result produced before the run has finished.
    IntermediateResult {
        #[serde(default)]
        content: Value,
    },
    /// A server-side agent picked up the task.
    AgentStart {
        #[serde(default)]
        content: Value,
    },
    /// Agent reasoning trace.
    Thought {
        #[serde(default)]
        content: Value,
    },
    /// One sub-task finished.
    TaskComplete {
        #[serde(default)]
        content: Value,
    },
    /// Control moved between server-side agents.
    Transition {
        #[serde(default)]
        content: Value,
    },
    /// Terminal: the run finished and `content` holds the final result.
    Complete {
        #[serde(default)]
        content: Value,
    },
    /// Terminal: the run failed server-side.
    Error {
        #[serde(default)]
        content: Value,
    },
    #[serde(other)]
    Unknown,
}

impl StreamEvent {
    /// Whether this event ends the logical run. Stopping on it is caller
    /// policy; the normalizer keeps yielding until the connection closes.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Complete { .. } | Self::Error { .. })
    }

    /// The event payload, `Null` for tags that carry none.
    pub fn content(&self) -> &Value {
        match self {
            Self::Status { content }
            | Self::IntermediateResult { content }
            | Self::AgentStart { content }
            | Self::Thought { content }
            | Self::TaskComplete { content }
            | Self::Transition { content }
            | Self::Complete { content }
            | Self::Error { content } => content,
            Self::Unknown => &Value::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_tagged_events() {
        let event: StreamEvent =
            serde_json::from_value(json!({"type": "status", "content": "ok"})).unwrap();
        assert_eq!(event, StreamEvent::Status { content: json!("ok") });
        assert!(!event.is_terminal());
    }

    #[test]
    fn terminal_events_are_flagged() {
        let complete: StreamEvent =
            serde_json::from_value(json!({"type": "complete", "content": {}})).unwrap();
        let error: StreamEvent =
            serde_json::from_value(json!({"type": "error", "content": "boom"})).unwrap();
        assert!(complete.is_terminal());
        assert!(error.is_terminal());
    }

    #[test]
    fn missing_content_defaults_to_null() {
        let event: StreamEvent = serde_json::from_value(json!({"type": "thought"})).unwrap();
        assert_eq!(event.content(), &Value::Null);
    }

    #[test]
    fn unknown_tags_do_not_fail() {
        let event: StreamEvent =
            serde_json::from_value(json!({"type": "heartbeat", "content": 1})).unwrap();
        assert_eq!(event, StreamEvent::Unknown);
    }
}
