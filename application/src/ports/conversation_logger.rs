//! Transcript logging port.
//!
//! `tracing` carries operational diagnostics; this port records what was
//! said in each session as structured events, for adapters such as a JSONL
//! file writer.

use parley_domain::SessionId;
use serde_json::Value;

/// Kinds of transcript events emitted by the chat controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversationEventKind {
    UserMessage,
    AssistantReply,
    GenerationFailed,
}

impl ConversationEventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UserMessage => "user_message",
            Self::AssistantReply => "assistant_reply",
            Self::GenerationFailed => "generation_failed",
        }
    }
}

/// One transcript event within a session.
#[derive(Debug, Clone)]
pub struct ConversationEvent {
    pub kind: ConversationEventKind,
    pub session_id: SessionId,
    /// Event-specific fields; objects are flattened into the record.
    pub payload: Value,
}

impl ConversationEvent {
    pub fn new(kind: ConversationEventKind, session_id: SessionId, payload: Value) -> Self {
        Self {
            kind,
            session_id,
            payload,
        }
    }
}

/// Sink for transcript events. Never fails; adapters drop what they cannot write.
pub trait ConversationLogger: Send + Sync {
    fn log(&self, event: ConversationEvent);
}

/// Discards every event.
pub struct NoConversationLogger;

impl ConversationLogger for NoConversationLogger {
    fn log(&self, _event: ConversationEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_kind_names() {
        assert_eq!(ConversationEventKind::UserMessage.as_str(), "user_message");
        assert_eq!(ConversationEventKind::AssistantReply.as_str(), "assistant_reply");
        assert_eq!(
            ConversationEventKind::GenerationFailed.as_str(),
            "generation_failed"
        );
    }
}
