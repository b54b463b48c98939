//! Chat session entity

use super::ids::SessionId;
use super::message::Message;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Preview shown for a session that has no messages yet.
pub const NEW_CHAT_PREVIEW: &str = "New Chat";

/// An ordered chat transcript (Entity)
///
/// The id is fixed at creation. Messages are append-only while the session
/// is live; persistence always replaces the stored copy as a whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    id: SessionId,
    messages: Vec<Message>,
}

impl Session {
    pub fn new() -> Self {
        Self::with_id(SessionId::new())
    }

    pub fn with_id(id: SessionId) -> Self {
        Self {
            id,
            messages: Vec::new(),
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Timestamp of the last message, or the distant past when empty.
    pub fn last_modified(&self) -> DateTime<Utc> {
        self.messages
            .last()
            .map(|m| m.timestamp())
            .unwrap_or(DateTime::<Utc>::MIN_UTC)
    }

    /// Text of the first message, or [`NEW_CHAT_PREVIEW`] when empty.
    pub fn preview_text(&self) -> &str {
        self.messages
            .first()
            .map(|m| m.text())
            .unwrap_or(NEW_CHAT_PREVIEW)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_empty_session_derived_attributes() {
        let session = Session::new();
        assert!(session.is_empty());
        assert_eq!(session.preview_text(), "New Chat");
        assert_eq!(session.last_modified(), DateTime::<Utc>::MIN_UTC);
    }

    #[test]
    fn test_preview_is_first_message_and_last_modified_is_last() {
        let t1 = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
        let t2 = Utc.with_ymd_and_hms(2024, 5, 1, 10, 5, 0).unwrap();

        let mut session = Session::new();
        session.push(Message::user("first question", None).with_timestamp(t1));
        session.push(Message::assistant("an answer").with_timestamp(t2));

        assert_eq!(session.preview_text(), "first question");
        assert_eq!(session.last_modified(), t2);
        assert_eq!(session.len(), 2);
    }

    #[test]
    fn test_messages_keep_insertion_order() {
        let mut session = Session::new();
        for text in ["a", "b", "c"] {
            session.push(Message::user(text, None));
        }
        let texts: Vec<&str> = session.messages().iter().map(|m| m.text()).collect();
        assert_eq!(texts, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_serde_round_trip_keeps_id() {
        let mut session = Session::new();
        session.push(Message::user("hi", Some(vec![1, 2, 3])));
        let json = serde_json::to_string(&session).unwrap();
        let back: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(back, session);
        assert_eq!(back.id(), session.id());
    }
}
