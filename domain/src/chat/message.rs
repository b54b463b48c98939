//! Chat message entity

use super::ids::MessageId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One turn of a transcript (Entity)
///
/// Messages are never edited after creation; a session only ever appends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    id: MessageId,
    text: String,
    is_from_user: bool,
    timestamp: DateTime<Utc>,
    #[serde(
        default,
        with = "image_base64",
        skip_serializing_if = "Option::is_none"
    )]
    image: Option<Vec<u8>>,
}

impl Message {
    /// A message authored by the user, optionally carrying an image.
    pub fn user(text: impl Into<String>, image: Option<Vec<u8>>) -> Self {
        Self {
            id: MessageId::new(),
            text: text.into(),
            is_from_user: true,
            timestamp: Utc::now(),
            image,
        }
    }

    /// A message authored by the model.
    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            id: MessageId::new(),
            text: text.into(),
            is_from_user: false,
            timestamp: Utc::now(),
            image: None,
        }
    }

    /// Override the creation timestamp.
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn id(&self) -> MessageId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_from_user(&self) -> bool {
        self.is_from_user
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn image(&self) -> Option<&[u8]> {
        self.image.as_deref()
    }
}

/// Stores image bytes as base64 text instead of a JSON number array.
mod image_base64 {
    use base64::Engine;
    use base64::engine::general_purpose::STANDARD;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<Vec<u8>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(bytes) => serializer.serialize_some(&STANDARD.encode(bytes)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Vec<u8>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let encoded: Option<String> = Option::deserialize(deserializer)?;
        encoded
            .map(|s| STANDARD.decode(s).map_err(serde::de::Error::custom))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_user_message() {
        let msg = Message::user("hello", None);
        assert!(msg.is_from_user());
        assert_eq!(msg.text(), "hello");
        assert!(msg.image().is_none());
    }

    #[test]
    fn test_assistant_message_has_no_image() {
        let msg = Message::assistant("hi there");
        assert!(!msg.is_from_user());
        assert!(msg.image().is_none());
    }

    #[test]
    fn test_messages_get_distinct_ids() {
        assert_ne!(Message::user("a", None).id(), Message::user("a", None).id());
    }

    #[test]
    fn test_image_is_stored_as_base64() {
        let msg = Message::user("look", Some(vec![0xde, 0xad, 0xbe, 0xef]));
        let value = serde_json::to_value(&msg).unwrap();
        assert_eq!(value["image"], "3q2+7w==");

        let back: Message = serde_json::from_value(value).unwrap();
        assert_eq!(back.image(), Some(&[0xde, 0xad, 0xbe, 0xef][..]));
    }

    #[test]
    fn test_missing_image_field_deserializes_as_none() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let msg = Message::assistant("ok").with_timestamp(ts);
        let value = serde_json::to_value(&msg).unwrap();
        assert!(value.get("image").is_none());

        let back: Message = serde_json::from_value(value).unwrap();
        assert_eq!(back, msg);
    }

    #[test]
    fn test_invalid_base64_fails_to_decode() {
        let mut value = serde_json::to_value(Message::user("x", Some(vec![1]))).unwrap();
        value["image"] = serde_json::json!("%%%not base64%%%");
        assert!(serde_json::from_value::<Message>(value).is_err());
    }
}
