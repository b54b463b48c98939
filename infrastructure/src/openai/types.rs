//! Wire types for the OpenAI chat completions API.

use serde::{Deserialize, Serialize};

// ─── Request ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: ChatContent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// Message content: a bare string, or a list of typed parts.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ChatContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

impl ContentPart {
    pub fn text(text: impl Into<String>) -> Self {
        ContentPart::Text { text: text.into() }
    }

    pub fn image_url(url: impl Into<String>) -> Self {
        ContentPart::ImageUrl {
            image_url: ImageUrl { url: url.into() },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ImageUrl {
    pub url: String,
}

// ─── Response ────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
    pub error: Option<ApiErrorBody>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: Option<ResponseMessage>,
}

#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    pub content: Option<String>,
}

/// Provider-reported error object (`{"error": {...}}`).
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub message: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub param: Option<String>,
    pub code: Option<serde_json::Value>,
}

impl ApiErrorBody {
    pub fn describe(&self) -> String {
        self.message
            .clone()
            .or_else(|| self.kind.clone())
            .unwrap_or_else(|| "Unknown API error".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_content_serializes_as_string() {
        let msg = ChatMessage {
            role: Role::User,
            content: ChatContent::Text("hi".to_string()),
        };
        assert_eq!(
            serde_json::to_value(&msg).unwrap(),
            json!({"role": "user", "content": "hi"})
        );
    }

    #[test]
    fn test_parts_content_serializes_as_typed_list() {
        let msg = ChatMessage {
            role: Role::User,
            content: ChatContent::Parts(vec![
                ContentPart::text("what is this?"),
                ContentPart::image_url("data:image/png;base64,AQID"),
            ]),
        };
        assert_eq!(
            serde_json::to_value(&msg).unwrap(),
            json!({
                "role": "user",
                "content": [
                    {"type": "text", "text": "what is this?"},
                    {"type": "image_url", "image_url": {"url": "data:image/png;base64,AQID"}}
                ]
            })
        );
    }

    #[test]
    fn test_error_body_parses_full_provider_shape() {
        let body = r#"{"error":{"message":"Incorrect API key","type":"invalid_request_error","param":null,"code":"invalid_api_key"}}"#;
        let parsed: ChatCompletionResponse = serde_json::from_str(body).unwrap();
        assert!(parsed.choices.is_empty());
        let error = parsed.error.unwrap();
        assert_eq!(error.describe(), "Incorrect API key");
        assert_eq!(error.param, None);
        assert_eq!(error.code, Some(serde_json::json!("invalid_api_key")));
    }

    #[test]
    fn test_error_without_message_falls_back_to_type() {
        let parsed: ChatCompletionResponse =
            serde_json::from_str(r#"{"error":{"type":"server_error"}}"#).unwrap();
        assert_eq!(parsed.error.unwrap().describe(), "server_error");
    }
}
