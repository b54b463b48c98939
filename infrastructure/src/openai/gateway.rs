//! [`ChatGateway`] adapter for the OpenAI chat completions API.

use super::types::{
    ChatCompletionRequest, ChatCompletionResponse, ChatContent, ChatMessage, ContentPart, Role,
};
use super::vision::{DEFAULT_MAX_IMAGE_BYTES, prepare_image};
use async_trait::async_trait;
use parley_application::{ChatGateway, GatewayError};
use parley_domain::{Credential, ImageAttachment, Message};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use tracing::{debug, info, warn};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o";

/// Longest slice of an unexpected response body kept in error messages.
const MAX_ERROR_BODY_CHARS: usize = 200;

/// Gateway that posts the whole transcript to `{base_url}/chat/completions`.
#[derive(Clone)]
pub struct OpenAiChatGateway {
    client: Client,
    base_url: String,
    model: String,
    max_image_bytes: usize,
}

impl OpenAiChatGateway {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_image_bytes: DEFAULT_MAX_IMAGE_BYTES,
        }
    }

    /// Point at another OpenAI-compatible server (e.g. a proxy or a mock).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_max_image_bytes(mut self, max_image_bytes: usize) -> Self {
        self.max_image_bytes = max_image_bytes;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }

    /// Map the transcript onto the request body.
    ///
    /// Only the final message can carry an image, and only when it is a
    /// user turn and `new_image` is given.
    pub fn build_request(
        &self,
        history: &[Message],
        new_image: Option<&ImageAttachment>,
    ) -> Result<ChatCompletionRequest, GatewayError> {
        let last_index = history.len().saturating_sub(1);
        let mut messages = Vec::with_capacity(history.len());

        for (index, message) in history.iter().enumerate() {
            let role = if message.is_from_user() {
                Role::User
            } else {
                Role::Assistant
            };

            let content = match new_image {
                Some(image) if index == last_index && message.is_from_user() => {
                    let encoded = prepare_image(image, self.max_image_bytes)?;
                    debug!(
                        "Inlining {} image ({} bytes)",
                        encoded.mime.as_str(),
                        encoded.bytes.len()
                    );
                    ChatContent::Parts(vec![
                        ContentPart::text(message.text()),
                        ContentPart::image_url(encoded.data_url()),
                    ])
                }
                _ => ChatContent::Text(message.text().to_string()),
            };

            messages.push(ChatMessage { role, content });
        }

        if messages.is_empty() {
            return Err(GatewayError::InvalidResponseStructure);
        }

        Ok(ChatCompletionRequest {
            model: self.model.clone(),
            messages,
        })
    }
}

impl Default for OpenAiChatGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatGateway for OpenAiChatGateway {
    async fn generate(
        &self,
        history: &[Message],
        credential: &Credential,
        new_image: Option<&ImageAttachment>,
    ) -> Result<String, GatewayError> {
        let request = self.build_request(history, new_image)?;
        let body = serde_json::to_vec(&request).map_err(|e| {
            warn!("Could not encode request: {}", e);
            GatewayError::RequestEncodingFailed
        })?;

        info!(
            "POST {} (model {}, {} messages)",
            self.endpoint(),
            self.model,
            request.messages.len()
        );

        let response = self
            .client
            .post(self.endpoint())
            .header(AUTHORIZATION, format!("Bearer {}", credential.expose()))
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| GatewayError::NetworkError(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| GatewayError::NetworkError(e.to_string()))?;

        debug!("Response status {} ({} bytes)", status, text.len());
        parse_completion(status, &text)
    }
}

/// Classify a completion response body.
pub fn parse_completion(status: StatusCode, body: &str) -> Result<String, GatewayError> {
    let parsed: ChatCompletionResponse = match serde_json::from_str(body) {
        Ok(parsed) => parsed,
        Err(e) if status.is_success() => {
            return Err(GatewayError::ResponseDecodingFailed(e.to_string()));
        }
        Err(_) => {
            return Err(GatewayError::UnknownError(format!(
                "HTTP {}: {}",
                status.as_u16(),
                truncate(body)
            )));
        }
    };

    if let Some(error) = parsed.error {
        return Err(GatewayError::ApiError(error.describe()));
    }

    if !status.is_success() {
        return Err(GatewayError::UnknownError(format!(
            "HTTP {}: {}",
            status.as_u16(),
            truncate(body)
        )));
    }

    parsed
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message)
        .and_then(|message| message.content)
        .ok_or(GatewayError::InvalidResponseStructure)
}

fn truncate(body: &str) -> String {
    if body.chars().count() <= MAX_ERROR_BODY_CHARS {
        return body.to_string();
    }
    let head: String = body.chars().take(MAX_ERROR_BODY_CHARS).collect();
    format!("{}...", head)
}
