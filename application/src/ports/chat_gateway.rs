//! Chat Gateway port
//!
//! Defines the interface for turning a transcript into a model reply.

use async_trait::async_trait;
use parley_domain::{Credential, ImageAttachment, Message};
use thiserror::Error;

/// Errors that can occur while generating a reply
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Failed to convert the attached image")]
    ImageConversionFailed,

    #[error("Failed to encode the request")]
    RequestEncodingFailed,

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Failed to decode the response: {0}")]
    ResponseDecodingFailed(String),

    #[error("The response did not contain a reply")]
    InvalidResponseStructure,

    #[error("Unknown error: {0}")]
    UnknownError(String),
}

/// Gateway for reply generation
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait ChatGateway: Send + Sync {
    /// Generate a reply for `history`.
    ///
    /// `new_image` belongs to the final turn and is only sent when that turn
    /// is from the user. Images stored on earlier messages are never re-sent.
    async fn generate(
        &self,
        history: &[Message],
        credential: &Credential,
        new_image: Option<&ImageAttachment>,
    ) -> Result<String, GatewayError>;
}
