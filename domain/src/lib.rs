//! Domain layer for parley
//!
//! This crate contains the chat entities and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Session**: an ordered transcript, identified by a [`SessionId`]
//! - **Message**: one turn, from the user or the model, optionally with an image
//! - **Credential**: the single bearer token used against the completion API

pub mod chat;
pub mod core;

// Re-export commonly used types
pub use chat::{
    attachment::ImageAttachment,
    credential::Credential,
    ids::{MessageId, SessionId},
    message::Message,
    session::{NEW_CHAT_PREVIEW, Session},
};
pub use core::error::DomainError;
