//! Application layer for parley
//!
//! This crate contains the chat use case and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    chat_gateway::{ChatGateway, GatewayError},
    conversation_logger::{
        ConversationEvent, ConversationEventKind, ConversationLogger, NoConversationLogger,
    },
    session_store::SessionStore,
};
pub use use_cases::chat_controller::{ChatController, ChatError, SessionSummary};
