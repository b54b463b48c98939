//! Infrastructure layer for parley
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod openai;
pub mod storage;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigLoader, FileConfig, FileReplConfig, Severity};
pub use logging::JsonlConversationLogger;
pub use openai::OpenAiChatGateway;
pub use storage::{JsonFileStore, KeyValueStore, KvSessionStore, MemoryKeyValueStore, StorageError};
