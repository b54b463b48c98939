//! Local persistence for chat sessions and the API credential.
//!
//! - [`key_value`]: the flat key-value substrate (file and in-memory)
//! - [`session_store::KvSessionStore`]: the [`SessionStore`](parley_application::SessionStore) adapter

pub mod key_value;
pub mod session_store;

pub use key_value::{JsonFileStore, KeyValueStore, MemoryKeyValueStore, StorageError};
pub use session_store::KvSessionStore;
