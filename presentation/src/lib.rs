//! Presentation layer for parley
//!
//! This crate contains CLI definitions, output formatters,
//! progress indicators, and the interactive chat interface.

pub mod chat;
pub mod cli;
pub mod config;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::{ChatRepl, ReplCommand, load_image};
pub use cli::commands::{Cli, Command, KeyAction};
pub use config::ReplConfig;
pub use output::console::ConsoleFormatter;
pub use progress::spinner::ReplySpinner;
