//! Presentation-level configuration

use std::path::PathBuf;

/// Resolved settings for the chat REPL
#[derive(Debug, Clone)]
pub struct ReplConfig {
    /// Show a spinner while waiting for a reply
    pub show_progress: bool,
    /// Where line-editor history is kept; `None` keeps it in memory only
    pub history_path: Option<PathBuf>,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_path: None,
        }
    }
}
