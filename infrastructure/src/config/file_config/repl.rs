//! REPL configuration from TOML (`[repl]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReplConfig {
    /// Draw a spinner while a reply is pending (default: true).
    pub show_progress: bool,
    /// Line-editor history; `~/` is expanded (default: `$XDG_DATA_HOME/parley/history.txt`).
    pub history_file: Option<String>,
}

impl Default for FileReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_file: None,
        }
    }
}

impl FileReplConfig {
    pub fn history_path(&self) -> Option<PathBuf> {
        let Some(raw) = &self.history_file else {
            return dirs::data_dir().map(|d| d.join("parley").join("history.txt"));
        };
        match raw.strip_prefix("~/") {
            Some(rest) => dirs::home_dir().map(|home| home.join(rest)),
            None => Some(PathBuf::from(raw)),
        }
    }
}
