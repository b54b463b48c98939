//! Storage configuration from TOML (`[storage]` section)

use crate::storage::JsonFileStore;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStorageConfig {
    /// Override for the store file (default: `$XDG_DATA_HOME/parley/store.json`).
    pub path: Option<PathBuf>,
}

impl FileStorageConfig {
    pub fn resolved_path(&self) -> Option<PathBuf> {
        self.path.clone().or_else(JsonFileStore::default_path)
    }
}
