//! Configuration file loading for parley
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `PARLEY_*` environment variables (`PARLEY_API__MODEL=gpt-4.1`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./parley.toml` or `./.parley.toml`
//! 4. Global: `$XDG_CONFIG_HOME/parley/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigIssue, ConfigIssueCode, FileApiConfig, FileConfig, FileLoggingConfig, FileReplConfig,
    FileStorageConfig, Severity,
};
pub use loader::ConfigLoader;
