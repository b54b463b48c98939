//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.

mod api;
mod logging;
mod repl;
mod storage;

pub use api::FileApiConfig;
pub use logging::FileLoggingConfig;
pub use repl::FileReplConfig;
pub use storage::FileStorageConfig;

use serde::{Deserialize, Serialize};

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The configuration cannot work at all.
    Error,
    /// The configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigIssueCode {
    EmptyModelName,
    InvalidBaseUrl,
    ZeroImageLimit,
}

/// A detected issue in the loaded configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Completion API settings
    pub api: FileApiConfig,
    /// Local store settings
    pub storage: FileStorageConfig,
    /// Transcript logging settings
    pub logging: FileLoggingConfig,
    /// REPL settings
    pub repl: FileReplConfig,
}

impl FileConfig {
    /// Validate the configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.api.model.trim().is_empty() {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::EmptyModelName,
                message: "api.model cannot be empty".to_string(),
            });
        }

        let base_url = self.api.base_url.trim();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::InvalidBaseUrl,
                message: format!(
                    "api.base_url must start with http:// or https:// (got '{}')",
                    self.api.base_url
                ),
            });
        }

        if self.api.max_image_bytes == 0 {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                code: ConfigIssueCode::ZeroImageLimit,
                message: "api.max_image_bytes is 0; every image attachment will be rejected"
                    .to_string(),
            });
        }

        issues
    }
}
