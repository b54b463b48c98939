//! API configuration from TOML (`[api]` section)

use crate::openai::{DEFAULT_BASE_URL, DEFAULT_MAX_IMAGE_BYTES, DEFAULT_MODEL};
use serde::{Deserialize, Serialize};

/// Chat completions API configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileApiConfig {
    /// Base URL of the OpenAI-compatible API (default: "https://api.openai.com/v1").
    pub base_url: String,
    /// Model identifier sent with every request (default: "gpt-4o").
    pub model: String,
    /// Environment variable read when no key is stored (default: "OPENAI_API_KEY").
    pub api_key_env: String,
    /// Largest encoded image payload in bytes (default: 10,000,000).
    pub max_image_bytes: usize,
}

impl Default for FileApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key_env: "OPENAI_API_KEY".to_string(),
            max_image_bytes: DEFAULT_MAX_IMAGE_BYTES,
        }
    }
}

impl FileApiConfig {
    /// Read the fallback key from the configured environment variable.
    pub fn api_key_from_env(&self) -> Option<String> {
        if self.api_key_env.trim().is_empty() {
            return None;
        }
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|v| !v.trim().is_empty())
    }
}
