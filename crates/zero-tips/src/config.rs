use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// `[tips]` section of the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TipConfig {
    pub endpoint: String,
    pub model: String,
    pub timeout_secs: u64,
    /// Environment variable holding the API key.
    pub api_key_env: String,
    /// Inline key; wins over `api_key_env` when set.
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
}

impl Default for TipConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout_secs: 10,
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            api_key: None,
        }
    }
}

impl TipConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }

    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var(&self.api_key_env).ok())
            .filter(|k| !k.trim().is_empty())
    }
}
