//! Generator configuration from TOML (`[generator]` section)

use serde::{Deserialize, Serialize};

/// Text generator settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGeneratorConfig {
    /// Environment variable holding the API key (default: "GROQ_API_KEY").
    pub api_key_env: String,
    /// Direct API key (prefer the environment variable).
    pub api_key: Option<String>,
    /// Base URL of an OpenAI-compatible API.
    pub base_url: String,
    /// Model identifier sent with each request.
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    /// Upper bound on a single generator call, in seconds.
    pub timeout_secs: u64,
}

impl Default for FileGeneratorConfig {
    fn default() -> Self {
        Self {
            api_key_env: "GROQ_API_KEY".to_string(),
            api_key: None,
            base_url: "https://api.groq.com/openai/v1".to_string(),
            model: "llama3-8b-8192".to_string(),
            max_tokens: 200,
            temperature: 0.8,
            timeout_secs: 30,
        }
    }
}

impl FileGeneratorConfig {
    /// API key from the config file, falling back to the named env var.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var(&self.api_key_env).ok())
            .filter(|k| !k.trim().is_empty())
    }
}
