//! Contact channel configuration from TOML (`[contact]` section)

use serde::{Deserialize, Serialize};

/// WhatsApp contact settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileContactConfig {
    /// Environment variable holding the destination number (default: "WHATSAPP_NUMERO").
    pub number_env: String,
    /// Destination number; overrides the env var when set.
    pub number: Option<String>,
    /// Click-to-chat base URL.
    pub base_url: String,
}

impl Default for FileContactConfig {
    fn default() -> Self {
        Self {
            number_env: "WHATSAPP_NUMERO".to_string(),
            number: None,
            base_url: "https://wa.me".to_string(),
        }
    }
}

impl FileContactConfig {
    pub fn resolve_number(&self) -> Option<String> {
        self.number
            .clone()
            .or_else(|| std::env::var(&self.number_env).ok())
            .filter(|n| !n.trim().is_empty())
    }
}
