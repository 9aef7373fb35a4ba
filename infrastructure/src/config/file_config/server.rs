//! HTTP server configuration from TOML (`[server]` section)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    pub host: String,
    pub port: u16,
    /// Environment variable that overrides `port` (default: "PORT").
    pub port_env: String,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            port_env: "PORT".to_string(),
        }
    }
}

impl FileServerConfig {
    /// Port from the env var when it parses, otherwise the configured one.
    pub fn resolve_port(&self) -> u16 {
        std::env::var(&self.port_env)
            .ok()
            .and_then(|p| p.trim().parse().ok())
            .unwrap_or(self.port)
    }
}
