//! Configuration file loading for dr-legal
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `DRLEGAL_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./drlegal.toml` or `./.drlegal.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/dr-legal/config.toml`
//! 5. Default values
//!
//! Secrets are never required in files: the generator key and the contact
//! number are read from the env vars named by `api_key_env` / `number_env`.

mod file_config;
mod loader;

pub use file_config::{
    ConfigIssue, FileAreaConfig, FileConfig, FileContactConfig, FileGeneratorConfig,
    FileLexiconConfig, FileOutputConfig, FileServerConfig, Severity,
};
pub use loader::{ConfigLoader, ENV_PREFIX};
