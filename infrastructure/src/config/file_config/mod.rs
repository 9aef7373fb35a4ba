//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and resolved into adapter settings here.

mod contact;
mod generator;
mod lexicon;
mod output;
mod server;

pub use contact::FileContactConfig;
pub use generator::FileGeneratorConfig;
pub use lexicon::{FileAreaConfig, FileLexiconConfig};
pub use output::FileOutputConfig;
pub use server::FileServerConfig;

use crate::channel::{DEFAULT_WHATSAPP_NUMBER, WhatsAppChannel};
use crate::generator::GeneratorSettings;
use drlegal_application::RoutingParams;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How serious a configuration issue is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Startup continues with a fallback value.
    Warning,
    /// Startup must abort.
    Error,
}

/// A problem detected by [`FileConfig::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub field: String,
    pub message: String,
}

impl ConfigIssue {
    fn warning(field: &str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            field: field.to_string(),
            message: message.into(),
        }
    }

    fn error(field: &str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl std::fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Text generator settings
    pub generator: FileGeneratorConfig,
    /// Human contact channel settings
    pub contact: FileContactConfig,
    /// HTTP server settings
    pub server: FileServerConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Optional lexicon override
    pub lexicon: FileLexiconConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Errors (an unusable lexicon) must abort startup; warnings are
    /// reported and the offending value replaced by its default.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if let Err(e) = self.lexicon.to_lexicon() {
            issues.push(ConfigIssue::error("lexicon.areas", e.to_string()));
        }

        if self.generator.max_tokens == 0 {
            issues.push(ConfigIssue::warning(
                "generator.max_tokens",
                "must be greater than 0, falling back to 200",
            ));
        }

        if !(0.0..=2.0).contains(&self.generator.temperature) {
            issues.push(ConfigIssue::warning(
                "generator.temperature",
                format!(
                    "{} is outside 0.0..=2.0, falling back to 0.8",
                    self.generator.temperature
                ),
            ));
        }

        if self.generator.timeout_secs == 0 {
            issues.push(ConfigIssue::warning(
                "generator.timeout_secs",
                "cannot be 0, falling back to 30",
            ));
        }

        if self.generator.model.trim().is_empty() {
            issues.push(ConfigIssue::warning(
                "generator.model",
                "model name cannot be empty, falling back to llama3-8b-8192",
            ));
        }

        if let Some(format) = &self.output.format {
            let valid = ["text", "html", "json"];
            if !valid.contains(&format.to_lowercase().as_str()) {
                issues.push(ConfigIssue::warning(
                    "output.format",
                    format!("unknown value '{}', falling back to 'text'", format),
                ));
            }
        }

        issues
    }

    /// Generator call parameters, with invalid values replaced by defaults.
    pub fn routing_params(&self) -> RoutingParams {
        let defaults = RoutingParams::default();
        let g = &self.generator;
        RoutingParams {
            max_tokens: if g.max_tokens == 0 {
                defaults.max_tokens
            } else {
                g.max_tokens
            },
            temperature: if (0.0..=2.0).contains(&g.temperature) {
                g.temperature
            } else {
                defaults.temperature
            },
            timeout: if g.timeout_secs == 0 {
                defaults.timeout
            } else {
                Duration::from_secs(g.timeout_secs)
            },
        }
    }

    /// Settings for the chat-completions adapter, credential included.
    pub fn generator_settings(&self) -> GeneratorSettings {
        let defaults = GeneratorSettings::default();
        GeneratorSettings {
            api_key: self.generator.resolve_api_key(),
            base_url: self.generator.base_url.clone(),
            model: if self.generator.model.trim().is_empty() {
                defaults.model
            } else {
                self.generator.model.clone()
            },
            timeout: self.routing_params().timeout,
        }
    }

    pub fn whatsapp_channel(&self) -> WhatsAppChannel {
        let number = self
            .contact
            .resolve_number()
            .unwrap_or_else(|| DEFAULT_WHATSAPP_NUMBER.to_string());
        WhatsAppChannel::new(self.contact.base_url.clone(), number)
    }
}
