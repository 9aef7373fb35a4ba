//! Infrastructure layer for dr-legal
//!
//! This crate contains adapters that implement the ports defined in the
//! application and domain layers, including configuration file loading.

pub mod channel;
pub mod config;
pub mod generator;

// Re-export commonly used types
pub use channel::{DEFAULT_WHATSAPP_NUMBER, WhatsAppChannel};
pub use config::{ConfigIssue, ConfigLoader, FileConfig, Severity};
pub use generator::{ChatCompletionsGenerator, GeneratorSettings};
