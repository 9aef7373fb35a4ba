//! Presentation layer for dr-legal
//!
//! This crate contains CLI definitions, output formatters, the interactive
//! chat interface, and the HTTP chat endpoint.

pub mod chat;
pub mod cli;
pub mod output;
pub mod server;

// Re-export commonly used types
pub use chat::ChatRepl;
pub use cli::commands::{Cli, OutputFormat};
pub use output::console::ConsoleFormatter;
pub use server::{AppState, ServerError};
