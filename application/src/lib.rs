//! Application layer for dr-legal
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::RoutingParams;
pub use ports::text_generator::{GenerationError, NoGenerator, SamplingParams, TextGenerator};
pub use use_cases::resolve_body::ResolveBodyUseCase;
pub use use_cases::route_message::{RouteMessageUseCase, RoutedResponse};
