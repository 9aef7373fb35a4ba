//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod resolve_body;
pub mod route_message;
