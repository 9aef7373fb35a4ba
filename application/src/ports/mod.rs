//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.
//! The contact channel port lives in the domain, since composing a response
//! needs it.

pub mod text_generator;
