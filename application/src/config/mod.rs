//! Application-level configuration.
//!
//! - [`RoutingParams`] - generator call control (tokens, temperature, timeout)

pub mod routing_params;

pub use routing_params::RoutingParams;
