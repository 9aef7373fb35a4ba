//! Routing parameters - generator call control.
//!
//! [`RoutingParams`] groups the static parameters that control the single
//! generator call made by [`ResolveBodyUseCase`](crate::use_cases::resolve_body::ResolveBodyUseCase).

use crate::ports::text_generator::SamplingParams;
use std::time::Duration;

/// Generator call parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutingParams {
    /// Maximum tokens in a generated reply.
    pub max_tokens: u32,
    /// Sampling temperature.
    pub temperature: f32,
    /// Upper bound on the whole generator call. Elapsing counts as a transport error.
    pub timeout: Duration,
}

impl Default for RoutingParams {
    fn default() -> Self {
        Self {
            max_tokens: 200,
            temperature: 0.8,
            timeout: Duration::from_secs(30),
        }
    }
}

impl RoutingParams {
    pub fn with_max_tokens(mut self, max: u32) -> Self {
        self.max_tokens = max;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn sampling(&self) -> SamplingParams {
        SamplingParams {
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        }
    }
}
