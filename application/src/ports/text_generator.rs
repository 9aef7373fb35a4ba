//! Text generator port
//!
//! Defines the interface for the external text-generation service.

use async_trait::async_trait;
use drlegal_domain::{GenerationRequest, UnavailableReason};
use thiserror::Error;

/// Errors that can occur during a generation call
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("No credential configured")]
    MissingCredential,

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed with status {status}: {message}")]
    HttpStatus { status: u16, message: String },

    #[error("Timeout")]
    Timeout,

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl GenerationError {
    /// Map onto the reason reported by the fallback policy.
    ///
    /// Timeouts and HTTP errors are transport failures.
    pub fn unavailable_reason(&self) -> UnavailableReason {
        match self {
            GenerationError::MissingCredential => UnavailableReason::MissingCredential,
            GenerationError::ConnectionError(_)
            | GenerationError::HttpStatus { .. }
            | GenerationError::Timeout => UnavailableReason::TransportError,
            GenerationError::MalformedResponse(_) => UnavailableReason::MalformedResponse,
        }
    }
}

/// Sampling parameters for one generation call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingParams {
    pub max_tokens: u32,
    pub temperature: f32,
}

/// Gateway to the text generator
///
/// Implementations (adapters) live in the infrastructure layer. The port is
/// a single request/response exchange so the routing logic can be tested
/// with a deterministic stub.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Whether a credential is configured. Must not touch the network.
    fn has_credential(&self) -> bool;

    /// Generate a reply. Called at most once per message.
    async fn generate(
        &self,
        request: &GenerationRequest,
        params: SamplingParams,
    ) -> Result<String, GenerationError>;
}

/// Generator with no credential, used when generation is disabled.
pub struct NoGenerator;

#[async_trait]
impl TextGenerator for NoGenerator {
    fn has_credential(&self) -> bool {
        false
    }

    async fn generate(
        &self,
        _request: &GenerationRequest,
        _params: SamplingParams,
    ) -> Result<String, GenerationError> {
        Err(GenerationError::MissingCredential)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_reason_mapping() {
        assert_eq!(
            GenerationError::Timeout.unavailable_reason(),
            UnavailableReason::TransportError
        );
        assert_eq!(
            GenerationError::HttpStatus {
                status: 429,
                message: "rate limited".to_string()
            }
            .unavailable_reason(),
            UnavailableReason::TransportError
        );
        assert_eq!(
            GenerationError::MalformedResponse("no choices".to_string()).unavailable_reason(),
            UnavailableReason::MalformedResponse
        );
        assert_eq!(
            GenerationError::MissingCredential.unavailable_reason(),
            UnavailableReason::MissingCredential
        );
    }

    #[test]
    fn test_no_generator_has_no_credential() {
        assert!(!NoGenerator.has_credential());
    }
}
