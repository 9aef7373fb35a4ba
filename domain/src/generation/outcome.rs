//! Generation outcome

use crate::lexicon::area::AreaLabel;
use serde::Serialize;

/// Why no generated body is available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UnavailableReason {
    /// No credential configured; the generator was never called.
    MissingCredential,
    /// Network failure, timeout, or non-success HTTP status.
    TransportError,
    /// Successful response whose payload could not be read.
    MalformedResponse,
}

impl std::fmt::Display for UnavailableReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            UnavailableReason::MissingCredential => "missing credential",
            UnavailableReason::TransportError => "transport error",
            UnavailableReason::MalformedResponse => "malformed response",
        };
        write!(f, "{}", s)
    }
}

/// Result of asking the generator for a body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    Success { body: String, area: AreaLabel },
    Unavailable(UnavailableReason),
}

impl GenerationOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, GenerationOutcome::Success { .. })
    }

    pub fn unavailable_reason(&self) -> Option<UnavailableReason> {
        match self {
            GenerationOutcome::Unavailable(reason) => Some(*reason),
            GenerationOutcome::Success { .. } => None,
        }
    }
}
