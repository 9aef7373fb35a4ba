//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// These only surface while building domain objects at startup. Routing a
/// message never fails once the lexicon has been constructed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid lexicon: {0}")]
    InvalidLexicon(String),

    #[error("Duplicate area label: {0}")]
    DuplicateArea(String),

    #[error("Area '{0}' has no keywords")]
    EmptyArea(String),
}

impl DomainError {
    /// Check if this error was raised while validating a lexicon
    pub fn is_lexicon_error(&self) -> bool {
        matches!(
            self,
            DomainError::InvalidLexicon(_) | DomainError::DuplicateArea(_) | DomainError::EmptyArea(_)
        )
    }
}
