//! Generation request value object

use crate::prompt::PersonaTemplate;
use serde::{Deserialize, Serialize};

/// What gets sent to the external text generator.
///
/// Sent once per message; never retried.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub question: String,
    pub system_directive: String,
}

impl GenerationRequest {
    /// Request using the standard Dr. Legal persona.
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            system_directive: PersonaTemplate::system_directive().to_string(),
        }
    }

    /// The user turn sent alongside the directive.
    pub fn user_prompt(&self) -> String {
        PersonaTemplate::question_prompt(&self.question)
    }
}
