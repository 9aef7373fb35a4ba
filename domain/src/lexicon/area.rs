//! Area label value object

use serde::{Deserialize, Serialize};

/// Label used when no area scores a single keyword hit.
pub const DEFAULT_AREA: &str = "Jurídico Geral";

/// A legal practice area (Value Object)
///
/// Used both for routing a message to a specialist and for the
/// `📌 <b>area</b>` tag on composed responses.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AreaLabel(String);

impl AreaLabel {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The "general / unclassified" label.
    pub fn general() -> Self {
        Self(DEFAULT_AREA.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_general(&self) -> bool {
        self.0 == DEFAULT_AREA
    }
}

impl std::fmt::Display for AreaLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for AreaLabel {
    fn from(s: &str) -> Self {
        AreaLabel::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_general_label() {
        assert!(AreaLabel::general().is_general());
        assert_eq!(AreaLabel::general().as_str(), "Jurídico Geral");
        assert!(!AreaLabel::from("Direito Penal").is_general());
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let json = serde_json::to_string(&AreaLabel::from("Indenização")).unwrap();
        assert_eq!(json, "\"Indenização\"");
    }
}
