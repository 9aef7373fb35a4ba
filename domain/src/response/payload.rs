//! Response payload

use crate::lexicon::area::AreaLabel;
use serde::Serialize;

/// Call-to-action hyperlink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionLink {
    pub url: String,
    pub label: String,
}

/// Final response for one message. Created and returned, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResponsePayload {
    /// Fully rendered HTML: body, optional area tag, optional link.
    pub body_html: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<AreaLabel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<ActionLink>,
}
