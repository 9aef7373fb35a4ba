//! WhatsApp click-to-chat links (`https://wa.me/<number>?text=<message>`)

use drlegal_domain::ContactChannel;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Number used when none is configured.
pub const DEFAULT_WHATSAPP_NUMBER: &str = "551199887766";

/// Everything except `A-Z a-z 0-9 _ . - ~ /` is percent-encoded.
const MESSAGE_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'~')
    .remove(b'/');

/// Builds WhatsApp links with a pre-filled message.
#[derive(Debug, Clone)]
pub struct WhatsAppChannel {
    base_url: String,
    number: String,
}

impl WhatsAppChannel {
    pub fn new(base_url: impl Into<String>, number: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            number: number.into(),
        }
    }

    pub fn number(&self) -> &str {
        &self.number
    }
}

impl Default for WhatsAppChannel {
    fn default() -> Self {
        Self::new("https://wa.me", DEFAULT_WHATSAPP_NUMBER)
    }
}

impl ContactChannel for WhatsAppChannel {
    fn build_link(&self, message: &str) -> String {
        format!(
            "{}/{}?text={}",
            self.base_url,
            self.number,
            utf8_percent_encode(message, MESSAGE_ENCODE_SET)
        )
    }
}
