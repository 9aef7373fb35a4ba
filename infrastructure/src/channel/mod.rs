//! Contact channel adapters.

mod whatsapp;

pub use whatsapp::{DEFAULT_WHATSAPP_NUMBER, WhatsAppChannel};
