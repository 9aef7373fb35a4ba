//! Contact channel trait

/// Builds links that open a human contact channel with a pre-filled message.
///
/// Implementations must percent-encode `message` so arbitrary user text is
/// safe to embed in a URL. They live in the infrastructure layer.
pub trait ContactChannel: Send + Sync {
    fn build_link(&self, message: &str) -> String;
}
