//! Response composition.
//!
//! - [`payload::ResponsePayload`] - the only artifact a request produces
//! - [`channel::ContactChannel`] - builds the call-to-action link target
//! - [`composer::ResponseComposer`] - body + area tag + call-to-action
//! - [`templates`] - canned bodies and call-to-action copy

pub mod channel;
pub mod composer;
pub mod payload;
pub mod templates;
