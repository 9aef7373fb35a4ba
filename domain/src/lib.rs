//! Domain layer for dr-legal
//!
//! This crate contains the routing logic of the intake assistant. It has no
//! dependencies on infrastructure or presentation concerns and performs no I/O.
//!
//! # Core Concepts
//!
//! ## Lexicon
//!
//! An ordered table of legal practice areas and their trigger keywords.
//! Every matcher lowercases the input and tests keywords by substring
//! containment.
//!
//! ## Routing
//!
//! - **Shortcuts**: empty input, greetings, farewells and hot topics get a
//!   canned reply without touching the generator
//! - **Topic gate**: only in-domain text may reach the generator
//! - **Area classification**: most keyword hits wins, first area on ties

pub mod core;
pub mod generation;
pub mod lexicon;
pub mod prompt;
pub mod response;
pub mod routing;

// Re-export commonly used types
pub use core::error::DomainError;
pub use generation::{
    outcome::{GenerationOutcome, UnavailableReason},
    request::GenerationRequest,
};
pub use lexicon::{
    area::{AreaLabel, DEFAULT_AREA},
    entities::{AreaKeywords, Lexicon},
};
pub use prompt::PersonaTemplate;
pub use response::{
    channel::ContactChannel,
    composer::ResponseComposer,
    payload::{ActionLink, ResponsePayload},
    templates::{CallToAction, ResponseTemplate},
};
pub use routing::{
    classifier::{AreaClassifier, ClassificationResult},
    route::RouteKind,
    shortcut::{HotTopic, Shortcut, ShortcutMatcher},
    topic::TopicDetector,
};
