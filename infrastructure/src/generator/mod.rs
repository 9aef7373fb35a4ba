//! Text generator adapters.
//!
//! [`ChatCompletionsGenerator`] talks to any OpenAI-compatible
//! `/chat/completions` endpoint; the defaults point at Groq.

mod chat_completions;
mod protocol;

pub use chat_completions::{ChatCompletionsGenerator, GeneratorSettings};
