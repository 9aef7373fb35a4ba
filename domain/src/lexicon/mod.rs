//! Legal-area lexicon.
//!
//! - [`area::AreaLabel`] - a practice-area name
//! - [`entities::Lexicon`] - ordered area → keyword table
//! - [`builtin`] - the Portuguese table shipped with the assistant

pub mod area;
pub mod builtin;
pub mod entities;
