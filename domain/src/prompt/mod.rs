//! Prompt templates for the generator.

pub mod persona;

pub use persona::PersonaTemplate;
