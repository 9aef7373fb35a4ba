//! Interactive chat module
//!
//! Provides a readline-based interactive chat interface for the router.

mod repl;

pub use repl::ChatRepl;
