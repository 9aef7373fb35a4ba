//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`] - domain-level errors
//! - [`text`] - normalisation and excerpt helpers used by every matcher

pub mod error;
pub mod text;
