//! Generation request/outcome value objects.

pub mod outcome;
pub mod request;
