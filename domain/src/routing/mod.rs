//! Intent routing: topic gate, area scoring, and canned shortcuts.
//!
//! All matchers share one rule: lowercase the input and test keywords by
//! substring containment. A keyword may match inside a larger word
//! ("oi" matches "foi"); that is intentional and covered by tests.

pub mod classifier;
pub mod route;
pub mod shortcut;
pub mod topic;
