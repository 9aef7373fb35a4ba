//! Topic detector: is this message about law at all?

use crate::core::text::normalize;
use crate::lexicon::entities::Lexicon;

/// Gate that keeps off-topic input away from the generator.
#[derive(Debug, Clone, Copy)]
pub struct TopicDetector<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> TopicDetector<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// True iff at least one keyword of any area occurs in the text.
    pub fn is_in_domain(&self, text: &str) -> bool {
        let normalized = normalize(text);
        self.lexicon.areas().iter().any(|a| a.matches(&normalized))
    }
}
