//! Lexicon entity

use super::area::AreaLabel;
use crate::core::error::DomainError;

/// Keywords that signal a single practice area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AreaKeywords {
    pub area: AreaLabel,
    keywords: Vec<String>,
}

impl AreaKeywords {
    /// Keywords in declaration order, lowercased and without duplicates.
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Number of distinct keywords found in `normalized`.
    ///
    /// A keyword counts once no matter how often it occurs.
    pub fn count_matches(&self, normalized: &str) -> usize {
        self.keywords
            .iter()
            .filter(|k| normalized.contains(k.as_str()))
            .count()
    }

    pub fn matches(&self, normalized: &str) -> bool {
        self.keywords.iter().any(|k| normalized.contains(k.as_str()))
    }
}

/// Ordered mapping from area label to trigger keywords.
///
/// Order is significant: the classifier breaks ties in favour of the area
/// that appears first. Built once and shared read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    areas: Vec<AreaKeywords>,
}

impl Lexicon {
    /// Build a lexicon, validating labels and keywords.
    ///
    /// Labels must be unique and non-blank; every area needs at least one
    /// non-blank keyword. Keywords are lowercased and de-duplicated within
    /// their area.
    pub fn new<L, K, I>(entries: I) -> Result<Self, DomainError>
    where
        L: Into<String>,
        K: AsRef<str>,
        I: IntoIterator<Item = (L, Vec<K>)>,
    {
        let mut areas: Vec<AreaKeywords> = Vec::new();

        for (label, raw_keywords) in entries {
            let label: String = label.into();
            let label = label.trim().to_string();
            if label.is_empty() {
                return Err(DomainError::InvalidLexicon(
                    "area label cannot be blank".to_string(),
                ));
            }
            if areas.iter().any(|a| a.area.as_str() == label) {
                return Err(DomainError::DuplicateArea(label));
            }

            let mut keywords: Vec<String> = Vec::with_capacity(raw_keywords.len());
            for keyword in &raw_keywords {
                let keyword = keyword.as_ref().trim().to_lowercase();
                if !keyword.is_empty() && !keywords.contains(&keyword) {
                    keywords.push(keyword);
                }
            }
            if keywords.is_empty() {
                return Err(DomainError::EmptyArea(label));
            }

            areas.push(AreaKeywords {
                area: AreaLabel::new(label),
                keywords,
            });
        }

        if areas.is_empty() {
            return Err(DomainError::InvalidLexicon(
                "at least one area is required".to_string(),
            ));
        }

        Ok(Self { areas })
    }

    /// Areas in iteration order.
    pub fn areas(&self) -> &[AreaKeywords] {
        &self.areas
    }

    pub fn labels(&self) -> impl Iterator<Item = &AreaLabel> {
        self.areas.iter().map(|a| &a.area)
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}
