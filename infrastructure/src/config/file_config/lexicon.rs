//! Lexicon override from TOML (`[[lexicon.areas]]`)

use drlegal_domain::{DomainError, Lexicon};
use serde::{Deserialize, Serialize};

/// One area entry. Order in the file is tie-break order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileAreaConfig {
    pub name: String,
    pub keywords: Vec<String>,
}

/// Replaces the built-in lexicon when `areas` is non-empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLexiconConfig {
    pub areas: Vec<FileAreaConfig>,
}

impl FileLexiconConfig {
    pub fn is_override(&self) -> bool {
        !self.areas.is_empty()
    }

    /// Build the lexicon: the configured areas, or the built-in table.
    pub fn to_lexicon(&self) -> Result<Lexicon, DomainError> {
        if !self.is_override() {
            return Ok(Lexicon::standard().clone());
        }
        Lexicon::new(
            self.areas
                .iter()
                .map(|a| (a.name.clone(), a.keywords.clone())),
        )
    }
}
