//! Shortcut matcher: canned replies that bypass generation.

use super::classifier::AreaClassifier;
use crate::core::text::{contains_any, normalize};
use crate::lexicon::area::AreaLabel;

/// A phrase that triggers a canned topic description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HotTopic {
    pub phrase: String,
    pub description: String,
}

impl HotTopic {
    pub fn new(phrase: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            phrase: phrase.into(),
            description: description.into(),
        }
    }
}

/// Which canned reply fired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shortcut {
    /// Empty or whitespace-only input.
    IntroMenu,
    Greeting,
    Farewell,
    HotTopic {
        topic: String,
        description: String,
        area: AreaLabel,
    },
}

/// Ordered shortcut rules.
///
/// Evaluation order is fixed: empty input, greetings, farewells, then hot
/// topics in declaration order. The first rule to fire wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortcutMatcher {
    greetings: Vec<String>,
    farewells: Vec<String>,
    hot_topics: Vec<HotTopic>,
}

impl ShortcutMatcher {
    pub fn new(greetings: Vec<String>, farewells: Vec<String>, hot_topics: Vec<HotTopic>) -> Self {
        Self {
            greetings: greetings.into_iter().map(|g| g.to_lowercase()).collect(),
            farewells: farewells.into_iter().map(|f| f.to_lowercase()).collect(),
            hot_topics: hot_topics
                .into_iter()
                .map(|t| HotTopic {
                    phrase: t.phrase.to_lowercase(),
                    description: t.description,
                })
                .collect(),
        }
    }

    /// Rules used by the assistant out of the box.
    pub fn standard() -> Self {
        Self::new(
            ["oi", "olá", "bom dia", "boa tarde"]
                .map(String::from)
                .to_vec(),
            ["tchau", "obrigado", "valeu"].map(String::from).to_vec(),
            vec![
                HotTopic::new(
                    "divórcio",
                    "Temos especialistas em divórcio rápido, consensual ou litigioso.",
                ),
                HotTopic::new(
                    "trabalho",
                    "Podemos te ajudar com direitos trabalhistas e verbas rescisórias.",
                ),
                HotTopic::new(
                    "pix",
                    "Errou no PIX? Temos ações para tentar recuperar seu dinheiro.",
                ),
                HotTopic::new(
                    "acidente",
                    "Se foi vítima de acidente, você pode ter direito a indenização.",
                ),
                HotTopic::new(
                    "inss",
                    "Problema com aposentadoria ou auxílio? Podemos revisar seu caso.",
                ),
            ],
        )
    }

    pub fn hot_topics(&self) -> &[HotTopic] {
        &self.hot_topics
    }

    /// Returns the shortcut for `text`, or `None` to continue to generation.
    ///
    /// The classifier is only consulted when a hot topic fires, to tag the
    /// reply with its area.
    pub fn match_shortcut(&self, text: &str, classifier: &AreaClassifier<'_>) -> Option<Shortcut> {
        if text.trim().is_empty() {
            return Some(Shortcut::IntroMenu);
        }

        let normalized = normalize(text);

        if contains_any(&normalized, self.greetings.iter().map(String::as_str)) {
            return Some(Shortcut::Greeting);
        }

        if contains_any(&normalized, self.farewells.iter().map(String::as_str)) {
            return Some(Shortcut::Farewell);
        }

        self.hot_topics
            .iter()
            .find(|t| normalized.contains(t.phrase.as_str()))
            .map(|t| Shortcut::HotTopic {
                topic: t.phrase.clone(),
                description: t.description.clone(),
                area: classifier.classify(text),
            })
    }
}

impl Default for ShortcutMatcher {
    fn default() -> Self {
        Self::standard()
    }
}
