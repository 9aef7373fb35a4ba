//! Area classifier

use crate::core::text::normalize;
use crate::lexicon::area::AreaLabel;
use crate::lexicon::entities::Lexicon;
use serde::Serialize;

/// Outcome of scoring a message against the lexicon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassificationResult {
    pub area: AreaLabel,
    pub match_count: usize,
}

/// Scores text against every area and picks the best one.
///
/// Only a strictly greater count replaces the current best, so the area
/// listed first wins ties, and zero hits everywhere yields
/// [`AreaLabel::general`].
#[derive(Debug, Clone, Copy)]
pub struct AreaClassifier<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> AreaClassifier<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    pub fn classify(&self, text: &str) -> AreaLabel {
        self.classify_detailed(text).area
    }

    pub fn classify_detailed(&self, text: &str) -> ClassificationResult {
        let normalized = normalize(text);
        let mut best: Option<&AreaLabel> = None;
        let mut max_count = 0;

        for area in self.lexicon.areas() {
            let count = area.count_matches(&normalized);
            if count > max_count {
                max_count = count;
                best = Some(&area.area);
            }
        }

        ClassificationResult {
            area: best.cloned().unwrap_or_else(AreaLabel::general),
            match_count: max_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labor_scenario() {
        let classifier = AreaClassifier::new(Lexicon::standard());
        let result = classifier
            .classify_detailed("Fui demitido sem justa causa, tenho direito a horas extras?");
        assert_eq!(result.area.as_str(), "Direito Trabalhista");
        assert_eq!(result.match_count, 3);
    }

    #[test]
    fn test_no_keywords_returns_default_label() {
        let classifier = AreaClassifier::new(Lexicon::standard());
        let result = classifier.classify_detailed("Quem ganhou o jogo de futebol ontem?");
        assert!(result.area.is_general());
        assert_eq!(result.match_count, 0);
    }

    #[test]
    fn test_weather_question_lands_in_previdenciario() {
        let classifier = AreaClassifier::new(Lexicon::standard());
        let result = classifier.classify_detailed("Qual a previsão do tempo hoje?");
        assert_eq!(result.area.as_str(), "Direito Previdenciário");
        assert_eq!(result.match_count, 1);
    }

    #[test]
    fn test_short_keywords_match_inside_words() {
        let classifier = AreaClassifier::new(Lexicon::standard());
        let result = classifier.classify_detailed("quero abrir uma conta");
        assert_eq!(result.area.as_str(), "Direito Tributário");
        assert_eq!(result.match_count, 1);
    }

    #[test]
    fn test_single_area_match() {
        let lexicon = Lexicon::new([
            ("Família", vec!["divórcio", "guarda"]),
            ("Penal", vec!["crime", "prisão"]),
        ])
        .unwrap();
        let classifier = AreaClassifier::new(&lexicon);
        assert_eq!(classifier.classify("fui vítima de um crime").as_str(), "Penal");
    }

    #[test]
    fn test_tie_goes_to_first_area_in_lexicon_order() {
        let lexicon = Lexicon::new([
            ("Primeira", vec!["alfa"]),
            ("Segunda", vec!["beta"]),
        ])
        .unwrap();
        let classifier = AreaClassifier::new(&lexicon);
        assert_eq!(classifier.classify("beta e alfa").as_str(), "Primeira");
        assert_eq!(classifier.classify("alfa e beta").as_str(), "Primeira");

        let reversed = Lexicon::new([
            ("Segunda", vec!["beta"]),
            ("Primeira", vec!["alfa"]),
        ])
        .unwrap();
        assert_eq!(AreaClassifier::new(&reversed).classify("alfa e beta").as_str(), "Segunda");
    }

    #[test]
    fn test_higher_count_beats_earlier_area() {
        let lexicon = Lexicon::new([
            ("Primeira", vec!["alfa"]),
            ("Segunda", vec!["beta", "gama"]),
        ])
        .unwrap();
        let classifier = AreaClassifier::new(&lexicon);
        assert_eq!(classifier.classify("alfa beta gama").as_str(), "Segunda");
    }

    #[test]
    fn test_repeated_keyword_counts_once() {
        let lexicon = Lexicon::new([
            ("Primeira", vec!["alfa", "delta"]),
            ("Segunda", vec!["beta"]),
        ])
        .unwrap();
        let classifier = AreaClassifier::new(&lexicon);
        let result = classifier.classify_detailed("beta beta beta alfa delta");
        assert_eq!(result.area.as_str(), "Primeira");
        assert_eq!(result.match_count, 2);
    }
}
