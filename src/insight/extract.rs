//! Insight extraction from publication text

use super::tokenizer::{DefaultTokenizer, Tokenizer};
use crate::catalog::Publication;
use serde::Serialize;
use std::collections::HashSet;
use std::sync::Arc;

/// Number of leading sentences reported as key findings
pub const KEY_FINDING_COUNT: usize = 2;

/// Number of distinct terms reported as critical terms
pub const CRITICAL_TERM_COUNT: usize = 5;

/// Terms must be strictly longer than this many characters
const MIN_TERM_LENGTH: usize = 4;

/// The text-derived part of an insight
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextHighlights {
    pub key_findings: Vec<String>,
    pub critical_terms: Vec<String>,
}

/// Insight report for one publication
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Insights {
    pub key_findings: Vec<String>,
    pub critical_terms: Vec<String>,
    /// The publication's risk level
    pub risk_assessment: String,
    pub countermeasures: Vec<String>,
    /// The publication's mission relevance
    pub mission_impact: Vec<String>,
}

/// Builds insights using a pluggable tokenizer
#[derive(Clone)]
pub struct InsightExtractor {
    tokenizer: Arc<dyn Tokenizer>,
}

impl Default for InsightExtractor {
    fn default() -> Self {
        Self::new(Arc::new(DefaultTokenizer::new()))
    }
}

impl std::fmt::Debug for InsightExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InsightExtractor").finish_non_exhaustive()
    }
}

impl InsightExtractor {
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        Self { tokenizer }
    }

    /// Leading sentences and first distinct long non-stopword terms of `text`
    pub fn highlights(&self, text: &str) -> TextHighlights {
        let key_findings = self
            .tokenizer
            .sentences(text)
            .into_iter()
            .take(KEY_FINDING_COUNT)
            .collect();

        let mut seen = HashSet::new();
        let critical_terms = self
            .tokenizer
            .words(text)
            .into_iter()
            .filter(|word| word.chars().count() > MIN_TERM_LENGTH)
            .filter(|word| !self.tokenizer.is_stopword(word))
            .filter(|word| seen.insert(word.clone()))
            .take(CRITICAL_TERM_COUNT)
            .collect();

        TextHighlights {
            key_findings,
            critical_terms,
        }
    }

    /// Full insight report for a publication
    pub fn extract(&self, publication: &Publication) -> Insights {
        let TextHighlights {
            key_findings,
            critical_terms,
        } = self.highlights(&publication.full_text);

        Insights {
            key_findings,
            critical_terms,
            risk_assessment: publication.risk_level.clone(),
            countermeasures: publication.countermeasures.clone(),
            mission_impact: publication.mission_relevance.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, PublicationId};

    #[test]
    fn test_sample_insights() {
        let catalog = Catalog::sample().unwrap();
        let publication = catalog.get(PublicationId::new(1)).unwrap();
        let insights = InsightExtractor::default().extract(publication);

        assert_eq!(
            insights.key_findings,
            vec![
                "Microgravity environments significantly alter plant morphology and physiology.",
                "Root systems show reduced gravitropic response, leading to altered nutrient and water uptake patterns.",
            ]
        );
        assert_eq!(
            insights.critical_terms,
            vec!["microgravity", "environments", "significantly", "alter", "plant"]
        );
        assert_eq!(insights.risk_assessment, "Medium");
        assert_eq!(insights.countermeasures, vec!["Artificial gravity", "Nutrient supplementation"]);
        assert_eq!(insights.mission_impact, vec!["Mars", "Moon", "ISS"]);
    }

    #[test]
    fn test_hyphenated_words_split() {
        let catalog = Catalog::sample().unwrap();
        let publication = catalog.get(PublicationId::new(6)).unwrap();
        let insights = InsightExtractor::default().extract(publication);
        assert_eq!(
            insights.critical_terms,
            vec!["minute", "orbital", "period", "creates", "sunrise"]
        );
    }

    #[test]
    fn test_terms_filtered_and_deduplicated() {
        let extractor = InsightExtractor::default();
        let highlights = extractor.highlights(
            "Radiation, radiation and RADIATION again. Shielding would help because \
             shielding works. About these other tiny bits: cells.",
        );
        // "again", "would", "because", "about", "these" and "other" are stopwords; "help", "tiny" and "bits" are too short
        assert_eq!(
            highlights.critical_terms,
            vec!["radiation", "shielding", "works", "cells"]
        );
    }

    #[test]
    fn test_short_text() {
        let extractor = InsightExtractor::default();
        let highlights = extractor.highlights("Only one sentence here");
        assert_eq!(highlights.key_findings, vec!["Only one sentence here"]);
        assert_eq!(highlights.critical_terms, vec!["sentence"]);

        let empty = extractor.highlights("");
        assert!(empty.key_findings.is_empty());
        assert!(empty.critical_terms.is_empty());
    }

    #[test]
    fn test_bounds_hold_for_every_sample() {
        let catalog = Catalog::sample().unwrap();
        let extractor = InsightExtractor::default();
        for publication in catalog.publications() {
            let insights = extractor.extract(publication);
            assert!(insights.key_findings.len() <= KEY_FINDING_COUNT);
            assert!(insights.critical_terms.len() <= CRITICAL_TERM_COUNT);

            let unique: HashSet<&String> = insights.critical_terms.iter().collect();
            assert_eq!(unique.len(), insights.critical_terms.len());
            for term in &insights.critical_terms {
                assert!(term.chars().count() > MIN_TERM_LENGTH);
                assert_eq!(term, &term.to_lowercase());
            }
        }
    }

    struct WhitespaceTokenizer;

    impl Tokenizer for WhitespaceTokenizer {
        fn sentences(&self, text: &str) -> Vec<String> {
            text.lines().map(str::to_string).collect()
        }

        fn words(&self, text: &str) -> Vec<String> {
            text.split_whitespace().map(str::to_lowercase).collect()
        }

        fn is_stopword(&self, word: &str) -> bool {
            word == "ignored"
        }
    }

    #[test]
    fn test_custom_tokenizer() {
        let extractor = InsightExtractor::new(Arc::new(WhitespaceTokenizer));
        let highlights = extractor.highlights("alpha-beta gamma\nignored words.\nthird line");
        assert_eq!(highlights.key_findings, vec!["alpha-beta gamma", "ignored words."]);
        assert_eq!(highlights.critical_terms, vec!["alpha-beta", "gamma", "words.", "third"]);
    }
}
