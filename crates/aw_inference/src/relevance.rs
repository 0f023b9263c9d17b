//! Keyword and proximity filter for articles about AI and work.
use aw_core::config::RelevanceConfig;
use aw_core::{Evidence, RelevanceVerdict};

#[derive(Debug, Clone)]
pub struct RelevanceClassifier {
    ai_terms: Vec<String>,
    impact_terms: Vec<String>,
    max_sentence_distance: usize,
}

impl Default for RelevanceClassifier {
    fn default() -> Self {
        Self::new(&RelevanceConfig::default())
    }
}

impl RelevanceClassifier {
    pub fn new(config: &RelevanceConfig) -> Self {
        let lower = |terms: &[String]| {
            terms
                .iter()
                .map(|term| term.trim().to_lowercase())
                .filter(|term| !term.is_empty())
                .collect::<Vec<_>>()
        };
        Self {
            ai_terms: lower(&config.ai_terms),
            impact_terms: lower(&config.impact_terms),
            max_sentence_distance: config.max_sentence_distance,
        }
    }

    fn has_ai_term(&self, lower: &str) -> bool {
        self.ai_terms.iter().any(|term| lower.contains(term.as_str()))
    }

    fn has_impact_term(&self, lower: &str) -> bool {
        self.impact_terms.iter().any(|term| lower.contains(term.as_str()))
    }

    /// Terms are matched as case-insensitive substrings. Both kinds must occur
    /// somewhere, then together in one line or within a few sentences.
    pub fn classify(&self, text: &str) -> RelevanceVerdict {
        let lower = text.to_lowercase();
        if lower.trim().is_empty() || !self.has_ai_term(&lower) || !self.has_impact_term(&lower) {
            return RelevanceVerdict::irrelevant();
        }

        for (index, paragraph) in lower.split('\n').enumerate() {
            if self.has_ai_term(paragraph) && self.has_impact_term(paragraph) {
                return RelevanceVerdict::relevant(Evidence::Paragraph { index });
            }
        }

        let sentences: Vec<&str> = lower.split('.').collect();
        let ai_indices: Vec<usize> = sentences
            .iter()
            .enumerate()
            .filter(|(_, sentence)| self.has_ai_term(sentence))
            .map(|(i, _)| i)
            .collect();
        let impact_indices: Vec<usize> = sentences
            .iter()
            .enumerate()
            .filter(|(_, sentence)| self.has_impact_term(sentence))
            .map(|(i, _)| i)
            .collect();

        for &ai in &ai_indices {
            for &impact in &impact_indices {
                if ai.abs_diff(impact) <= self.max_sentence_distance {
                    return RelevanceVerdict::relevant(Evidence::Sentences { ai, impact });
                }
            }
        }

        RelevanceVerdict::irrelevant()
    }

    pub fn is_relevant(&self, text: &str) -> bool {
        self.classify(text).is_relevant
    }
}
