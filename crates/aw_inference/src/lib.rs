use aw_core::{RawText, RelevanceVerdict};
use lazy_static::lazy_static;

pub mod models;
pub mod relevance;

pub use models::create_model;
pub use relevance::RelevanceClassifier;

pub mod prelude {
    pub use super::models::create_model;
    pub use super::models::lexicon::LexiconModel;
    pub use super::relevance::RelevanceClassifier;
    pub use aw_core::{Error, RelevanceVerdict, Result, SentimentModel, SentimentReport};
}

lazy_static! {
    static ref DEFAULT_CLASSIFIER: RelevanceClassifier = RelevanceClassifier::default();
}

/// Classify `text` with the default term lists and sentence distance.
pub fn classify(text: impl Into<RawText>) -> RelevanceVerdict {
    match text.into().as_str() {
        Some(text) => DEFAULT_CLASSIFIER.classify(text),
        None => RelevanceVerdict::irrelevant(),
    }
}

pub fn is_relevant(text: impl Into<RawText>) -> bool {
    classify(text).is_relevant
}
