use aw_core::RawText;
use lazy_static::lazy_static;

pub mod boilerplate;
pub mod html;
pub mod lines;
pub mod logging;
pub mod manager;
pub mod normalizer;
pub mod rules;
pub mod title;

pub use logging::{init_logging, Logger};
pub use manager::{PipelineManager, PipelineStats, RecordOutcome, RecordProcessor};
pub use normalizer::Normalizer;
pub use rules::{Category, Rule, RuleSet, RuleSpec};

pub mod prelude {
    pub use super::manager::{PipelineManager, PipelineStats};
    pub use super::normalizer::Normalizer;
    pub use super::{normalize, normalize_title, strip_boilerplate};
    pub use aw_core::{Article, Error, RawText, Result};
}

lazy_static! {
    static ref DEFAULT_NORMALIZER: Normalizer = Normalizer::default();
}

/// First pass with default settings: markup, links and whitespace.
pub fn normalize(raw: impl Into<RawText>) -> String {
    DEFAULT_NORMALIZER.normalize(raw)
}

/// Second pass with default settings over already normalized text.
pub fn strip_boilerplate(text: &str) -> String {
    DEFAULT_NORMALIZER.strip_boilerplate(text)
}

pub fn normalize_title(raw: impl Into<RawText>) -> String {
    DEFAULT_NORMALIZER.normalize_title(raw)
}
