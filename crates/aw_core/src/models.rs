use crate::types::SentimentReport;

/// A sentiment tagger applied to cleaned, relevant article bodies.
pub trait SentimentModel: Send + Sync {
    /// Short identifier used in logs and configuration
    fn name(&self) -> &str;

    /// Tag a single document. Empty input yields a neutral report.
    fn analyze(&self, text: &str) -> SentimentReport;
}
