use aw_core::config::SentimentConfig;
use aw_core::{Error, Result, SentimentModel};
use std::sync::Arc;

pub mod lexicon;

/// Names accepted in `[sentiment] model`.
pub const AVAILABLE_MODELS: &[&str] = &["lexicon"];

pub fn create_model(config: &SentimentConfig) -> Result<Arc<dyn SentimentModel>> {
    match config.model.trim().to_lowercase().as_str() {
        "lexicon" => {
            tracing::debug!("Using lexicon sentiment model");
            Ok(Arc::new(lexicon::LexiconModel::new(config)))
        }
        other => Err(Error::Config(format!(
            "Unknown sentiment model '{}', expected one of: {}",
            other,
            AVAILABLE_MODELS.join(", ")
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_lexicon_model() {
        let model = create_model(&SentimentConfig::default()).unwrap();
        assert_eq!(model.name(), "lexicon");
    }

    #[test]
    fn test_unknown_model() {
        let config = SentimentConfig {
            model: "textblob".to_string(),
            ..SentimentConfig::default()
        };
        assert!(matches!(create_model(&config), Err(Error::Config(_))));
    }
}
