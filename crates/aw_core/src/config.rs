//! Pipeline configuration, loaded from TOML with every field defaulted.
//!
//! ```toml
//! [cleaner]
//! min_line_chars = 15
//!
//! [[cleaner.extra_rules]]
//! name = "newsletter_plug"
//! pattern = "(?i)\\bget our newsletter\\b"
//!
//! [relevance]
//! max_sentence_distance = 2
//! ```
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::{Error, Result};

pub const DEFAULT_AI_TERMS: &[&str] = &[
    "ai",
    "artificial intelligence",
    "machine learning",
    "deep learning",
    "neural network",
    "llm",
    "large language model",
    "chatgpt",
    "generative ai",
];

pub const DEFAULT_IMPACT_TERMS: &[&str] = &[
    "impact",
    "effect",
    "transform",
    "disrupt",
    "replace",
    "automate",
    "job",
    "employment",
    "workforce",
    "career",
    "industry",
    "sector",
    "profession",
    "work",
    "labor market",
    "skill",
];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub cleaner: CleanerConfig,
    pub relevance: RelevanceConfig,
    pub sentiment: SentimentConfig,
    pub pipeline: RunConfig,
    pub storage: StorageConfig,
}

impl PipelineConfig {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        tracing::debug!("Loaded configuration from {}", path.display());
        Self::from_toml_str(&source)
    }

    pub fn validate(&self) -> Result<()> {
        if self.pipeline.max_concurrency == 0 {
            return Err(Error::Config("pipeline.max_concurrency must be at least 1".to_string()));
        }
        if self.pipeline.chunk_size == 0 {
            return Err(Error::Config("pipeline.chunk_size must be at least 1".to_string()));
        }
        if self.sentiment.negative_threshold > self.sentiment.positive_threshold {
            return Err(Error::Config(
                "sentiment.negative_threshold must not exceed sentiment.positive_threshold".to_string(),
            ));
        }
        Ok(())
    }
}

/// A user supplied boilerplate rule appended after the built-in catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraRule {
    pub name: String,
    pub pattern: String,
    #[serde(default)]
    pub replacement: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanerConfig {
    /// Lines this short or shorter (after trimming) are dropped as menu debris
    pub min_line_chars: usize,
    /// Headline-shaped lines must be shorter than this to be deduplicated
    pub title_line_max_chars: usize,
    /// Also delete symbols outside `[\w\s.,!?;:'"()-]` in the first pass
    pub strip_symbols: bool,
    pub extra_rules: Vec<ExtraRule>,
}

impl Default for CleanerConfig {
    fn default() -> Self {
        Self {
            min_line_chars: 15,
            title_line_max_chars: 100,
            strip_symbols: false,
            extra_rules: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RelevanceConfig {
    pub ai_terms: Vec<String>,
    pub impact_terms: Vec<String>,
    pub max_sentence_distance: usize,
}

impl Default for RelevanceConfig {
    fn default() -> Self {
        Self {
            ai_terms: DEFAULT_AI_TERMS.iter().map(|t| t.to_string()).collect(),
            impact_terms: DEFAULT_IMPACT_TERMS.iter().map(|t| t.to_string()).collect(),
            max_sentence_distance: 3,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SentimentConfig {
    pub enabled: bool,
    pub model: String,
    pub positive_threshold: f32,
    pub negative_threshold: f32,
    pub max_evidence: usize,
}

impl Default for SentimentConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            model: "lexicon".to_string(),
            positive_threshold: 0.1,
            negative_threshold: -0.1,
            max_evidence: 2,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Drop records whose date is missing or unparseable
    pub drop_undated: bool,
    pub max_concurrency: usize,
    pub chunk_size: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            drop_undated: true,
            max_concurrency: 8,
            chunk_size: 256,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub backend: String,
    pub path: Option<String>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: "memory".to_string(),
            path: None,
        }
    }
}
