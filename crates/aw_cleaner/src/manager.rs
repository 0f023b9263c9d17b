use aw_core::config::{PipelineConfig, RunConfig};
use aw_core::{
    extract_domain, Article, ArticleStorage, DateFeatures, Error, ProcessedArticle, Result,
    SentimentModel,
};
use aw_inference::{create_model, RelevanceClassifier};
use futures::future::join_all;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use tokio::sync::Semaphore;

use crate::logging::Logger;
use crate::normalizer::Normalizer;

/// What happened to one input record.
#[derive(Debug, Clone)]
pub enum RecordOutcome {
    Kept(Box<ProcessedArticle>),
    Undated,
    Irrelevant,
}

/// The per-record chain: normalize, date gate, relevance gate, boilerplate,
/// title, features, sentiment. Pure apart from logging.
pub struct RecordProcessor {
    normalizer: Normalizer,
    classifier: RelevanceClassifier,
    sentiment: Option<Arc<dyn SentimentModel>>,
    drop_undated: bool,
}

impl fmt::Debug for RecordProcessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordProcessor")
            .field("normalizer", &self.normalizer)
            .field("classifier", &self.classifier)
            .field("sentiment", &self.sentiment.as_ref().map(|m| m.name().to_string()))
            .field("drop_undated", &self.drop_undated)
            .finish()
    }
}

impl RecordProcessor {
    pub fn new(
        normalizer: Normalizer,
        classifier: RelevanceClassifier,
        sentiment: Option<Arc<dyn SentimentModel>>,
        drop_undated: bool,
    ) -> Self {
        Self {
            normalizer,
            classifier,
            sentiment,
            drop_undated,
        }
    }

    pub fn from_config(config: &PipelineConfig) -> Result<Self> {
        let normalizer = Normalizer::new(config.cleaner.clone())?;
        let classifier = RelevanceClassifier::new(&config.relevance);
        let sentiment = if config.sentiment.enabled {
            Some(create_model(&config.sentiment)?)
        } else {
            None
        };
        Ok(Self::new(normalizer, classifier, sentiment, config.pipeline.drop_undated))
    }

    pub fn process(&self, article: &Article) -> RecordOutcome {
        let cleaned_text = self.normalizer.normalize(&article.text);

        if self.drop_undated && article.published_at.is_none() {
            return RecordOutcome::Undated;
        }

        let relevance = self.classifier.classify(&cleaned_text);
        if !relevance.is_relevant {
            return RecordOutcome::Irrelevant;
        }

        let clean_text = self.normalizer.strip_boilerplate(&cleaned_text);
        let sentiment = self.sentiment.as_ref().map(|model| model.analyze(&clean_text));

        RecordOutcome::Kept(Box::new(ProcessedArticle {
            url: article.url.clone(),
            source_domain: article.url.as_deref().map(extract_domain).unwrap_or_default(),
            title: article.title.as_str().unwrap_or_default().to_string(),
            clean_title: self.normalizer.normalize_title(&article.title),
            cleaned_text,
            clean_text,
            published_at: article.published_at,
            date_features: article.published_at.map(DateFeatures::from),
            relevance,
            sentiment,
        }))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PipelineStats {
    pub total: usize,
    pub undated: usize,
    pub irrelevant: usize,
    pub kept: usize,
    pub stored: usize,
}

impl fmt::Display for PipelineStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} records: {} kept, {} stored, {} irrelevant, {} undated",
            self.total, self.kept, self.stored, self.irrelevant, self.undated
        )
    }
}

/// Runs a [`RecordProcessor`] over a batch on blocking worker tasks and
/// stores the survivors.
pub struct PipelineManager {
    processor: Arc<RecordProcessor>,
    storage: Arc<dyn ArticleStorage>,
    semaphore: Arc<Semaphore>,
    chunk_size: usize,
    logger: Logger,
}

impl PipelineManager {
    pub fn new(processor: RecordProcessor, storage: Arc<dyn ArticleStorage>, config: &RunConfig) -> Self {
        Self {
            processor: Arc::new(processor),
            storage,
            semaphore: Arc::new(Semaphore::new(config.max_concurrency.max(1))),
            chunk_size: config.chunk_size.max(1),
            logger: Logger::new().with_prefix("[pipeline]".to_string()),
        }
    }

    pub fn from_config(config: &PipelineConfig, storage: Arc<dyn ArticleStorage>) -> Result<Self> {
        let processor = RecordProcessor::from_config(config)?;
        Ok(Self::new(processor, storage, &config.pipeline))
    }

    pub fn storage(&self) -> Arc<dyn ArticleStorage> {
        self.storage.clone()
    }

    /// Process every record, returning outcomes in input order.
    pub async fn process_all(&self, articles: Vec<Article>) -> Result<Vec<RecordOutcome>> {
        let handles: Vec<_> = articles
            .chunks(self.chunk_size)
            .map(<[Article]>::to_vec)
            .enumerate()
            .map(|(index, chunk)| {
                let processor = self.processor.clone();
                let semaphore = self.semaphore.clone();
                let logger = self.logger.clone().with_prefix(format!("[chunk {}]", index));
                tokio::spawn(async move {
                    let _permit = semaphore
                        .acquire_owned()
                        .await
                        .map_err(|e| Error::External(e.into()))?;
                    logger.debug(&format!("processing {} records", chunk.len()));
                    let outcomes = tokio::task::spawn_blocking(move || {
                        chunk.iter().map(|article| processor.process(article)).collect::<Vec<_>>()
                    })
                    .await
                    .map_err(|e| Error::External(e.into()))?;
                    Ok::<_, Error>(outcomes)
                })
            })
            .collect();

        let mut outcomes = Vec::new();
        for joined in join_all(handles).await {
            let chunk = joined.map_err(|e| Error::External(e.into()))??;
            outcomes.extend(chunk);
        }
        Ok(outcomes)
    }

    pub async fn run(&self, articles: Vec<Article>) -> Result<PipelineStats> {
        let mut stats = PipelineStats {
            total: articles.len(),
            ..PipelineStats::default()
        };
        self.logger.info(&format!("📰 Processing {} records", stats.total));

        for outcome in self.process_all(articles).await? {
            match outcome {
                RecordOutcome::Undated => stats.undated += 1,
                RecordOutcome::Irrelevant => stats.irrelevant += 1,
                RecordOutcome::Kept(article) => {
                    stats.kept += 1;
                    self.storage.store_article(&article).await?;
                    stats.stored += 1;
                }
            }
        }

        self.logger.info(&format!("✅ {}", stats));
        Ok(stats)
    }
}
