use async_trait::async_trait;
use crate::types::{Article, ProcessedArticle};
use crate::Result;

#[async_trait]
pub trait ArticleStorage: Send + Sync {
    /// Store a processed article
    async fn store_article(&self, article: &ProcessedArticle) -> Result<()>;

    /// Get all stored articles whose source domain matches
    async fn get_by_domain(&self, domain: &str) -> Result<Vec<ProcessedArticle>>;

    /// Get every stored article in insertion order
    async fn all_articles(&self) -> Result<Vec<ProcessedArticle>>;
}

#[async_trait]
pub trait ArticleSource: Send + Sync {
    /// Human readable description of where records come from
    fn describe(&self) -> String;

    /// Load every record. Unreadable records are skipped, not fatal.
    async fn load_articles(&self) -> Result<Vec<Article>>;
}
