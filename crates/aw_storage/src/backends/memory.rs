use async_trait::async_trait;
use aw_core::{ArticleStorage, ProcessedArticle, Result};
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    articles: Arc<RwLock<Vec<ProcessedArticle>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.articles.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.articles.read().await.is_empty()
    }
}

#[async_trait]
impl ArticleStorage for MemoryStorage {
    /// A record with the same URL as an existing one replaces it.
    async fn store_article(&self, article: &ProcessedArticle) -> Result<()> {
        let mut articles = self.articles.write().await;
        let existing = article
            .url
            .as_ref()
            .and_then(|url| articles.iter_mut().find(|a| a.url.as_ref() == Some(url)));
        match existing {
            Some(existing) => *existing = article.clone(),
            None => articles.push(article.clone()),
        }
        Ok(())
    }

    async fn get_by_domain(&self, domain: &str) -> Result<Vec<ProcessedArticle>> {
        let articles = self.articles.read().await;
        Ok(articles
            .iter()
            .filter(|article| article.source_domain == domain)
            .cloned()
            .collect())
    }

    async fn all_articles(&self) -> Result<Vec<ProcessedArticle>> {
        Ok(self.articles.read().await.clone())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use aw_core::RelevanceVerdict;

    pub(crate) fn sample(url: Option<&str>, domain: &str, title: &str) -> ProcessedArticle {
        ProcessedArticle {
            url: url.map(str::to_string),
            source_domain: domain.to_string(),
            title: title.to_string(),
            clean_title: title.to_string(),
            cleaned_text: "AI changes work.".to_string(),
            clean_text: "AI changes work.".to_string(),
            published_at: None,
            date_features: None,
            relevance: RelevanceVerdict::default(),
            sentiment: None,
        }
    }

    #[tokio::test]
    async fn test_store_and_query() {
        let storage = MemoryStorage::new();
        storage.store_article(&sample(Some("https://a.com/1"), "a.com", "One")).await.unwrap();
        storage.store_article(&sample(Some("https://b.org/2"), "b.org", "Two")).await.unwrap();
        storage.store_article(&sample(None, "", "Three")).await.unwrap();

        assert_eq!(storage.len().await, 3);
        let from_a = storage.get_by_domain("a.com").await.unwrap();
        assert_eq!(from_a.len(), 1);
        assert_eq!(from_a[0].title, "One");
        assert!(storage.get_by_domain("c.net").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_same_url_replaces() {
        let storage = MemoryStorage::new();
        storage.store_article(&sample(Some("https://a.com/1"), "a.com", "Old")).await.unwrap();
        storage.store_article(&sample(Some("https://a.com/1"), "a.com", "New")).await.unwrap();

        let all = storage.all_articles().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].title, "New");
    }

    #[tokio::test]
    async fn test_records_without_url_accumulate() {
        let storage = MemoryStorage::new();
        storage.store_article(&sample(None, "", "First")).await.unwrap();
        storage.store_article(&sample(None, "", "Second")).await.unwrap();
        assert_eq!(storage.len().await, 2);
    }
}
