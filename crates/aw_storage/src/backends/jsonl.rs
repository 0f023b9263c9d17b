//! JSON-lines files: one record per line, for both input and output.
use async_trait::async_trait;
use aw_core::{Article, ArticleSource, ArticleStorage, Error, ProcessedArticle, Result};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tokio::fs::{File, OpenOptions};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::sync::Mutex;

/// Parse every non-blank line of `content`. Lines that are not UTF-8 or fail
/// to parse are logged and skipped.
pub fn parse_lines<T: DeserializeOwned>(content: &[u8], origin: &str) -> Vec<T> {
    content
        .split(|byte| *byte == b'\n')
        .enumerate()
        .filter_map(|(n, bytes)| match std::str::from_utf8(bytes) {
            Ok(line) => Some((n, line)),
            Err(e) => {
                tracing::warn!("Skipping non UTF-8 record at {}:{}: {}", origin, n + 1, e);
                None
            }
        })
        .filter(|(_, line)| !line.trim().is_empty())
        .filter_map(|(n, line)| match serde_json::from_str(line) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!("Skipping malformed record at {}:{}: {}", origin, n + 1, e);
                None
            }
        })
        .collect()
}

/// Append-only store. Records are never rewritten, so a URL stored twice
/// appears twice.
#[derive(Debug)]
pub struct JsonlStorage {
    path: PathBuf,
    file: Mutex<File>,
}

impl JsonlStorage {
    pub async fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await
            .map_err(|e| Error::Storage(format!("Cannot open {}: {}", path.display(), e)))?;
        tracing::debug!("Opened JSONL storage at {}", path.display());
        Ok(Self {
            path,
            file: Mutex::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_all(&self) -> Result<Vec<ProcessedArticle>> {
        // Holding the writer lock keeps half-written lines out of the read.
        let _file = self.file.lock().await;
        let content = tokio::fs::read(&self.path).await?;
        Ok(parse_lines(&content, &self.path.display().to_string()))
    }
}

#[async_trait]
impl ArticleStorage for JsonlStorage {
    async fn store_article(&self, article: &ProcessedArticle) -> Result<()> {
        let mut line = serde_json::to_string(article)?;
        line.push('\n');
        let mut file = self.file.lock().await;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    async fn get_by_domain(&self, domain: &str) -> Result<Vec<ProcessedArticle>> {
        Ok(self
            .read_all()
            .await?
            .into_iter()
            .filter(|article| article.source_domain == domain)
            .collect())
    }

    async fn all_articles(&self) -> Result<Vec<ProcessedArticle>> {
        self.read_all().await
    }
}

/// Reads raw articles from a JSONL file, or from stdin when the path is `-`.
#[derive(Debug, Clone)]
pub struct JsonlSource {
    path: PathBuf,
}

impl JsonlSource {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    fn is_stdin(&self) -> bool {
        self.path.as_os_str() == "-"
    }
}

#[async_trait]
impl ArticleSource for JsonlSource {
    fn describe(&self) -> String {
        if self.is_stdin() {
            "stdin".to_string()
        } else {
            self.path.display().to_string()
        }
    }

    async fn load_articles(&self) -> Result<Vec<Article>> {
        let content = if self.is_stdin() {
            let mut buffer = Vec::new();
            tokio::io::stdin().read_to_end(&mut buffer).await?;
            buffer
        } else {
            tokio::fs::read(&self.path).await?
        };
        let articles: Vec<Article> = parse_lines(&content, &self.describe());
        tracing::info!("📥 Loaded {} records from {}", articles.len(), self.describe());
        Ok(articles)
    }
}
