use aw_core::config::StorageConfig;
use aw_core::{ArticleStorage, Error, Result};
use std::sync::Arc;

pub mod backends;

pub use backends::*;

/// Backend names accepted in `[storage] backend`.
pub const AVAILABLE_BACKENDS: &[&str] = &["memory", "jsonl"];

pub async fn create_storage(config: &StorageConfig) -> Result<Arc<dyn ArticleStorage>> {
    match config.backend.as_str() {
        "memory" => Ok(Arc::new(MemoryStorage::new())),
        "jsonl" => {
            let path = config
                .path
                .as_deref()
                .ok_or_else(|| Error::Config("storage.path is required for the jsonl backend".to_string()))?;
            Ok(Arc::new(JsonlStorage::open(path).await?))
        }
        other => Err(Error::Config(format!(
            "Unknown storage backend '{}', expected one of: {}",
            other,
            AVAILABLE_BACKENDS.join(", ")
        ))),
    }
}

pub mod prelude {
    pub use super::backends::*;
    pub use super::create_storage;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_memory_storage() {
        let storage = create_storage(&StorageConfig::default()).await.unwrap();
        assert!(storage.all_articles().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_jsonl_requires_path() {
        let config = StorageConfig {
            backend: "jsonl".to_string(),
            path: None,
        };
        assert!(matches!(create_storage(&config).await, Err(Error::Config(_))));
    }

    #[tokio::test]
    async fn test_unknown_backend() {
        let config = StorageConfig {
            backend: "qdrant".to_string(),
            path: None,
        };
        assert!(matches!(create_storage(&config).await, Err(Error::Config(_))));
    }
}
