pub mod config;
pub mod error;
pub mod models;
pub mod storage;
pub mod types;

pub use config::PipelineConfig;
pub use error::Error;
pub use models::SentimentModel;
pub use storage::{ArticleSource, ArticleStorage};
pub use types::{
    extract_domain, parse_date, Article, DateFeatures, Evidence, ProcessedArticle, RawText,
    RelevanceVerdict, Sentiment, SentimentReport,
};

pub type Result<T> = std::result::Result<T, Error>;
