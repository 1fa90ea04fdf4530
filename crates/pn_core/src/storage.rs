use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Serialize;

use crate::types::Article;
use crate::Result;

/// What happened to an article handed to storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,
    /// An article with the same link already exists.
    Duplicate,
}

#[derive(Debug, Clone, Default)]
pub struct ArticleFilter {
    pub category: Option<String>,
    pub source: Option<String>,
    /// Case-insensitive text match against title and content.
    pub query: Option<String>,
    pub skip: usize,
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StorageStats {
    pub total: usize,
    pub by_category: HashMap<String, usize>,
    pub by_source: HashMap<String, usize>,
    pub latest: Option<NaiveDate>,
}

#[async_trait]
pub trait ArticleStorage: Send + Sync {
    /// Insert an article unless one with the same link already exists.
    async fn insert_article(&self, article: &Article) -> Result<InsertOutcome>;

    /// Look up a single article by its link.
    async fn get_by_link(&self, link: &str) -> Result<Option<Article>>;

    /// List articles matching the filter, newest first.
    async fn list(&self, filter: &ArticleFilter) -> Result<Vec<Article>>;

    async fn count(&self) -> Result<usize>;

    async fn stats(&self) -> Result<StorageStats>;
}
