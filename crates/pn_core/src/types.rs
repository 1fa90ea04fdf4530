use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A news article as produced by the scraping pipeline.
///
/// `link` is the uniqueness key; the pipeline itself never deduplicates,
/// storage checks by `link` before inserting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub link: String,
    pub published_at: NaiveDate,
    pub category: String,
    pub content: String,
    pub image_url: Option<String>,
    pub source: String,
    /// Originating community, only set for Reddit articles.
    pub subreddit: Option<String>,
}
