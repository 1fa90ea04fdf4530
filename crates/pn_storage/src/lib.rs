use serde::Serialize;
use tracing::warn;

use pn_core::{Article, ArticleStorage, InsertOutcome};

pub mod backends;

pub use backends::memory::MemoryStorage;

/// Aggregate counts for one persisted pipeline run. This is what the
/// invoking layer reports; raw errors stay in the logs.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SaveReport {
    pub fetched: usize,
    pub saved: usize,
    pub duplicates: usize,
    pub errors: usize,
}

/// Store a batch of scraped articles with insert-if-absent-by-link
/// semantics.
pub async fn persist_articles(storage: &dyn ArticleStorage, articles: &[Article]) -> SaveReport {
    let mut report = SaveReport {
        fetched: articles.len(),
        ..Default::default()
    };
    for article in articles {
        match storage.insert_article(article).await {
            Ok(InsertOutcome::Inserted) => report.saved += 1,
            Ok(InsertOutcome::Duplicate) => report.duplicates += 1,
            Err(e) => {
                warn!("⚠️ Could not store {}: {}", article.link, e);
                report.errors += 1;
            }
        }
    }
    report
}

pub mod prelude {
    pub use super::{persist_articles, MemoryStorage, SaveReport};
    pub use pn_core::{ArticleFilter, ArticleStorage, InsertOutcome, StorageStats};
}
