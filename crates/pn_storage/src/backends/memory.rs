use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use pn_core::{Article, ArticleFilter, ArticleStorage, InsertOutcome, Result, StorageStats};

/// In-memory article store. Fine for one-shot runs and tests; a real
/// deployment would sit a relational backend behind the same trait.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    articles: Arc<RwLock<Vec<Article>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ArticleStorage for MemoryStorage {
    async fn insert_article(&self, article: &Article) -> Result<InsertOutcome> {
        let mut articles = self.articles.write().await;
        if articles.iter().any(|a| a.link == article.link) {
            return Ok(InsertOutcome::Duplicate);
        }
        articles.push(article.clone());
        Ok(InsertOutcome::Inserted)
    }

    async fn get_by_link(&self, link: &str) -> Result<Option<Article>> {
        let articles = self.articles.read().await;
        Ok(articles.iter().find(|a| a.link == link).cloned())
    }

    async fn list(&self, filter: &ArticleFilter) -> Result<Vec<Article>> {
        let articles = self.articles.read().await;
        let query = filter.query.as_ref().map(|q| q.to_lowercase());
        let mut matching: Vec<Article> = articles
            .iter()
            .filter(|a| {
                filter
                    .category
                    .as_ref()
                    .map_or(true, |c| &a.category == c)
            })
            .filter(|a| filter.source.as_ref().map_or(true, |s| &a.source == s))
            .filter(|a| {
                query.as_ref().map_or(true, |q| {
                    a.title.to_lowercase().contains(q) || a.content.to_lowercase().contains(q)
                })
            })
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.published_at.cmp(&a.published_at));

        let limited: Vec<Article> = match filter.limit {
            Some(limit) => matching.into_iter().skip(filter.skip).take(limit).collect(),
            None => matching.into_iter().skip(filter.skip).collect(),
        };
        Ok(limited)
    }

    async fn count(&self) -> Result<usize> {
        let articles = self.articles.read().await;
        Ok(articles.len())
    }

    async fn stats(&self) -> Result<StorageStats> {
        let articles = self.articles.read().await;
        let mut by_category: HashMap<String, usize> = HashMap::new();
        let mut by_source: HashMap<String, usize> = HashMap::new();
        for article in articles.iter() {
            *by_category.entry(article.category.clone()).or_default() += 1;
            *by_source.entry(article.source.clone()).or_default() += 1;
        }
        Ok(StorageStats {
            total: articles.len(),
            by_category,
            by_source,
            latest: articles.iter().map(|a| a.published_at).max(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn article(link: &str, category: &str, source: &str, day: u32) -> Article {
        Article {
            title: format!("Titular de {}", link),
            link: link.to_string(),
            published_at: NaiveDate::from_ymd_opt(2024, 5, day).unwrap(),
            category: category.to_string(),
            content: "contenido de prueba".to_string(),
            image_url: None,
            source: source.to_string(),
            subreddit: None,
        }
    }

    #[tokio::test]
    async fn test_insert_deduplicates_by_link() {
        let storage = MemoryStorage::new();
        let a = article("https://x.pe/1", "Política", "RPP", 1);
        assert_eq!(
            storage.insert_article(&a).await.unwrap(),
            InsertOutcome::Inserted
        );
        assert_eq!(
            storage.insert_article(&a).await.unwrap(),
            InsertOutcome::Duplicate
        );
        assert_eq!(storage.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_list_filters_and_orders() {
        let storage = MemoryStorage::new();
        storage
            .insert_article(&article("https://x.pe/1", "Política", "RPP", 1))
            .await
            .unwrap();
        storage
            .insert_article(&article("https://x.pe/2", "Deportes", "Trome", 2))
            .await
            .unwrap();
        storage
            .insert_article(&article("https://x.pe/3", "Política", "Trome", 3))
            .await
            .unwrap();

        let all = storage.list(&ArticleFilter::default()).await.unwrap();
        assert_eq!(all.len(), 3);
        // Newest first.
        assert_eq!(all[0].link, "https://x.pe/3");

        let politics = storage
            .list(&ArticleFilter {
                category: Some("Política".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(politics.len(), 2);

        let trome = storage
            .list(&ArticleFilter {
                source: Some("Trome".to_string()),
                limit: Some(1),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(trome.len(), 1);
        assert_eq!(trome[0].link, "https://x.pe/3");
    }

    #[tokio::test]
    async fn test_text_query_matches_title_and_content() {
        let storage = MemoryStorage::new();
        storage
            .insert_article(&article("https://x.pe/1", "Política", "RPP", 1))
            .await
            .unwrap();
        let found = storage
            .list(&ArticleFilter {
                query: Some("TITULAR".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        let missing = storage
            .list(&ArticleFilter {
                query: Some("inexistente".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert!(missing.is_empty());
    }

    #[tokio::test]
    async fn test_stats() {
        let storage = MemoryStorage::new();
        storage
            .insert_article(&article("https://x.pe/1", "Política", "RPP", 1))
            .await
            .unwrap();
        storage
            .insert_article(&article("https://x.pe/2", "Política", "Trome", 5))
            .await
            .unwrap();

        let stats = storage.stats().await.unwrap();
        assert_eq!(stats.total, 2);
        assert_eq!(stats.by_category.get("Política"), Some(&2));
        assert_eq!(stats.by_source.get("RPP"), Some(&1));
        assert_eq!(stats.latest, NaiveDate::from_ymd_opt(2024, 5, 5));
    }

    #[tokio::test]
    async fn test_persist_articles_reports_counts() {
        let storage = MemoryStorage::new();
        let batch = vec![
            article("https://x.pe/1", "Política", "RPP", 1),
            article("https://x.pe/1", "Política", "RPP", 1),
            article("https://x.pe/2", "Deportes", "Trome", 2),
        ];
        let report = crate::persist_articles(&storage, &batch).await;
        assert_eq!(report.fetched, 3);
        assert_eq!(report.saved, 2);
        assert_eq!(report.duplicates, 1);
        assert_eq!(report.errors, 0);
    }
}
