//! Runs the whole pipeline: every news source in order, then Reddit.
//!
//! Failures never cross a source boundary. A listing that cannot be
//! fetched just means zero candidates from that source; a detail page
//! that cannot be fetched means an article without body text.

use chrono::Utc;
use tokio::time::sleep;
use tracing::{error, info, warn};

use pn_classifier::Classifier;
use pn_core::{Article, Result, ScrapeConfig};

use crate::detail::{self, DetailPage};
use crate::extract;
use crate::fetcher::PageFetcher;
use crate::sources::{peru, RedditScraper, SourceSpec};

pub struct ScraperManager {
    config: ScrapeConfig,
    fetcher: PageFetcher,
    classifier: Classifier,
    sources: Vec<SourceSpec>,
    reddit: RedditScraper,
}

impl ScraperManager {
    /// Manager over the default source table.
    pub fn new(config: ScrapeConfig) -> Result<Self> {
        let sources = peru::sources();
        Self::with_sources(config, sources)
    }

    /// Manager over an explicit source table.
    pub fn with_sources(config: ScrapeConfig, sources: Vec<SourceSpec>) -> Result<Self> {
        let fetcher = PageFetcher::new(&config)?;
        let classifier = Classifier::for_profile(config.scoring);
        let reddit = RedditScraper::new(config.reddit.clone());
        Ok(Self {
            config,
            fetcher,
            classifier,
            sources,
            reddit,
        })
    }

    /// Classify ad hoc text with the configured profile, independently of
    /// any scraping.
    pub fn classify(&self, title: &str, content: &str, url: &str) -> String {
        self.classifier.classify(title, content, url)
    }

    pub fn categories(&self) -> Vec<String> {
        self.classifier
            .categories()
            .iter()
            .map(|c| c.to_string())
            .collect()
    }

    pub fn source_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.sources.iter().map(|s| s.name.clone()).collect();
        names.push(crate::sources::reddit::SOURCE_NAME.to_string());
        names
    }

    /// Run the full multi-source pipeline and return the flat union of
    /// results. Deduplication against storage is the caller's job.
    pub async fn run_all(&self) -> Vec<Article> {
        let mut articles = Vec::new();

        for spec in &self.sources {
            info!("📰 Scraping {}...", spec.name);
            match self.scrape_source(spec).await {
                Ok(mut found) => {
                    info!("✨ {}: {} articles", spec.name, found.len());
                    articles.append(&mut found);
                }
                Err(e) => {
                    error!("❌ {} failed: {}", spec.name, e);
                }
            }
            sleep(self.config.source_delay).await;
        }

        let mut from_reddit = self
            .reddit
            .scrape_all(&self.fetcher, &self.classifier, &self.config)
            .await;
        info!("✨ Reddit: {} articles", from_reddit.len());
        articles.append(&mut from_reddit);

        info!("✅ Scraping finished, {} articles in total", articles.len());
        articles
    }

    async fn scrape_source(&self, spec: &SourceSpec) -> Result<Vec<Article>> {
        let html = self.fetcher.get_text(&spec.base_url).await?;
        let candidates = extract::extract_listing(&html, spec, &self.config);

        let mut articles = Vec::new();
        for candidate in candidates {
            let page = match detail::resolve(
                &self.fetcher,
                &candidate.link,
                &spec.base_url,
                self.config.max_url_length,
            )
            .await
            {
                Ok(page) => page,
                Err(e) => {
                    warn!("⚠️ Failed to fetch {}: {}", candidate.link, e);
                    DetailPage::default()
                }
            };
            let content: String = page
                .content
                .chars()
                .take(self.config.max_content_length)
                .collect();
            let category = self
                .classifier
                .classify(&candidate.title, &content, &candidate.link);
            articles.push(Article {
                title: candidate.title,
                link: candidate.link,
                published_at: Utc::now().date_naive(),
                category,
                content,
                image_url: candidate.image_url.or(page.image_url),
                source: spec.name.clone(),
                subreddit: None,
            });
            sleep(self.config.article_delay).await;
        }
        Ok(articles)
    }
}
