use std::path::PathBuf;
use std::time::Duration;

/// Which scoring table the classifier runs with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoringProfile {
    /// Substring counting plus URL-pattern bonuses.
    Simple,
    /// Per-keyword weights plus a title-presence bonus.
    Weighted,
}

/// Settings for one full pipeline run.
///
/// Constructed once and handed by value to the manager and every stage;
/// nothing in the pipeline mutates it afterwards.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    pub request_timeout: Duration,
    pub user_agent: String,
    pub accept: String,
    pub accept_language: String,
    /// Pause between per-article detail fetches within one source.
    pub article_delay: Duration,
    /// Pause between sources.
    pub source_delay: Duration,
    pub max_content_length: usize,
    pub max_url_length: usize,
    pub max_articles_per_source: usize,
    pub scoring: ScoringProfile,
    pub reddit: RedditConfig,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(10),
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                         (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36"
                .to_string(),
            accept: "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8"
                .to_string(),
            accept_language: "es-ES,es;q=0.8,en;q=0.5".to_string(),
            article_delay: Duration::from_millis(100),
            source_delay: Duration::from_millis(700),
            max_content_length: 1500,
            max_url_length: 500,
            max_articles_per_source: 20,
            scoring: ScoringProfile::Simple,
            reddit: RedditConfig::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RedditConfig {
    pub base_url: String,
    pub communities: Vec<String>,
    pub sort: String,
    /// Posts taken per community listing.
    pub post_limit: usize,
    /// Reddit gets its own pacing, separate from the news sources.
    pub request_delay: Duration,
    /// When set, fetched listing pages are written here for inspection.
    /// Off by default.
    pub debug_dump_dir: Option<PathBuf>,
}

impl Default for RedditConfig {
    fn default() -> Self {
        Self {
            base_url: "https://old.reddit.com".to_string(),
            communities: vec![
                "peru".to_string(),
                "futbolperuano".to_string(),
                "tecnologia".to_string(),
            ],
            sort: "hot".to_string(),
            post_limit: 10,
            request_delay: Duration::from_millis(500),
            debug_dump_dir: None,
        }
    }
}
