//! Reddit listing pages, scraped from the old-style HTML frontend.
//!
//! Communities are walked one by one with Reddit's own request pacing.
//! Posts link out to external sites, so the detail resolver runs against
//! each post's own origin.

use std::path::Path;

use chrono::Utc;
use lazy_static::lazy_static;
use scraper::{ElementRef, Html, Selector};
use tokio::time::sleep;
use tracing::{info, warn};

use pn_classifier::Classifier;
use pn_core::{Article, RedditConfig, Result, ScrapeConfig};

use crate::detail::{self, DetailPage};
use crate::extract::{collapse_text, title_in_bounds};
use crate::fetcher::PageFetcher;
use crate::normalize;

lazy_static! {
    static ref THING: Selector = Selector::parse("div.thing").unwrap();
    static ref ENTRY: Selector = Selector::parse(".entry").unwrap();
    static ref TITLE_LINK: Selector = Selector::parse("a.title").unwrap();
    static ref THUMBNAIL_IMG: Selector = Selector::parse("a.thumbnail img").unwrap();
}

pub const SOURCE_NAME: &str = "Reddit";

#[derive(Debug, Clone)]
pub(crate) struct RedditPost {
    pub title: String,
    pub link: String,
    pub thumbnail: Option<String>,
}

pub struct RedditScraper {
    config: RedditConfig,
}

impl RedditScraper {
    pub fn new(config: RedditConfig) -> Self {
        Self { config }
    }

    fn listing_url(&self, community: &str) -> String {
        format!(
            "{}/r/{}/{}/?limit={}",
            self.config.base_url, community, self.config.sort, self.config.post_limit
        )
    }

    /// Scrape every configured community. Per-community failures are
    /// logged and skipped.
    pub async fn scrape_all(
        &self,
        fetcher: &PageFetcher,
        classifier: &Classifier,
        config: &ScrapeConfig,
    ) -> Vec<Article> {
        let mut articles = Vec::new();
        for community in &self.config.communities {
            match self.scrape_community(fetcher, classifier, config, community).await {
                Ok(mut found) => {
                    info!("📰 r/{}: {} posts", community, found.len());
                    articles.append(&mut found);
                }
                Err(e) => {
                    warn!("⚠️ r/{} failed: {}", community, e);
                }
            }
        }
        articles
    }

    async fn scrape_community(
        &self,
        fetcher: &PageFetcher,
        classifier: &Classifier,
        config: &ScrapeConfig,
        community: &str,
    ) -> Result<Vec<Article>> {
        let listing_url = self.listing_url(community);
        let html = fetcher.get_text(&listing_url).await?;

        if let Some(dir) = &self.config.debug_dump_dir {
            dump_listing(dir, community, &html);
        }

        let posts = parse_listing(&html, &self.config.base_url, config);

        let mut articles = Vec::new();
        for post in posts {
            let origin = normalize::origin_of(&post.link)
                .unwrap_or_else(|| self.config.base_url.clone());
            let page = match detail::resolve(fetcher, &post.link, &origin, config.max_url_length)
                .await
            {
                Ok(page) => page,
                Err(e) => {
                    warn!("⚠️ Failed to fetch {}: {}", post.link, e);
                    DetailPage::default()
                }
            };
            let content: String = page.content.chars().take(config.max_content_length).collect();
            let category = classifier.classify_submission(community, &post.title, &content, &post.link);
            articles.push(Article {
                title: post.title,
                link: post.link,
                published_at: Utc::now().date_naive(),
                category,
                content,
                image_url: post.thumbnail.or(page.image_url),
                source: SOURCE_NAME.to_string(),
                subreddit: Some(community.to_string()),
            });
            sleep(self.config.request_delay).await;
        }
        Ok(articles)
    }
}

/// Pull post blocks out of a listing page. `div.thing` is the stable
/// old-frontend structure; `.entry` covers stripped-down variants.
pub(crate) fn parse_listing(html: &str, base_url: &str, config: &ScrapeConfig) -> Vec<RedditPost> {
    let document = Html::parse_document(html);

    let mut blocks: Vec<ElementRef> = document.select(&THING).collect();
    if blocks.is_empty() {
        blocks = document.select(&ENTRY).collect();
    }
    blocks.truncate(config.reddit.post_limit);

    let mut posts = Vec::new();
    for block in blocks {
        if let Some(post) = extract_post(&block, base_url, config.max_url_length) {
            posts.push(post);
        }
    }
    posts
}

fn extract_post(block: &ElementRef, base_url: &str, max_url_length: usize) -> Option<RedditPost> {
    let title_el = block.select(&TITLE_LINK).next()?;
    let title = collapse_text(title_el);
    if !title_in_bounds(&title) {
        return None;
    }

    // Outbound target first, comment-page href as fallback.
    let href = block
        .value()
        .attr("data-url")
        .or_else(|| title_el.value().attr("href"))?;
    let href = href.trim();
    if href.is_empty() || href.starts_with('#') || href.starts_with("javascript:") {
        return None;
    }
    let link = normalize::truncate_url(&normalize::resolve_url(base_url, href)?, max_url_length);

    let thumbnail = block
        .select(&THUMBNAIL_IMG)
        .next()
        .and_then(|img| normalize::image_src(&img))
        .and_then(|src| normalize::resolve_url(base_url, &src))
        .filter(|u| normalize::valid_image_url(u))
        .map(|u| normalize::truncate_url(&u, max_url_length));

    Some(RedditPost {
        title,
        link,
        thumbnail,
    })
}

fn dump_listing(dir: &Path, community: &str, html: &str) {
    if let Err(e) = std::fs::create_dir_all(dir) {
        warn!("⚠️ Could not create dump directory {}: {}", dir.display(), e);
        return;
    }
    let path = dir.join(format!("reddit_{}.html", community));
    if let Err(e) = std::fs::write(&path, html) {
        warn!("⚠️ Could not write {}: {}", path.display(), e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = r#"
        <html><body>
            <div class="thing" data-url="https://elcomercio.pe/nota/economia-crece">
                <a class="thumbnail"><img src="https://b.redditstatic.com/pix/spacer.gif"></a>
                <a class="title" href="/r/peru/comments/abc/economia/">La economía peruana crece este trimestre</a>
            </div>
            <div class="thing">
                <a class="title" href="/r/peru/comments/def/corto/">Hola</a>
            </div>
            <div class="thing">
                <a class="title" href="/r/peru/comments/ghi/otros/">Un segundo titular válido para la lista</a>
            </div>
        </body></html>
    "#;

    #[test]
    fn test_parse_listing_extracts_posts() {
        let config = ScrapeConfig::default();
        let posts = parse_listing(LISTING, "https://old.reddit.com", &config);
        // The too-short title is dropped, the other two survive.
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].title, "La economía peruana crece este trimestre");
        assert_eq!(posts[0].link, "https://elcomercio.pe/nota/economia-crece");
        // The spacer gif fails image validation.
        assert_eq!(posts[0].thumbnail, None);
        assert_eq!(
            posts[1].link,
            "https://old.reddit.com/r/peru/comments/ghi/otros/"
        );
    }

    #[test]
    fn test_parse_listing_respects_post_limit() {
        let mut config = ScrapeConfig::default();
        config.reddit.post_limit = 1;
        let posts = parse_listing(LISTING, "https://old.reddit.com", &config);
        assert_eq!(posts.len(), 1);
    }

    #[test]
    fn test_listing_url_shape() {
        let scraper = RedditScraper::new(RedditConfig::default());
        assert_eq!(
            scraper.listing_url("peru"),
            "https://old.reddit.com/r/peru/hot/?limit=10"
        );
    }

    #[test]
    fn test_dump_listing_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        dump_listing(dir.path(), "peru", "<html></html>");
        let path = dir.path().join("reddit_peru.html");
        assert_eq!(std::fs::read_to_string(path).unwrap(), "<html></html>");
    }
}
