pub mod peru;
pub mod reddit;

pub use reddit::RedditScraper;

/// Everything the generic extractor needs to know about one news source.
///
/// Sources differ only in this record; the extraction logic itself is
/// shared.
#[derive(Debug, Clone)]
pub struct SourceSpec {
    pub name: String,
    pub base_url: String,
    /// CSS selectors tried in priority order to find article blocks.
    pub block_selectors: Vec<String>,
    /// Noisy markup: union every selector's matches instead of stopping
    /// at the first selector that hits.
    pub union_blocks: bool,
}

impl SourceSpec {
    pub fn new(name: &str, base_url: &str, block_selectors: &[&str], union_blocks: bool) -> Self {
        Self {
            name: name.to_string(),
            base_url: base_url.to_string(),
            block_selectors: block_selectors.iter().map(|s| s.to_string()).collect(),
            union_blocks,
        }
    }
}
