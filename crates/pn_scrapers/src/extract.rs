//! Generic listing-page extraction.
//!
//! Site markup changes without notice, so nothing here hard-fails: block
//! selectors are tried in priority order, titles walk a fallback chain,
//! and a block that yields no usable title or link is simply skipped.

use lazy_static::lazy_static;
use scraper::{ElementRef, Html, Selector};

use pn_core::ScrapeConfig;

use crate::normalize;
use crate::sources::SourceSpec;

lazy_static! {
    static ref HEADING: Selector = Selector::parse("h1, h2, h3, h4, h5").unwrap();
    static ref TITLE_CLASS: Selector =
        Selector::parse("[class*=\"title\"], [class*=\"titulo\"], [class*=\"headline\"]").unwrap();
    static ref ANCHOR: Selector = Selector::parse("a").unwrap();
    static ref IMG: Selector = Selector::parse("img").unwrap();
    static ref GENERIC_BLOCK: Selector = Selector::parse("div, section, li").unwrap();
}

/// What a listing block yields before the detail fetch enriches it.
#[derive(Debug, Clone)]
pub struct ListingCandidate {
    pub title: String,
    pub link: String,
    pub image_url: Option<String>,
}

/// Parse a listing page and pull out every usable candidate, bounded by
/// `max_articles_per_source`.
pub fn extract_listing(html: &str, spec: &SourceSpec, config: &ScrapeConfig) -> Vec<ListingCandidate> {
    let document = Html::parse_document(html);
    select_blocks(&document, spec, config.max_articles_per_source)
        .iter()
        .filter_map(|block| extract_candidate(block, spec, config))
        .collect()
}

/// Try the source's selector chain; the first selector with matches wins,
/// unless the source is marked noisy, in which case all selector results
/// are unioned and deduplicated. When nothing matches at all, fall back to
/// a structural guess: any element holding both a link and a heading.
pub fn select_blocks<'a>(
    document: &'a Html,
    spec: &SourceSpec,
    max_blocks: usize,
) -> Vec<ElementRef<'a>> {
    let mut blocks: Vec<ElementRef<'a>> = Vec::new();

    for css in &spec.block_selectors {
        if let Ok(selector) = Selector::parse(css) {
            let matches: Vec<ElementRef<'a>> = document.select(&selector).collect();
            if matches.is_empty() {
                continue;
            }
            if spec.union_blocks {
                for element in matches {
                    if !blocks.iter().any(|b| b.id() == element.id()) {
                        blocks.push(element);
                    }
                }
            } else {
                blocks = matches;
                break;
            }
        }
    }

    if blocks.is_empty() {
        blocks = document
            .select(&GENERIC_BLOCK)
            .filter(|el| {
                el.select(&ANCHOR).next().is_some() && el.select(&HEADING).next().is_some()
            })
            .collect();
    }

    blocks.truncate(max_blocks);
    blocks
}

/// Extract title, link and a best-effort image from one block. Returns
/// `None` when the block has no usable title or link; the caller moves on.
pub fn extract_candidate(
    block: &ElementRef,
    spec: &SourceSpec,
    config: &ScrapeConfig,
) -> Option<ListingCandidate> {
    let title = extract_title(block)?;
    let link = extract_link(block, &title, &spec.base_url)?;
    let link = normalize::truncate_url(&link, config.max_url_length);
    let image_url = extract_block_image(block, &spec.base_url, config.max_url_length);
    Some(ListingCandidate {
        title,
        link,
        image_url,
    })
}

fn extract_title(block: &ElementRef) -> Option<String> {
    for el in block.select(&HEADING) {
        let text = collapse_text(el);
        if title_in_bounds(&text) {
            return Some(text);
        }
    }
    for el in block.select(&TITLE_CLASS) {
        let text = collapse_text(el);
        if title_in_bounds(&text) {
            return Some(text);
        }
    }
    for el in block.select(&ANCHOR) {
        let text = collapse_text(el);
        if looks_like_title(&text) {
            return Some(text);
        }
    }
    None
}

/// Prefer the anchor whose text matches the title; otherwise the first
/// anchor with a real href.
fn extract_link(block: &ElementRef, title: &str, base_url: &str) -> Option<String> {
    let mut fallback: Option<String> = None;
    for anchor in block.select(&ANCHOR) {
        if let Some(href) = anchor.value().attr("href") {
            let href = href.trim();
            if href.is_empty() || href.starts_with('#') || href.starts_with("javascript:") {
                continue;
            }
            if let Some(resolved) = normalize::resolve_url(base_url, href) {
                if collapse_text(anchor) == title {
                    return Some(resolved);
                }
                if fallback.is_none() {
                    fallback = Some(resolved);
                }
            }
        }
    }
    fallback
}

fn extract_block_image(block: &ElementRef, base_url: &str, max_url_length: usize) -> Option<String> {
    for img in block.select(&IMG) {
        if let Some(src) = normalize::image_src(&img) {
            if let Some(resolved) = normalize::resolve_url(base_url, &src) {
                if normalize::valid_image_url(&resolved) {
                    return Some(normalize::truncate_url(&resolved, max_url_length));
                }
            }
        }
    }
    None
}

pub(crate) fn collapse_text(el: ElementRef) -> String {
    el.text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

pub(crate) fn title_in_bounds(text: &str) -> bool {
    let len = text.chars().count();
    (10..=300).contains(&len)
}

/// Anchor texts also have to look like headlines: all-caps runs are
/// navigation, digit-only texts are pagination.
fn looks_like_title(text: &str) -> bool {
    if !title_in_bounds(text) {
        return false;
    }
    let letters: Vec<char> = text.chars().filter(|c| c.is_alphabetic()).collect();
    if letters.is_empty() {
        return false;
    }
    !letters.iter().all(|c| c.is_uppercase())
}
