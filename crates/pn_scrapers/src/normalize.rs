//! URL resolution, image validation and the lossy URL truncation that keeps
//! stored links within column width.

use scraper::ElementRef;
use url::Url;

const IMAGE_EXTENSIONS: [&str; 6] = [".jpg", ".jpeg", ".png", ".webp", ".gif", ".avif"];
const IMAGE_PATH_HINTS: [&str; 4] = ["/images/", "/img/", "/fotos/", "/imagenes/"];
const IMAGE_DENYLIST: [&str; 9] = [
    "placeholder",
    "blank",
    "spacer",
    "pixel",
    "logo",
    "icon",
    "avatar",
    "thumb",
    "data:image/svg",
];

/// Attribute names checked for an image source, lazy-loading variants last.
const IMAGE_ATTRS: [&str; 5] = ["src", "data-src", "data-lazy-src", "data-original", "data-srcset"];

/// Resolve a possibly-relative href against the source's base URL.
/// Protocol-relative URLs get an https scheme.
pub fn resolve_url(base: &str, href: &str) -> Option<String> {
    let href = href.trim();
    if href.is_empty() {
        return None;
    }
    if href.starts_with("//") {
        return Some(format!("https:{}", href));
    }
    if href.starts_with("http://") || href.starts_with("https://") {
        return Some(href.to_string());
    }
    let base = Url::parse(base).ok()?;
    base.join(href).ok().map(|u| u.to_string())
}

/// Scheme + host of an absolute URL, for resolving relative references on
/// pages we did not configure as a source.
pub fn origin_of(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let host = parsed.host_str()?;
    Some(format!("{}://{}", parsed.scheme(), host))
}

/// Truncate a URL that exceeds the stored maximum, keeping the first 50
/// characters and as much of the tail as fits. The result is recognizable
/// but no longer resolvable; that trade-off bounds the storage column.
pub fn truncate_url(url: &str, max_length: usize) -> String {
    let chars: Vec<char> = url.chars().collect();
    if chars.len() <= max_length {
        return url.to_string();
    }
    let tail = max_length.saturating_sub(100);
    let truncated: String = if tail > 0 {
        let head: String = chars[..50].iter().collect();
        let tail_part: String = chars[chars.len() - tail..].iter().collect();
        format!("{}...{}", head, tail_part)
    } else {
        chars[..max_length].iter().collect()
    };
    tracing::warn!(
        "URL truncated from {} to {} characters",
        chars.len(),
        truncated.chars().count()
    );
    truncated
}

/// Heuristic filter for principal-image candidates. Tracking pixels,
/// site furniture and SVG data URIs are rejected; anything with a known
/// image extension or an image path segment passes.
pub fn valid_image_url(url: &str) -> bool {
    if url.trim().is_empty() {
        return false;
    }
    let lower = url.to_lowercase();
    if IMAGE_DENYLIST.iter().any(|d| lower.contains(d)) {
        return false;
    }
    IMAGE_EXTENSIONS.iter().any(|e| lower.contains(e))
        || IMAGE_PATH_HINTS.iter().any(|h| lower.contains(h))
}

/// Pull an image source out of an element, checking the lazy-loading
/// attribute variants in priority order. For srcset values only the first
/// URL is taken.
pub fn image_src(element: &ElementRef) -> Option<String> {
    for attr in IMAGE_ATTRS {
        if let Some(value) = element.value().attr(attr) {
            let value = value.trim();
            if value.is_empty() {
                continue;
            }
            if attr == "data-srcset" {
                if let Some(first) = value
                    .split(|c: char| c == ',' || c == ' ')
                    .find(|s| !s.is_empty())
                {
                    return Some(first.to_string());
                }
                continue;
            }
            return Some(value.to_string());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    #[test]
    fn test_resolve_relative_url() {
        assert_eq!(
            resolve_url("https://example.pe", "/a/b").as_deref(),
            Some("https://example.pe/a/b")
        );
    }

    #[test]
    fn test_resolve_protocol_relative_url() {
        assert_eq!(
            resolve_url("https://example.pe", "//cdn.example.pe/x.png").as_deref(),
            Some("https://cdn.example.pe/x.png")
        );
    }

    #[test]
    fn test_resolve_absolute_url_passes_through() {
        assert_eq!(
            resolve_url("https://example.pe", "https://otro.pe/n").as_deref(),
            Some("https://otro.pe/n")
        );
    }

    #[test]
    fn test_resolve_empty_href() {
        assert_eq!(resolve_url("https://example.pe", "  "), None);
    }

    #[test]
    fn test_origin_of() {
        assert_eq!(
            origin_of("https://example.pe/noticia/1?x=1").as_deref(),
            Some("https://example.pe")
        );
        assert_eq!(origin_of("not a url"), None);
    }

    #[test]
    fn test_truncate_long_url_keeps_prefix_and_bound() {
        let long: String = format!("https://example.pe/{}", "a".repeat(700));
        let truncated = truncate_url(&long, 500);
        assert!(truncated.chars().count() <= 500);
        let prefix: String = long.chars().take(50).collect();
        assert!(truncated.starts_with(&prefix));
        assert!(truncated.contains("..."));
    }

    #[test]
    fn test_truncate_short_url_unchanged() {
        let url = "https://example.pe/corta";
        assert_eq!(truncate_url(url, 500), url);
    }

    #[test]
    fn test_truncate_tiny_maximum_hard_cuts() {
        let long = "x".repeat(200);
        let truncated = truncate_url(&long, 80);
        assert_eq!(truncated.chars().count(), 80);
    }

    #[test]
    fn test_image_validity() {
        assert!(!valid_image_url(""));
        assert!(!valid_image_url("https://cdn.pe/assets/logo.png"));
        assert!(!valid_image_url("https://cdn.pe/thumbs/a.jpg"));
        assert!(!valid_image_url("data:image/svg+xml;base64,abcd"));
        assert!(valid_image_url("https://cdn.pe/f/foto.jpg"));
        assert!(valid_image_url("https://cdn.pe/images/sin-extension"));
        assert!(!valid_image_url("https://cdn.pe/f/sin-extension"));
    }

    #[test]
    fn test_image_src_attribute_priority() {
        let html = r#"<img src="/a.jpg" data-src="/b.jpg">"#;
        let fragment = Html::parse_fragment(html);
        let selector = Selector::parse("img").unwrap();
        let img = fragment.select(&selector).next().unwrap();
        assert_eq!(image_src(&img).as_deref(), Some("/a.jpg"));
    }

    #[test]
    fn test_image_src_lazy_fallback() {
        let html = r#"<img data-lazy-src="/b.jpg">"#;
        let fragment = Html::parse_fragment(html);
        let selector = Selector::parse("img").unwrap();
        let img = fragment.select(&selector).next().unwrap();
        assert_eq!(image_src(&img).as_deref(), Some("/b.jpg"));
    }

    #[test]
    fn test_image_src_srcset_takes_first() {
        let html = r#"<img data-srcset="https://cdn.pe/b.jpg 2x, https://cdn.pe/c.jpg">"#;
        let fragment = Html::parse_fragment(html);
        let selector = Selector::parse("img").unwrap();
        let img = fragment.select(&selector).next().unwrap();
        assert_eq!(image_src(&img).as_deref(), Some("https://cdn.pe/b.jpg"));
    }
}
