//! Per-article detail pages: full text and a principal image.
//!
//! Both extractions are best-effort. No content yields an empty string and
//! no image yields `None`; neither is an error.

use lazy_static::lazy_static;
use scraper::{ElementRef, Html, Selector};

use pn_core::Result;

use crate::fetcher::PageFetcher;
use crate::normalize;

/// Containers whose text never counts as article body.
const EXCLUDED_CONTAINERS: [&str; 6] = ["script", "style", "nav", "footer", "header", "aside"];

const CONTENT_SELECTORS: [&str; 9] = [
    "article",
    ".content",
    ".story-content",
    ".noticia-content",
    ".entry-content",
    ".post-content",
    "main",
    "[class*=\"content\"]",
    "[class*=\"body\"]",
];

const IMAGE_SELECTORS: [&str; 5] = [
    "article img",
    "figure img",
    ".story-image img",
    "main img",
    ".content img",
];

/// A container must yield more than this much text to be accepted.
const MIN_CONTAINER_TEXT: usize = 100;
/// Loose paragraphs shorter than this are ignored in the fallback sweep.
const MIN_LOOSE_PARAGRAPH: usize = 20;
const MAX_LOOSE_PARAGRAPHS: usize = 10;

lazy_static! {
    static ref PARAGRAPH: Selector = Selector::parse("p").unwrap();
    static ref META_IMAGE: Selector = Selector::parse(
        "meta[property=\"og:image\"], meta[name=\"twitter:image\"], meta[property=\"twitter:image\"]"
    )
    .unwrap();
}

#[derive(Debug, Clone, Default)]
pub struct DetailPage {
    pub content: String,
    pub image_url: Option<String>,
}

/// Fetch an article page and run both extractions over it.
pub async fn resolve(
    fetcher: &PageFetcher,
    url: &str,
    base_url: &str,
    max_url_length: usize,
) -> Result<DetailPage> {
    let html = fetcher.get_text(url).await?;
    Ok(parse_detail(&html, base_url, max_url_length))
}

pub fn parse_detail(html: &str, base_url: &str, max_url_length: usize) -> DetailPage {
    let document = Html::parse_document(html);
    DetailPage {
        content: extract_content(&document),
        image_url: extract_image(&document, base_url, max_url_length),
    }
}

/// Walk the content-container selectors in order and take the first one
/// with enough paragraph text. When none qualifies, sweep up loose
/// paragraphs from the whole page.
pub fn extract_content(document: &Html) -> String {
    for css in CONTENT_SELECTORS {
        if let Ok(selector) = Selector::parse(css) {
            if let Some(container) = document.select(&selector).next() {
                if in_excluded_container(&container) {
                    continue;
                }
                let text = paragraph_text(&container).join(" ");
                if text.chars().count() > MIN_CONTAINER_TEXT {
                    return text;
                }
            }
        }
    }

    document
        .select(&PARAGRAPH)
        .filter(|p| !in_excluded_container(p))
        .map(|p| collapse(p))
        .filter(|t| t.chars().count() > MIN_LOOSE_PARAGRAPH)
        .take(MAX_LOOSE_PARAGRAPHS)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Meta-tag hints first, then the usual image containers.
pub fn extract_image(document: &Html, base_url: &str, max_url_length: usize) -> Option<String> {
    for meta in document.select(&META_IMAGE) {
        if let Some(content) = meta.value().attr("content") {
            if let Some(image) = accept_image(content, base_url, max_url_length) {
                return Some(image);
            }
        }
    }
    for css in IMAGE_SELECTORS {
        if let Ok(selector) = Selector::parse(css) {
            for img in document.select(&selector) {
                if let Some(src) = normalize::image_src(&img) {
                    if let Some(image) = accept_image(&src, base_url, max_url_length) {
                        return Some(image);
                    }
                }
            }
        }
    }
    None
}

fn accept_image(src: &str, base_url: &str, max_url_length: usize) -> Option<String> {
    let resolved = normalize::resolve_url(base_url, src)?;
    if normalize::valid_image_url(&resolved) {
        Some(normalize::truncate_url(&resolved, max_url_length))
    } else {
        None
    }
}

fn paragraph_text(container: &ElementRef) -> Vec<String> {
    container
        .select(&PARAGRAPH)
        .filter(|p| !in_excluded_container(p))
        .map(|p| collapse(p))
        .filter(|t| !t.is_empty())
        .collect()
}

fn collapse(el: ElementRef) -> String {
    el.text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn in_excluded_container(el: &ElementRef) -> bool {
    el.ancestors().any(|node| {
        node.value()
            .as_element()
            .map_or(false, |e| EXCLUDED_CONTAINERS.contains(&e.name()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_from_first_sufficient_container() {
        let body = "Un párrafo con suficiente longitud para superar el umbral mínimo \
                    de caracteres exigido al contenedor de contenido.";
        let html = format!(
            r#"<html><body><article><p>{}</p><p>Segundo párrafo.</p></article></body></html>"#,
            body
        );
        let document = Html::parse_document(&html);
        let content = extract_content(&document);
        assert!(content.starts_with("Un párrafo"));
        assert!(content.contains("Segundo párrafo."));
    }

    #[test]
    fn test_insufficient_container_falls_through_to_paragraph_sweep() {
        let html = r#"
            <html><body>
                <article><p>Corto.</p></article>
                <div class="x">
                    <p>Primer párrafo suelto con longitud más que suficiente.</p>
                    <p>Segundo párrafo suelto con longitud más que suficiente.</p>
                </div>
            </body></html>
        "#;
        let document = Html::parse_document(html);
        let content = extract_content(&document);
        assert!(content.contains("Primer párrafo suelto"));
        assert!(content.contains("Segundo párrafo suelto"));
    }

    #[test]
    fn test_furniture_containers_are_ignored() {
        let html = r#"
            <html><body>
                <footer><p>Texto legal del pie de página que es bastante largo de verdad.</p></footer>
                <nav><p>Menú de navegación con muchos enlaces y texto descriptivo.</p></nav>
            </body></html>
        "#;
        let document = Html::parse_document(html);
        assert_eq!(extract_content(&document), "");
    }

    #[test]
    fn test_paragraph_sweep_is_capped() {
        let mut paragraphs = String::new();
        for i in 0..15 {
            paragraphs.push_str(&format!(
                "<p>Párrafo número {} con texto de relleno suficiente.</p>",
                i
            ));
        }
        let html = format!("<html><body><div class=\"x\">{}</div></body></html>", paragraphs);
        let document = Html::parse_document(&html);
        let content = extract_content(&document);
        assert!(content.contains("número 9"));
        assert!(!content.contains("número 10"));
    }

    #[test]
    fn test_og_image_meta_wins() {
        let html = r#"
            <html><head>
                <meta property="og:image" content="/images/principal">
            </head><body>
                <article><img src="/img/secundaria.jpg"></article>
            </body></html>
        "#;
        let document = Html::parse_document(html);
        assert_eq!(
            extract_image(&document, "https://fuente.pe", 500).as_deref(),
            Some("https://fuente.pe/images/principal")
        );
    }

    #[test]
    fn test_image_from_container_when_no_meta() {
        let html = r#"
            <html><body>
                <article><img data-src="https://cdn.fuente.pe/f/foto.png"></article>
            </body></html>
        "#;
        let document = Html::parse_document(html);
        assert_eq!(
            extract_image(&document, "https://fuente.pe", 500).as_deref(),
            Some("https://cdn.fuente.pe/f/foto.png")
        );
    }

    #[test]
    fn test_denylisted_images_are_skipped() {
        let html = r#"
            <html><body>
                <article>
                    <img src="/assets/logo.png">
                    <img src="/img/portada.jpg">
                </article>
            </body></html>
        "#;
        let document = Html::parse_document(html);
        assert_eq!(
            extract_image(&document, "https://fuente.pe", 500).as_deref(),
            Some("https://fuente.pe/img/portada.jpg")
        );
    }

    #[test]
    fn test_no_image_yields_none() {
        let document = Html::parse_document("<html><body><p>Sin imágenes aquí.</p></body></html>");
        assert_eq!(extract_image(&document, "https://fuente.pe", 500), None);
    }
}
