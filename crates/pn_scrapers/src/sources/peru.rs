use super::SourceSpec;

/// The configured Peruvian news sources.
pub fn sources() -> Vec<SourceSpec> {
    vec![
        SourceSpec::new(
            "RPP",
            "https://rpp.pe",
            &["article", ".news-item", ".story", ".noticia"],
            false,
        ),
        SourceSpec::new(
            "Trome",
            "https://trome.com",
            &["article", ".news-item", ".story", ".noticia", ".item"],
            false,
        ),
        SourceSpec::new(
            "El Comercio",
            "https://elcomercio.pe",
            &["article", ".story", ".news-item", "[class*=\"noticia\"]"],
            false,
        ),
        // Markup here drifts between templates, so matches are unioned.
        SourceSpec::new(
            "Diario Sin Fronteras",
            "https://diariosinfronteras.pe",
            &["article", ".news-item", ".story", ".noticia", ".post"],
            true,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sources_are_well_formed() {
        let sources = sources();
        assert_eq!(sources.len(), 4);
        for spec in &sources {
            assert!(spec.base_url.starts_with("https://"));
            assert!(!spec.block_selectors.is_empty());
        }
    }
}
