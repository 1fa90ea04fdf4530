use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE};

use pn_core::{Error, Result, ScrapeConfig};

/// Thin wrapper around a preconfigured HTTP client.
///
/// The client is built once per run with the browser headers and timeout
/// from the config. No retries: a failed page is the caller's problem to
/// log and skip.
pub struct PageFetcher {
    client: reqwest::Client,
}

impl PageFetcher {
    pub fn new(config: &ScrapeConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_str(&config.accept)
                .map_err(|e| Error::Scraping(format!("Invalid Accept header: {}", e)))?,
        );
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_str(&config.accept_language)
                .map_err(|e| Error::Scraping(format!("Invalid Accept-Language header: {}", e)))?,
        );

        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self { client })
    }

    /// GET a page and return its body. Non-2xx statuses are errors.
    pub async fn get_text(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(Error::Fetch(format!(
                "{} returned status {}",
                url,
                response.status()
            )));
        }
        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetcher_builds_from_default_config() {
        assert!(PageFetcher::new(&ScrapeConfig::default()).is_ok());
    }
}
