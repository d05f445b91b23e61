//! Website scraping for company visibility checks

mod website;

use async_trait::async_trait;
use url::Url;

use crate::model::ScrapeOutcome;

pub use website::ScrapeDoRetriever;

#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    #[error("HTTP request failed: {0}")]
    HttpError(reqwest::Error),

    #[error("Scrape.do error: HTTP {0}")]
    Status(u16),

    #[error("{0} not set")]
    MissingApiKey(&'static str),
}

impl From<reqwest::Error> for ScrapeError {
    /// Drops the request URL, whose query carries the API token
    fn from(err: reqwest::Error) -> Self {
        ScrapeError::HttpError(err.without_url())
    }
}

/// Scrape collaborator: summarizes a page or reports a structured failure
#[async_trait]
pub trait SiteScraper: Send + Sync {
    async fn scrape(&self, url: &str) -> ScrapeOutcome;
}

/// Host part of a URL, or the input itself when it does not parse
fn extract_domain(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .unwrap_or_else(|| url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_domain() {
        assert_eq!(extract_domain("https://acme.io/about?x=1"), "acme.io");
        assert_eq!(extract_domain("http://sub.acme.co.uk"), "sub.acme.co.uk");
        assert_eq!(extract_domain("not a url"), "not a url");
    }
}
