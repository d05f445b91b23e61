//! Scrape.do backed website retriever with page summarization

use std::sync::LazyLock;
use std::time::Duration;

use async_trait::async_trait;
use regex::Regex;
use reqwest::Client;
use scraper::{Html, Selector};

use super::{ScrapeError, SiteScraper, extract_domain};
use crate::model::config::ScrapeConfig;
use crate::model::{ScrapeOutcome, SiteSummary};

const ENV_SCRAPE_API_KEY: &str = "SCRAPE_DO_API_KEY";

/// Social networks whose presence counts towards visibility
const SOCIAL_HOSTS: &[&str] = &["facebook.com", "twitter.com", "linkedin.com", "instagram.com"];

static CONTACT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(contact|email|phone|address)").expect("contact pattern is a valid regex")
});

static ABOUT_LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)href=["'][^"']*about"#).expect("about pattern is a valid regex")
});

/// Fetches pages through the scrape.do proxy
pub struct ScrapeDoRetriever {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl ScrapeDoRetriever {
    pub fn new(config: &ScrapeConfig) -> Self {
        Self {
            client: Client::builder()
                .user_agent("trust-lens/3.0")
                .timeout(Duration::from_secs(config.timeout_secs))
                .build()
                .unwrap_or_else(|_| Client::new()),
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        }
    }

    /// Fetch raw HTML for a target URL
    async fn fetch(&self, url: &str) -> Result<String, ScrapeError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(ScrapeError::MissingApiKey(ENV_SCRAPE_API_KEY))?;

        tracing::debug!(url = %url, "Fetching page through scrape.do");

        let response = self
            .client
            .get(&self.base_url)
            .query(&[("token", api_key), ("url", url)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ScrapeError::Status(response.status().as_u16()));
        }

        Ok(response.text().await?)
    }
}

#[async_trait]
impl SiteScraper for ScrapeDoRetriever {
    async fn scrape(&self, url: &str) -> ScrapeOutcome {
        match self.fetch(url).await {
            Ok(html) => ScrapeOutcome::Success(summarize_page(&html, url)),
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "Website scrape failed");
                ScrapeOutcome::failure(e.to_string())
            }
        }
    }
}

/// Build a structural summary of an HTML page
pub fn summarize_page(html: &str, url: &str) -> SiteSummary {
    let document = Html::parse_document(html);
    let lower = html.to_lowercase();

    SiteSummary {
        title: extract_title(&document).unwrap_or_else(|| "Unknown".to_string()),
        description: extract_meta_name(&document, "description").unwrap_or_default(),
        has_contact: CONTACT_RE.is_match(html),
        has_about: ABOUT_LINK_RE.is_match(html),
        social_links: SOCIAL_HOSTS
            .iter()
            .filter(|host| lower.contains(*host))
            .map(|host| host.to_string())
            .collect(),
        domain: extract_domain(url),
    }
}

/// Extract title from <title>
fn extract_title(document: &Html) -> Option<String> {
    let selector = Selector::parse("title").ok()?;
    let title = document
        .select(&selector)
        .next()?
        .text()
        .collect::<String>()
        .trim()
        .to_string();

    if title.is_empty() { None } else { Some(title) }
}

/// Helper: Extract content from <meta name="...">
fn extract_meta_name(document: &Html, name: &str) -> Option<String> {
    let selector = Selector::parse(&format!("meta[name=\"{}\"]", name)).ok()?;
    document
        .select(&selector)
        .next()?
        .value()
        .attr("content")
        .map(|s| s.trim().to_string())
}
