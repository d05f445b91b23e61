//! Summary enhancement through a generative language model
//!
//! The enhancement step is best effort: every failure mode collapses into
//! `None` at the [`SummaryEnhancer`] boundary so callers keep their template.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::model::SeverityTier;
use crate::model::config::EnhancementConfig;

const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Debug, thiserror::Error)]
pub enum EnhancementError {
    #[error("HTTP request failed: {0}")]
    HttpError(reqwest::Error),

    #[error("Unexpected status {0}")]
    Status(reqwest::StatusCode),

    #[error("Response did not contain generated text")]
    MissingText,
}

impl From<reqwest::Error> for EnhancementError {
    fn from(err: reqwest::Error) -> Self {
        EnhancementError::HttpError(err.without_url())
    }
}

/// Rewrites a summary prompt; `None` means keep the original text
#[async_trait]
pub trait SummaryEnhancer: Send + Sync {
    async fn rewrite(&self, prompt: &str, severity: SeverityTier) -> Option<String>;
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ContentPart>,
}

#[derive(Debug, Deserialize)]
struct ContentPart {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first part of the first candidate, if non-blank
    fn first_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .next()?
            .text
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
    }
}

/// Client for the Gemini `generateContent` endpoint
pub struct GeminiClient {
    client: Client,
    api_key: String,
    endpoint: String,
    temperature: f32,
    max_output_tokens: u32,
}

impl GeminiClient {
    /// Build a client, or `None` when no API key is configured
    pub fn from_config(config: &EnhancementConfig) -> Option<Self> {
        let api_key = config.api_key.clone()?;

        let client = Client::builder()
            .user_agent("trust-lens/3.0")
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|_| Client::new());

        tracing::info!(model = %config.model, "Summary enhancement enabled");

        Some(Self {
            client,
            api_key,
            endpoint: format!(
                "{}/models/{}:generateContent",
                config.base_url.trim_end_matches('/'),
                config.model
            ),
            temperature: config.temperature,
            max_output_tokens: config.max_output_tokens,
        })
    }

    /// Send the prompt and return the generated text
    pub async fn generate(&self, prompt: &str) -> Result<String, EnhancementError> {
        let body = serde_json::json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "temperature": self.temperature,
                "maxOutputTokens": self.max_output_tokens
            }
        });

        let response = self
            .client
            .post(&self.endpoint)
            .header(API_KEY_HEADER, self.api_key.as_str())
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(EnhancementError::Status(response.status()));
        }

        let parsed: GenerateContentResponse = response.json().await?;
        parsed.first_text().ok_or(EnhancementError::MissingText)
    }
}

#[async_trait]
impl SummaryEnhancer for GeminiClient {
    async fn rewrite(&self, prompt: &str, severity: SeverityTier) -> Option<String> {
        let start_time = std::time::Instant::now();

        match self.generate(prompt).await {
            Ok(text) => {
                tracing::debug!(
                    severity = %severity,
                    elapsed_ms = start_time.elapsed().as_millis(),
                    "Summary enhancement completed"
                );
                Some(text)
            }
            Err(e) => {
                tracing::warn!(
                    severity = %severity,
                    elapsed_ms = start_time.elapsed().as_millis(),
                    error = %e,
                    "Summary enhancement failed, keeping template summary"
                );
                None
            }
        }
    }
}
