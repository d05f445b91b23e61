//! Application state and service initialization
//!
//! This module centralizes collaborator construction and dependency injection,
//! making it easier to manage the application lifecycle and test services.

use std::net::{SocketAddr, ToSocketAddrs};
use std::sync::Arc;

use crate::model::Config;
use crate::retriever::{ScrapeDoRetriever, SiteScraper};
use crate::service::{GeminiClient, NarrativeGenerator, SummaryEnhancer, TrustLensEngine};

/// Application state shared by all workers
pub struct AppState {
    pub engine: Arc<TrustLensEngine>,
    pub bind_addr: SocketAddr,
}

impl AppState {
    /// Build the engine and its collaborators from configuration
    ///
    /// Missing API keys only disable the matching collaborator; the engine is
    /// always constructed.
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let bind_addr = resolve_bind_addr(&config.bind_addr())?;

        let scraper: Arc<dyn SiteScraper> = Arc::new(ScrapeDoRetriever::new(&config.scrape));

        let enhancer = GeminiClient::from_config(&config.enhancement)
            .map(|client| Arc::new(client) as Arc<dyn SummaryEnhancer>);

        let engine = TrustLensEngine::new(scraper, NarrativeGenerator::new(enhancer));

        tracing::info!(
            rules_loaded = engine.rules_loaded(),
            enhancement = engine.enhancement_enabled(),
            "Analysis engine ready"
        );

        Ok(Self {
            engine: Arc::new(engine),
            bind_addr,
        })
    }
}

fn resolve_bind_addr(addr: &str) -> Result<SocketAddr, AppError> {
    addr.to_socket_addrs()
        .ok()
        .and_then(|mut addrs| addrs.next())
        .ok_or_else(|| AppError::InvalidBindAddress(addr.to_string()))
}

/// Application-level errors
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum AppError {
    /// HOST/PORT do not form a usable socket address
    #[error("Invalid bind address: {0}")]
    InvalidBindAddress(String),
}
