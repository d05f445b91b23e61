//! Analysis orchestration
//!
//! Sequences context detection, the optional website scrape, rule evaluation,
//! severity aggregation, narrative generation and the business verdicts, then
//! assembles the [`AnalysisResult`].

use std::sync::Arc;
use std::time::Instant;

use regex::Regex;

use crate::model::{AnalysisResult, DocumentContext, ExternalCheck, ScrapeOutcome};
use crate::retriever::SiteScraper;
use crate::service::business::BusinessAssessor;
use crate::service::context::detect_context;
use crate::service::narrative::{NarrativeGenerator, NarrativeRequest};
use crate::service::rules::{SignalRule, default_rules, evaluate_all};
use crate::service::severity;

pub struct TrustLensEngine {
    rules: Vec<Box<dyn SignalRule>>,
    scraper: Arc<dyn SiteScraper>,
    narrative: NarrativeGenerator,
    business: BusinessAssessor,
    url_pattern: Regex,
}

impl TrustLensEngine {
    pub fn new(scraper: Arc<dyn SiteScraper>, narrative: NarrativeGenerator) -> Self {
        Self {
            rules: default_rules(),
            scraper,
            narrative,
            business: BusinessAssessor::new(),
            url_pattern: Regex::new(r#"https?://[^\s<>"{}|\\^`\[\]]+"#)
                .expect("url pattern is a valid regex"),
        }
    }

    pub fn rules_loaded(&self) -> usize {
        self.rules.len()
    }

    pub fn enhancement_enabled(&self) -> bool {
        self.narrative.enhancement_enabled()
    }

    /// Summary text only, for callers that classified signals themselves
    pub async fn summarize(&self, request: &NarrativeRequest) -> String {
        self.narrative.summarize(request).await
    }

    /// Classify the text and run the full pipeline
    pub async fn analyze(&self, content: &str, content_type: &str) -> AnalysisResult {
        let context = detect_context(content, content_type);
        self.analyze_in_context(content, content_type, context).await
    }

    /// Run the pipeline with an already chosen context
    pub async fn analyze_in_context(
        &self,
        content: &str,
        content_type: &str,
        context: DocumentContext,
    ) -> AnalysisResult {
        let start_time = Instant::now();

        let scraped = self.scrape_first_url(content, context).await;

        let signals = evaluate_all(&self.rules, content, content_type, context);
        let assessment = severity::aggregate(&signals);

        let request = NarrativeRequest::from_signals(context, &signals);
        let narrative = self.narrative.generate(&request).await;

        let business = self.business.assess(
            context,
            content,
            &signals,
            assessment.tier,
            scraped.as_ref().map(|(_, outcome)| outcome),
        );
        let (business_priority, company_assessment) = match business {
            Some(b) => (Some(b.priority), Some(b.company)),
            None => (None, None),
        };

        let external_checks = scraped
            .iter()
            .map(|(url, outcome)| ExternalCheck::website_scrape(url, outcome))
            .collect();

        tracing::info!(
            context = %context,
            signal_count = signals.len(),
            concern_count = assessment.concern_count,
            severity = %assessment.tier,
            elapsed_ms = start_time.elapsed().as_millis(),
            "Analysis completed"
        );

        AnalysisResult {
            overall_score: assessment.score,
            overall_level: assessment.label.to_string(),
            signals,
            external_checks,
            summary: narrative.summary,
            what_you_might_miss: narrative.what_you_might_miss,
            recommended_actions: narrative.actions,
            business_priority,
            company_assessment,
            detected_context: context,
            concern_count: assessment.concern_count,
            severity_level: assessment.tier,
        }
    }

    /// Scrape the first URL in the text, business contexts only
    async fn scrape_first_url(
        &self,
        content: &str,
        context: DocumentContext,
    ) -> Option<(String, ScrapeOutcome)> {
        if !context.is_business() {
            return None;
        }

        let url = self.url_pattern.find(content)?.as_str().to_string();
        let outcome = self.scraper.scrape(&url).await;

        tracing::debug!(url = %url, success = outcome.is_success(), "Website scrape finished");

        Some((url, outcome))
    }
}
