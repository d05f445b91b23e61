//! Narrative generation: summary, "what you might miss" and actions
//!
//! All three texts come from the fixed template bank. For critical and high
//! severity the summary may additionally be rewritten by the enhancement
//! service; the explanation and actions never leave the process.

use std::sync::Arc;

use crate::model::{DocumentContext, SeverityTier, Signal};
use crate::service::llm::SummaryEnhancer;
use crate::service::narrative::prompts::build_enhancement_prompt;
use crate::service::narrative::templates::{ActionFamily, ExplanationFamily};

pub mod prompts;
pub mod templates;

/// Input to narrative generation
#[derive(Debug, Clone)]
pub struct NarrativeRequest {
    pub context: DocumentContext,
    /// Titles of red signals, in detection order
    pub concerns: Vec<String>,
}

impl NarrativeRequest {
    pub fn new(context: DocumentContext, concerns: Vec<String>) -> Self {
        Self { context, concerns }
    }

    pub fn from_signals(context: DocumentContext, signals: &[Signal]) -> Self {
        let concerns = signals
            .iter()
            .filter(|s| s.is_concern())
            .map(|s| s.name.clone())
            .collect();
        Self::new(context, concerns)
    }

    /// Same step function the severity aggregator uses
    pub fn severity(&self) -> SeverityTier {
        SeverityTier::from_concern_count(self.concerns.len())
    }
}

/// Generated narrative fields
#[derive(Debug, Clone, PartialEq)]
pub struct Narrative {
    pub summary: String,
    pub what_you_might_miss: String,
    pub actions: Vec<String>,
}

/// Builds narratives from templates, optionally enhancing the summary
#[derive(Clone, Default)]
pub struct NarrativeGenerator {
    enhancer: Option<Arc<dyn SummaryEnhancer>>,
}

impl NarrativeGenerator {
    pub fn new(enhancer: Option<Arc<dyn SummaryEnhancer>>) -> Self {
        Self { enhancer }
    }

    /// Template-only generator
    pub fn without_enhancement() -> Self {
        Self { enhancer: None }
    }

    pub fn enhancement_enabled(&self) -> bool {
        self.enhancer.is_some()
    }

    /// Produce all narrative fields for a request
    pub async fn generate(&self, request: &NarrativeRequest) -> Narrative {
        let severity = request.severity();
        let summary = self.summarize(request).await;

        let what_you_might_miss =
            templates::what_you_might_miss(ExplanationFamily::from(request.context), severity)
                .to_string();

        let actions = templates::actions(ActionFamily::from(request.context), severity)
            .iter()
            .map(|a| a.to_string())
            .collect();

        Narrative {
            summary,
            what_you_might_miss,
            actions,
        }
    }

    /// Template summary, enhanced when the tier allows it
    pub async fn summarize(&self, request: &NarrativeRequest) -> String {
        let severity = request.severity();
        let summary = templates::summary(severity, &request.concerns);
        self.enhance_summary(summary, severity, &request.concerns)
            .await
    }

    /// Best-effort rewrite of the template summary.
    ///
    /// Returns `summary` unchanged unless an enhancer is configured, the tier is
    /// critical or high, and the enhancer produced text.
    pub async fn enhance_summary(
        &self,
        summary: String,
        severity: SeverityTier,
        concerns: &[String],
    ) -> String {
        let Some(enhancer) = self.enhancer.as_ref() else {
            return summary;
        };

        if !severity.is_elevated() {
            return summary;
        }

        let prompt = build_enhancement_prompt(severity, concerns, &summary);

        match enhancer.rewrite(&prompt, severity).await {
            Some(enhanced) => {
                tracing::debug!(severity = %severity, "Using enhanced summary");
                enhanced
            }
            None => summary,
        }
    }
}
