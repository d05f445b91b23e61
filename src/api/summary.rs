//! Summary-only compatibility endpoint
//!
//! Accepts signals that a client already classified and returns just the
//! summary text. Any body that does not decode gets a fixed fallback answer
//! with status 200 rather than an error.

use actix_web::{HttpResponse, Responder, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::DocumentContext;
use crate::service::{NarrativeRequest, TrustLensEngine};

const MODEL_NAME: &str = "trustlens-v3";
const FALLBACK_MODEL_NAME: &str = "fallback";
const FALLBACK_SUMMARY: &str = "Analysis complete. Review the detected signals.";

/// Signal category that counts as a concern
const RISK_CATEGORY: &str = "risk";

fn default_category() -> String {
    "uncertainty".to_string()
}

fn default_title() -> String {
    "Unknown".to_string()
}

fn default_unknown() -> String {
    "unknown".to_string()
}

fn default_severity() -> String {
    "medium".to_string()
}

/// A client-side classified signal
#[allow(dead_code)] // Identification fields are accepted but not used by the summary
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShimSignal {
    #[serde(default = "default_unknown")]
    pub id: String,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub explanation: String,
    #[serde(default = "default_unknown")]
    pub rule_id: String,
    #[serde(default = "default_severity")]
    pub severity: String,
}

/// Body of `POST /api/generate-summary`
#[allow(dead_code)] // Assessments and the original text are accepted for compatibility
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateSummaryRequest {
    pub input_type: String,
    pub original_input: String,
    pub detected_context: String,
    pub signals: Vec<ShimSignal>,
    #[serde(default)]
    pub business_priority: Option<serde_json::Value>,
    #[serde(default)]
    pub company_assessment: Option<serde_json::Value>,
}

impl GenerateSummaryRequest {
    /// Narrative input: unknown context tags read as consumer messages
    fn narrative_request(&self) -> NarrativeRequest {
        let context = DocumentContext::from_label(&self.detected_context)
            .unwrap_or(DocumentContext::ConsumerMessage);

        let concerns = self
            .signals
            .iter()
            .filter(|s| s.category == RISK_CATEGORY)
            .map(|s| s.title.clone())
            .collect();

        NarrativeRequest::new(context, concerns)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct GenerateSummaryResponse {
    pub summary: String,
    #[serde(rename = "modelUsed")]
    pub model_used: String,
    pub fallback: bool,
}

impl GenerateSummaryResponse {
    fn generated(summary: String) -> Self {
        Self {
            summary,
            model_used: MODEL_NAME.to_string(),
            fallback: false,
        }
    }

    fn fallback() -> Self {
        Self {
            summary: FALLBACK_SUMMARY.to_string(),
            model_used: FALLBACK_MODEL_NAME.to_string(),
            fallback: true,
        }
    }
}

/// Generate a summary from pre-classified signals
#[utoipa::path(
    post,
    path = "/api/generate-summary",
    request_body = GenerateSummaryRequest,
    responses(
        (status = 200, description = "Summary generated, or the fallback summary for undecodable input", body = GenerateSummaryResponse)
    ),
    tag = "analysis"
)]
#[post("/api/generate-summary")]
pub async fn generate_summary(
    engine: web::Data<TrustLensEngine>,
    body: web::Bytes,
) -> impl Responder {
    let request: GenerateSummaryRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(e) => {
            tracing::warn!(error = %e, "Malformed summary request, returning fallback");
            return HttpResponse::Ok().json(GenerateSummaryResponse::fallback());
        }
    };

    let narrative_request = request.narrative_request();
    tracing::debug!(
        input_type = %request.input_type,
        context = %narrative_request.context,
        concern_count = narrative_request.concerns.len(),
        "Generating compatibility summary"
    );

    let summary = engine.summarize(&narrative_request).await;

    HttpResponse::Ok().json(GenerateSummaryResponse::generated(summary))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(generate_summary);
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{App, test as actix_test};
    use serde_json::{Value, json};

    use super::*;
    use crate::model::ScrapeOutcome;
    use crate::retriever::SiteScraper;
    use crate::service::NarrativeGenerator;

    struct OfflineScraper;

    #[async_trait::async_trait]
    impl SiteScraper for OfflineScraper {
        async fn scrape(&self, _url: &str) -> ScrapeOutcome {
            ScrapeOutcome::failure("offline")
        }
    }

    async fn post(body: String) -> Value {
        let engine = web::Data::new(TrustLensEngine::new(
            Arc::new(OfflineScraper),
            NarrativeGenerator::without_enhancement(),
        ));
        let app = actix_test::init_service(App::new().app_data(engine).configure(configure)).await;

        let req = actix_test::TestRequest::post()
            .uri("/api/generate-summary")
            .insert_header(("content-type", "application/json"))
            .set_payload(body)
            .to_request();
        actix_test::call_and_read_body_json(&app, req).await
    }

    #[actix_web::test]
    async fn test_risk_signals_drive_summary() {
        let body = json!({
            "inputType": "text",
            "originalInput": "...",
            "detectedContext": "legal_agreement",
            "signals": [
                { "category": "risk", "title": "Class Action Waiver" },
                { "category": "positive", "title": "Clear Pricing" },
                { "title": "Untitled" }
            ]
        });

        let resp = post(body.to_string()).await;

        assert_eq!(resp["modelUsed"], "trustlens-v3");
        assert_eq!(resp["fallback"], false);
        assert_eq!(
            resp["summary"],
            "Detected 1 area of concern: Class Action Waiver. These provisions warrant careful review before proceeding."
        );
    }

    #[actix_web::test]
    async fn test_no_risk_signals_is_low_summary() {
        let body = json!({
            "inputType": "text",
            "originalInput": "hello",
            "detectedContext": "something_new",
            "signals": []
        });

        let resp = post(body.to_string()).await;

        assert_eq!(resp["fallback"], false);
        assert_eq!(
            resp["summary"],
            "No significant risk patterns detected. Standard verification practices apply."
        );
    }

    #[actix_web::test]
    async fn test_malformed_input_returns_fallback() {
        for body in ["not json", "{}", r#"{"inputType": 3}"#] {
            let resp = post(body.to_string()).await;

            assert_eq!(resp["fallback"], true, "body: {}", body);
            assert_eq!(resp["modelUsed"], "fallback");
            assert_eq!(resp["summary"], FALLBACK_SUMMARY);
        }
    }

    #[test]
    fn test_signal_defaults_and_unknown_context() {
        let request: GenerateSummaryRequest = serde_json::from_value(json!({
            "inputType": "text",
            "originalInput": "x",
            "detectedContext": "general",
            "signals": [{}]
        }))
        .unwrap();

        let signal = &request.signals[0];
        assert_eq!(signal.category, "uncertainty");
        assert_eq!(signal.title, "Unknown");
        assert_eq!(signal.severity, "medium");

        let narrative = request.narrative_request();
        assert_eq!(narrative.context, DocumentContext::ConsumerMessage);
        assert!(narrative.concerns.is_empty());
    }
}
