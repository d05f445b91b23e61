//! Service introspection endpoints

use actix_web::{HttpResponse, Responder, get, web};
use serde::Serialize;
use utoipa::ToSchema;

use crate::service::TrustLensEngine;

const SERVICE_NAME: &str = "Trust Lens API";
const FEATURES: &[&str] = &["severity-first", "compound-risk", "action-oriented"];

#[derive(Serialize, ToSchema)]
pub struct ServiceInfo {
    pub message: String,
    pub version: String,
    pub features: Vec<String>,
}

#[derive(Serialize, ToSchema)]
pub struct HealthStatus {
    pub status: String,
    pub rules_loaded: usize,
}

/// Service name, version and feature tags
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service information", body = ServiceInfo)
    ),
    tag = "health"
)]
#[get("/")]
pub async fn root() -> impl Responder {
    HttpResponse::Ok().json(ServiceInfo {
        message: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        features: FEATURES.iter().map(|f| f.to_string()).collect(),
    })
}

/// Liveness check reporting the number of loaded rules
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is alive", body = HealthStatus)
    ),
    tag = "health"
)]
#[get("/health")]
pub async fn health(engine: web::Data<TrustLensEngine>) -> impl Responder {
    HttpResponse::Ok().json(HealthStatus {
        status: "healthy".to_string(),
        rules_loaded: engine.rules_loaded(),
    })
}

/// Configure health check routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(root).service(health);
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{App, test as actix_test};
    use serde_json::Value;

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

    #[actix_web::test]
    async fn test_root_and_health() {
        let engine = web::Data::new(TrustLensEngine::new(
            Arc::new(OfflineScraper),
            NarrativeGenerator::without_enhancement(),
        ));
        let app = actix_test::init_service(App::new().app_data(engine).configure(configure)).await;

        let req = actix_test::TestRequest::get().uri("/").to_request();
        let body: Value = actix_test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["message"], "Trust Lens API");
        assert_eq!(body["version"], "3.0.0");
        assert_eq!(body["features"][0], "severity-first");

        let req = actix_test::TestRequest::get().uri("/health").to_request();
        let body: Value = actix_test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["rules_loaded"], 3);
    }
}
