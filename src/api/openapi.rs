//! OpenAPI specification endpoints

use actix_web::{HttpResponse, Responder, get};
use utoipa::OpenApi;

use crate::api::error::{ApiError, ErrorResponse};
use crate::api::{analyze, health, summary};
use crate::model::{
    AnalysisRequest, AnalysisResult, AttentionWorthiness, BusinessPriorityAssessment,
    CompanyAssessment, DocumentContext, ExternalCheck, RiskRewardBalance, SeverityTier, Signal,
    SignalLevel, StrategicImportance, TrackRecord, Visibility,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Trust Lens API",
        description = "Severity-first risk classification for contracts and messages"
    ),
    paths(
        analyze::analyze,
        summary::generate_summary,
        health::root,
        health::health,
    ),
    components(schemas(
        AnalysisRequest,
        AnalysisResult,
        Signal,
        SignalLevel,
        DocumentContext,
        SeverityTier,
        ExternalCheck,
        BusinessPriorityAssessment,
        StrategicImportance,
        AttentionWorthiness,
        RiskRewardBalance,
        CompanyAssessment,
        Visibility,
        TrackRecord,
        summary::GenerateSummaryRequest,
        summary::ShimSignal,
        summary::GenerateSummaryResponse,
        health::ServiceInfo,
        health::HealthStatus,
        ErrorResponse,
    )),
    tags(
        (name = "analysis", description = "Risk analysis"),
        (name = "health", description = "Service introspection")
    )
)]
pub struct ApiDoc;

/// Serve OpenAPI JSON specification
#[get("/openapi.json")]
pub async fn openapi_json() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

/// Serve OpenAPI YAML specification
#[get("/openapi.yaml")]
pub async fn openapi_yaml() -> Result<HttpResponse, ApiError> {
    let yaml = ApiDoc::openapi()
        .to_yaml()
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    Ok(HttpResponse::Ok().content_type("text/yaml").body(yaml))
}

/// Configure OpenAPI routes
pub fn configure(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(openapi_json).service(openapi_yaml);
}
