//! Full analysis endpoint

use actix_web::{HttpResponse, Responder, post, web};

use crate::api::error::ErrorResponse;
use crate::model::{AnalysisRequest, AnalysisResult};
use crate::service::TrustLensEngine;

/// Classify a text and return the complete risk verdict
///
/// Every well-formed body yields a result; collaborator failures only reduce
/// the detail available (see `external_checks`).
#[utoipa::path(
    post,
    path = "/analyze",
    request_body = AnalysisRequest,
    responses(
        (status = 200, description = "Analysis completed", body = AnalysisResult),
        (status = 400, description = "Body is not a valid analysis request", body = ErrorResponse)
    ),
    tag = "analysis"
)]
#[post("/analyze")]
pub async fn analyze(
    engine: web::Data<TrustLensEngine>,
    request: web::Json<AnalysisRequest>,
) -> impl Responder {
    let result = engine
        .analyze(&request.content, &request.content_type)
        .await;

    HttpResponse::Ok().json(result)
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(analyze);
}
