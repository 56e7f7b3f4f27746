use crate::models::health::HealthResponse;
use actix_web::{HttpResponse, Responder, get};

/// # Liveness Probe
///
/// Answers as long as the process is serving requests. Independent of the
/// data store; see `/api/status` for the dependency report.
///
/// ## Response
///
/// - **200 OK**: `{"status": "ok", "timestamp": "<ISO 8601>"}`
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is alive", body = HealthResponse)
    ),
    tag = "Health Check"
)]
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse::ok())
}

/// Registers `GET /health`.
pub fn configure_routes(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(health);
}
