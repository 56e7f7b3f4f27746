use crate::models::hello::HelloResponse;
use crate::models::status::StatusResponse;
use crate::services::StatusAggregator;
use actix_web::{HttpResponse, Responder, get, web};

/// # Greeting Endpoint
///
/// - **200 OK**: `{"message": "Hello from PackPixie API!"}`
#[utoipa::path(
    get,
    path = "/api/hello",
    responses(
        (status = 200, description = "Fixed greeting", body = HelloResponse)
    ),
    tag = "API"
)]
#[get("/hello")]
pub async fn hello() -> impl Responder {
    HttpResponse::Ok().json(HelloResponse::default())
}

/// # Status Endpoint
///
/// Reports the running version, a fresh timestamp and connectivity of the
/// configured DynamoDB table. Always answers 200: data-store faults are
/// reported inside the `database` block.
///
/// ## Example Response
///
/// ```json
/// {
///   "status": "running",
///   "version": "1.0.0",
///   "timestamp": "2024-03-10T15:30:45.123Z",
///   "database": { "status": "connected" }
/// }
/// ```
#[utoipa::path(
    get,
    path = "/api/status",
    responses(
        (status = 200, description = "Service status report", body = StatusResponse)
    ),
    tag = "API"
)]
#[get("/status")]
pub async fn status(aggregator: web::Data<StatusAggregator>) -> impl Responder {
    HttpResponse::Ok().json(aggregator.get_status().await)
}

/// Registers the REST endpoints mounted under `/api`.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(hello).service(status);
}
