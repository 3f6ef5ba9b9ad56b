use crate::models::HealthResponse;
use actix_web::{HttpResponse, Responder, get};

/// # Health Check Endpoint
///
/// Returns the current health status of the service along with a timestamp.
/// Polled by load balancers, deployment checks and production monitoring.
///
/// ## Response
///
/// - **200 OK**: Service is healthy
///   - Body: JSON object with `status` ("healthy") and `timestamp` in ISO 8601 format
///
/// ## Example Response
///
/// ```json
/// {
///   "status": "healthy",
///   "timestamp": "2024-03-10T15:30:45.123456+00:00"
/// }
/// ```
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "System"
)]
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse::healthy())
}

/// Registers `GET /health`.
pub fn configure_routes(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(health);
}
