use crate::config::Settings;
use crate::models::VersionResponse;
use actix_web::{HttpResponse, Responder, get, web};

/// # API Version Endpoint
///
/// Reports the crate version, the API name and the deployment environment
/// the process was configured with. Useful for deployment verification and
/// client compatibility checks.
#[utoipa::path(
    get,
    path = "/api/version",
    responses(
        (status = 200, description = "Version information", body = VersionResponse)
    ),
    tag = "System"
)]
#[get("/version")]
pub async fn version(settings: web::Data<Settings>) -> impl Responder {
    HttpResponse::Ok().json(VersionResponse::for_environment(&settings.environment))
}

/// Registers `GET /version` relative to the enclosing scope.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(version);
}
