use actix_web::web;

/// # Health Check Endpoint
///
/// `GET /health`, mounted at the root so probes do not depend on the API prefix.
pub mod health;

/// # Greeting Endpoints
///
/// `GET /api/hello` returns a fixed greeting, `POST /api/hello` greets the
/// `name` supplied in the JSON body.
pub mod hello;

/// # Version Endpoint
///
/// `GET /api/version` reports the crate version and configured environment.
pub mod version;


/// # Route Configuration
///
/// ## Mounted Services
/// - Health check at the root
/// - Version and greeting endpoints under `/api`
///
/// ```text
/// GET  /health      - Service health status
/// GET  /api/version - Version information
/// GET  /api/hello   - Hello World
/// POST /api/hello   - Personalized greeting
/// ```
///
/// Handlers under `/api/version` expect `web::Data<Settings>` to be registered.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure_routes).service(
        web::scope("/api")
            .configure(version::configure_routes)
            .configure(hello::configure_routes),
    );
}
