use actix_web::web;
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

/// Path the generated OpenAPI document is served from.
pub const OPENAPI_PATH: &str = "/openapi.json";

/// OpenAPI Specification Documentation
///
/// Generated at compile time from the `#[utoipa::path]` annotations on the
/// handlers and the `ToSchema` derives on the models. Title and description
/// are fixed here; the version comes from the crate metadata.
///
/// # Endpoints
/// - Health Check: `GET /health`
/// - Version: `GET /api/version`
/// - Greetings: `GET /api/hello`, `POST /api/hello`
///
/// # Tags
/// 1. **System**: Monitoring and deployment endpoints
/// 2. **Hello World**: Example greeting endpoints
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health::health,
        crate::routes::version::version,
        crate::routes::hello::hello_world,
        crate::routes::hello::hello_name,
    ),
    components(
        schemas(
            crate::models::HealthResponse,
            crate::models::VersionResponse,
            crate::models::HelloRequest,
            crate::models::HelloResponse,
            crate::error::ValidationErrorResponse,
            crate::error::ValidationErrorDetail,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "System", description = "Health and version endpoints for monitoring and deployment checks"),
        (name = "Hello World", description = "Example greeting endpoints")
    ),
    info(
        title = "Software Factory API",
        description = "Backend API for the Software Factory",
    )
)]
pub struct ApiDoc;

/// # Documentation Routes
///
/// - `GET /openapi.json`: machine-readable schema
/// - `GET /docs/`: Swagger UI (`/docs` redirects here)
/// - `GET /redoc`: ReDoc
pub fn configure_docs(cfg: &mut web::ServiceConfig) {
    let openapi = ApiDoc::openapi();

    cfg.service(web::redirect("/docs", "/docs/"))
        .service(SwaggerUi::new("/docs/{_:.*}").url(OPENAPI_PATH, openapi.clone()))
        .service(Redoc::with_url("/redoc", openapi));
}
