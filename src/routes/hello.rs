use crate::error::ValidationErrorResponse;
use crate::models::{HelloRequest, HelloResponse};
use actix_web::{HttpResponse, Responder, get, post, web};

/// # Hello World Endpoint
///
/// Returns a fixed greeting with the current timestamp.
#[utoipa::path(
    get,
    path = "/api/hello",
    responses(
        (status = 200, description = "Greeting", body = HelloResponse)
    ),
    tag = "Hello World"
)]
#[get("/hello")]
pub async fn hello_world() -> impl Responder {
    HttpResponse::Ok().json(HelloResponse::world())
}

/// # Personalized Greeting Endpoint
///
/// Greets the caller by the `name` given in the request body. The name is
/// embedded as-is; JSON serialization is the only escaping applied.
///
/// ## Responses
/// - **200 OK**: Greeting containing the name
/// - **422 Unprocessable Entity**: Body missing, not JSON, or without a string `name`
///
/// ## Example Request
/// ```json
/// { "name": "Alice" }
/// ```
#[utoipa::path(
    post,
    path = "/api/hello",
    request_body = HelloRequest,
    responses(
        (status = 200, description = "Personalized greeting", body = HelloResponse),
        (status = 422, description = "Invalid request body", body = ValidationErrorResponse)
    ),
    tag = "Hello World"
)]
#[post("/hello")]
pub async fn hello_name(req: web::Json<HelloRequest>) -> impl Responder {
    tracing::debug!(name_len = req.name.chars().count(), "Personalized greeting");
    HttpResponse::Ok().json(HelloResponse::greet(&req.name))
}

/// Registers both greeting routes relative to the enclosing scope.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(hello_world).service(hello_name);
}
