use actix_web::web;

pub mod config;
pub mod cors;
pub mod error;
pub mod middleware;
pub mod models;
pub mod openapi;
pub mod routes;


use config::Settings;

/// Registers everything the application serves: shared settings, the JSON
/// extractor configuration, the API routes and the documentation routes.
///
/// CORS and request tracing wrap the whole `App` and are applied by the
/// caller, see `main`.
pub fn configure(settings: Settings) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(web::Data::new(settings))
            .app_data(error::json_config())
            .configure(routes::configure)
            .configure(openapi::configure_docs);
    }
}
