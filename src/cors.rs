//! Cross-origin policy.
//!
//! The configured origins may call any route with any method and header and
//! may send credentials. Other origins receive no CORS grant.

use actix_cors::Cors;

pub fn build_cors(origins: &[String]) -> Cors {
    origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
}
