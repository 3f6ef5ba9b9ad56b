use chrono::{SecondsFormat, Utc};

/// # Health Status Response
///
/// Returned by `GET /health`. `status` is always `"healthy"` while the
/// process is serving requests.
pub mod health;

/// # Greeting Models
///
/// Request and response bodies for `GET /api/hello` and `POST /api/hello`.
pub mod hello;

/// # Version Information
///
/// Returned by `GET /api/version`.
pub mod version;

pub use health::HealthResponse;
pub use hello::{HelloRequest, HelloResponse};
pub use version::VersionResponse;

/// Current UTC time as an ISO 8601 string with microsecond precision and an
/// explicit `+00:00` offset, e.g. `2024-03-10T15:30:45.123456+00:00`.
pub fn utc_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration};

    #[test]
    fn test_utc_timestamp_is_rfc3339_utc() {
        let timestamp = utc_timestamp();

        let parsed = DateTime::parse_from_rfc3339(&timestamp)
            .expect("Timestamp should be valid RFC3339 format");
        assert_eq!(parsed.offset().local_minus_utc(), 0);
        assert!(timestamp.ends_with("+00:00"));

        let drift = Utc::now().signed_duration_since(parsed);
        assert!(drift < Duration::seconds(5));
    }
}
