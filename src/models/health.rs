use super::utc_timestamp;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// # Health Status Response
///
/// Represents the operational status of the service with a timestamp.
///
/// ## Example JSON
/// ```json
/// {
///   "status": "healthy",
///   "timestamp": "2024-03-10T15:30:45.123456+00:00"
/// }
/// ```
#[derive(Serialize, Deserialize, Debug, PartialEq, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "healthy")]
    pub status: String,
    /// ISO 8601 UTC timestamp of the check
    #[schema(example = "2024-03-10T15:30:45.123456+00:00")]
    pub timestamp: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: utc_timestamp(),
        }
    }
}
