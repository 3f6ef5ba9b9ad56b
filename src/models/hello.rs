use super::utc_timestamp;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

const WELCOME: &str = "Welcome to your Software Factory.";

/// Body of `POST /api/hello`. Fields other than `name` are ignored.
#[derive(Deserialize, Serialize, Debug, ToSchema)]
pub struct HelloRequest {
    /// Name to greet, embedded verbatim in the message
    #[schema(example = "Alice")]
    pub name: String,
}

/// # Greeting Response
///
/// ## Example JSON
/// ```json
/// {
///   "message": "Hello, Alice! Welcome to your Software Factory.",
///   "timestamp": "2024-03-10T15:30:45.123456+00:00"
/// }
/// ```
#[derive(Serialize, Deserialize, Debug, PartialEq, ToSchema)]
pub struct HelloResponse {
    #[schema(example = "Hello, World! Welcome to your Software Factory.")]
    pub message: String,
    #[schema(example = "2024-03-10T15:30:45.123456+00:00")]
    pub timestamp: String,
}

impl HelloResponse {
    pub fn world() -> Self {
        Self::greet("World")
    }

    pub fn greet(name: &str) -> Self {
        Self {
            message: format!("Hello, {name}! {WELCOME}"),
            timestamp: utc_timestamp(),
        }
    }
}
