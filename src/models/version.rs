use crate::config::{API_NAME, API_VERSION};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Version information for deployment verification and client
/// compatibility checks.
#[derive(Serialize, Deserialize, Debug, PartialEq, ToSchema)]
pub struct VersionResponse {
    #[schema(example = "0.1.0")]
    pub version: String,
    #[schema(example = "software-factory-api")]
    pub name: String,
    /// Deployment environment the process was started with
    #[schema(example = "development")]
    pub environment: String,
}

impl VersionResponse {
    pub fn for_environment(environment: &str) -> Self {
        Self {
            version: API_VERSION.to_string(),
            name: API_NAME.to_string(),
            environment: environment.to_string(),
        }
    }
}
