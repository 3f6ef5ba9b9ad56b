//! Request-level errors.
//!
//! The only failures a request can hit are body rejections raised by the
//! `web::Json` extractor. [`json_config`] routes every such rejection through
//! [`ApiError`], which renders a structured 422 body listing what was wrong.

use crate::middleware::RequestId;
use actix_web::error::JsonPayloadError;
use actix_web::http::StatusCode;
use actix_web::{HttpMessage, HttpRequest, HttpResponse, ResponseError, web};
use serde::{Deserialize, Serialize};
use serde_json::error::Category;
use utoipa::ToSchema;

/// One problem found in a request body.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ValidationErrorDetail {
    /// Path to the offending value, starting at `"body"`
    #[schema(example = json!(["body", "name"]))]
    pub loc: Vec<String>,
    #[schema(example = "Field required")]
    pub msg: String,
    /// Machine-readable error kind, e.g. `missing` or `json_invalid`
    #[serde(rename = "type")]
    #[schema(example = "missing")]
    pub kind: String,
}

impl ValidationErrorDetail {
    fn body(kind: &str, msg: impl Into<String>) -> Self {
        Self {
            loc: vec!["body".to_string()],
            msg: msg.into(),
            kind: kind.to_string(),
        }
    }

    fn field(field: &str, kind: &str, msg: impl Into<String>) -> Self {
        Self {
            loc: vec!["body".to_string(), field.to_string()],
            msg: msg.into(),
            kind: kind.to_string(),
        }
    }
}

/// Body of a 422 response.
#[derive(Serialize, Deserialize, Debug, PartialEq, ToSchema)]
pub struct ValidationErrorResponse {
    pub detail: Vec<ValidationErrorDetail>,
}

/// Body of non-validation error responses.
#[derive(Serialize, Deserialize, Debug, PartialEq, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "PAYLOAD_TOO_LARGE")]
    pub error: String,
    pub detail: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request body failed validation")]
    Validation(Vec<ValidationErrorDetail>),

    #[error("request body exceeds the {limit} byte limit")]
    PayloadTooLarge { limit: usize },
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::Validation(detail) => {
                HttpResponse::build(self.status_code()).json(ValidationErrorResponse {
                    detail: detail.clone(),
                })
            }
            ApiError::PayloadTooLarge { .. } => {
                HttpResponse::build(self.status_code()).json(ErrorResponse {
                    error: "PAYLOAD_TOO_LARGE".to_string(),
                    detail: self.to_string(),
                })
            }
        }
    }
}

impl From<JsonPayloadError> for ApiError {
    fn from(err: JsonPayloadError) -> Self {
        let detail = match err {
            JsonPayloadError::OverflowKnownLength { limit, .. }
            | JsonPayloadError::Overflow { limit } => {
                return ApiError::PayloadTooLarge { limit };
            }
            JsonPayloadError::ContentType => ValidationErrorDetail::body(
                "content_type",
                "Expected a request body with Content-Type: application/json",
            ),
            JsonPayloadError::Deserialize(e) => deserialize_detail(&e),
            JsonPayloadError::Payload(e) => ValidationErrorDetail::body("payload", e.to_string()),
            other => ValidationErrorDetail::body("json_invalid", other.to_string()),
        };
        ApiError::Validation(vec![detail])
    }
}

fn deserialize_detail(err: &serde_json::Error) -> ValidationErrorDetail {
    match err.classify() {
        Category::Data => match missing_field(err) {
            Some(field) => ValidationErrorDetail::field(&field, "missing", "Field required"),
            None => ValidationErrorDetail::body("value_error", err.to_string()),
        },
        Category::Syntax | Category::Eof | Category::Io => {
            ValidationErrorDetail::body("json_invalid", format!("JSON decode error: {err}"))
        }
    }
}

/// Extracts `name` from serde's "missing field `name` at line .." message.
/// serde_json exposes no structured form of this error; the wording is
/// pinned by `test_serde_missing_field_message_format`.
fn missing_field(err: &serde_json::Error) -> Option<String> {
    let message = err.to_string();
    let rest = message.strip_prefix("missing field `")?;
    let end = rest.find('`')?;
    Some(rest[..end].to_string())
}

/// Largest accepted JSON body, matching the actix default of 2 MiB.
pub const JSON_LIMIT_BYTES: usize = 2 * 1024 * 1024;

/// JSON extractor configuration that reports body rejections as [`ApiError`].
pub fn json_config() -> web::JsonConfig {
    json_config_with_limit(JSON_LIMIT_BYTES)
}

pub fn json_config_with_limit(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(json_error_handler)
}

fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    let err = ApiError::from(err);
    let request_id = req
        .extensions()
        .get::<RequestId>()
        .map(|id| id.0.to_string())
        .unwrap_or_default();
    tracing::debug!(
        request_id = %request_id,
        path = %req.path(),
        error = ?err,
        "Rejected request body"
    );
    err.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    fn deserialize_error(input: &str) -> JsonPayloadError {
        #[derive(Deserialize, Debug)]
        #[allow(dead_code)]
        struct Named {
            name: String,
        }
        JsonPayloadError::Deserialize(serde_json::from_str::<Named>(input).unwrap_err())
    }

    fn only_detail(err: ApiError) -> ValidationErrorDetail {
        match err {
            ApiError::Validation(mut detail) => {
                assert_eq!(detail.len(), 1);
                detail.remove(0)
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_field_points_at_field() {
        let detail = only_detail(ApiError::from(deserialize_error("{}")));

        assert_eq!(detail.loc, vec!["body", "name"]);
        assert_eq!(detail.kind, "missing");
        assert_eq!(detail.msg, "Field required");
    }

    #[test]
    fn test_serde_missing_field_message_format() {
        #[derive(Deserialize, Debug)]
        #[allow(dead_code)]
        struct Named {
            name: String,
        }
        let err = serde_json::from_str::<Named>("{}").unwrap_err();

        assert!(
            err.to_string().starts_with("missing field `name`"),
            "serde_json wording changed: {err}"
        );
        assert_eq!(missing_field(&err).as_deref(), Some("name"));
    }

    #[test]
    fn test_wrong_type_is_value_error() {
        let detail = only_detail(ApiError::from(deserialize_error(r#"{"name": 7}"#)));

        assert_eq!(detail.loc, vec!["body"]);
        assert_eq!(detail.kind, "value_error");
        assert!(detail.msg.contains("invalid type"));
    }

    #[test]
    fn test_malformed_and_empty_json_are_json_invalid() {
        for input in ["not json", "", "{\"name\": "] {
            let detail = only_detail(ApiError::from(deserialize_error(input)));
            assert_eq!(detail.kind, "json_invalid", "input: {input:?}");
            assert_eq!(detail.loc, vec!["body"]);
        }
    }

    #[test]
    fn test_content_type_rejection() {
        let detail = only_detail(ApiError::from(JsonPayloadError::ContentType));
        assert_eq!(detail.kind, "content_type");
    }

    #[test]
    fn test_overflow_is_payload_too_large() {
        let err = ApiError::from(JsonPayloadError::Overflow { limit: 16 });

        assert!(matches!(err, ApiError::PayloadTooLarge { limit: 16 }));
        assert_eq!(err.status_code(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[actix_web::test]
    async fn test_validation_error_response_body() {
        let err = ApiError::from(deserialize_error("{}"));
        let resp = err.error_response();

        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = to_bytes(resp.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["detail"][0]["loc"], serde_json::json!(["body", "name"]));
        assert_eq!(json["detail"][0]["type"], "missing");
    }

    #[actix_web::test]
    async fn test_payload_too_large_response_body() {
        let resp = ApiError::PayloadTooLarge { limit: 1024 }.error_response();

        assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);

        let body = to_bytes(resp.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "PAYLOAD_TOO_LARGE");
        assert!(json["detail"].as_str().unwrap().contains("1024"));
    }
}
