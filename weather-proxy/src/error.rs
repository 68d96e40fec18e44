//! Error types for the proxy's HTTP layer.
//!
//! [`ApiError`] is what a request can end in besides a report. It turns
//! into a `{"detail": ...}` JSON response via [`IntoResponse`].

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use weather_core::ProviderError;

/// Detail returned whenever the provider could not be reached.
pub const UNAVAILABLE_DETAIL: &str = "Weather service unavailable";

/// Detail returned when the provider answered with an unusable body.
pub const BAD_GATEWAY_DETAIL: &str = "Unexpected response from weather service";

/// A single rejected query parameter, in the usual validation-error layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub loc: Vec<String>,
    pub msg: String,
    pub input: Option<String>,
}

impl FieldError {
    pub fn query(
        field: &str,
        kind: &'static str,
        msg: impl Into<String>,
        input: Option<String>,
    ) -> Self {
        Self {
            kind,
            loc: vec!["query".to_string(), field.to_string()],
            msg: msg.into(),
            input,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Query parameters failed validation; nothing was sent upstream.
    #[error("invalid query parameters")]
    Validation(Vec<FieldError>),

    /// The provider rejected the lookup; its status is passed through.
    #[error("upstream returned {status}: {message}")]
    Upstream { status: u16, message: String },

    /// The provider could not be reached.
    #[error("weather service unavailable: {0}")]
    Unavailable(String),

    /// The provider answered 200 with a body we cannot read.
    #[error("bad gateway: {0}")]
    BadGateway(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<ProviderError> for ApiError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::Transport(msg) => Self::Unavailable(msg),
            ProviderError::Rejected { status, message } => Self::Upstream { status, message },
            ProviderError::UnexpectedShape(msg) => Self::BadGateway(msg),
            ProviderError::Client(msg) => Self::Internal(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(serde_json::json!({ "detail": errors })),
            )
                .into_response(),
            Self::Upstream { status, message } => {
                let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
                detail(status, &message)
            }
            Self::Unavailable(_) => detail(StatusCode::SERVICE_UNAVAILABLE, UNAVAILABLE_DETAIL),
            Self::BadGateway(_) => detail(StatusCode::BAD_GATEWAY, BAD_GATEWAY_DETAIL),
            Self::Internal(_) => {
                detail(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        }
    }
}

fn detail(status: StatusCode, message: &str) -> Response {
    (status, Json(serde_json::json!({ "detail": message }))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_errors_map_to_api_errors() {
        let err: ApiError = ProviderError::Transport("refused".into()).into();
        assert!(matches!(err, ApiError::Unavailable(_)));

        let err: ApiError =
            ProviderError::Rejected { status: 404, message: "city not found".into() }.into();
        assert!(matches!(err, ApiError::Upstream { status: 404, .. }));

        let err: ApiError = ProviderError::UnexpectedShape("empty".into()).into();
        assert!(matches!(err, ApiError::BadGateway(_)));
    }

    #[test]
    fn status_codes() {
        let cases = [
            (ApiError::Validation(vec![]), StatusCode::UNPROCESSABLE_ENTITY),
            (
                ApiError::Upstream { status: 401, message: "Invalid API key".into() },
                StatusCode::UNAUTHORIZED,
            ),
            (ApiError::Unavailable("timeout".into()), StatusCode::SERVICE_UNAVAILABLE),
            (ApiError::BadGateway("bad".into()), StatusCode::BAD_GATEWAY),
            (ApiError::Internal("boom".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }

    #[test]
    fn unrepresentable_upstream_status_becomes_bad_gateway() {
        let err = ApiError::Upstream { status: 42, message: "weird".into() };
        assert_eq!(err.into_response().status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn field_error_serializes_type_and_loc() {
        let err = FieldError::query("location", "missing", "Field required", None);
        let json = serde_json::to_value(&err).unwrap();

        assert_eq!(json["type"], "missing");
        assert_eq!(json["loc"], serde_json::json!(["query", "location"]));
        assert_eq!(json["msg"], "Field required");
        assert!(json["input"].is_null());
    }
}
