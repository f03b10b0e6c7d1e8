//! Mapping of gateway failures to HTTP responses.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::dto::ErrorBody;
use crate::error::GatewayError;

/// Status code for a gateway failure. Each variant maps to exactly one code.
#[must_use]
pub fn status_for(error: &GatewayError) -> StatusCode {
    match error {
        GatewayError::DependencyUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
        GatewayError::Provider { .. }
        | GatewayError::Decode(_)
        | GatewayError::ResponseShape(_) => StatusCode::BAD_GATEWAY,
        GatewayError::Transport { timed_out: true, .. } => StatusCode::GATEWAY_TIMEOUT,
        GatewayError::Transport { .. } => StatusCode::BAD_GATEWAY,
        GatewayError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
    }
}

/// An error response with a `{detail, kind}` body.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    detail: String,
    kind: Option<&'static str>,
}

impl ApiError {
    /// Wrap a gateway failure, prefixing `detail` with the operation context.
    #[must_use]
    pub fn gateway(context: &str, error: &GatewayError) -> Self {
        let detail = if context.is_empty() {
            error.to_string()
        } else {
            format!("{context}: {error}")
        };
        Self {
            status: status_for(error),
            detail,
            kind: Some(error.kind()),
        }
    }

    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    #[must_use]
    pub fn detail(&self) -> &str {
        &self.detail
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self {
            status: rejection.status(),
            detail: rejection.body_text(),
            kind: Some("validation_error"),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self {
            status: rejection.status(),
            detail: rejection.body_text(),
            kind: Some("validation_error"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            detail: self.detail,
            kind: self.kind,
        };
        (self.status, Json(body)).into_response()
    }
}
