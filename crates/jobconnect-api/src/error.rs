//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use jobconnect_core::error::{AppError, ErrorKind};

/// HTTP-layer wrapper around [`AppError`].
///
/// Handlers return this type; `?` converts from `AppError` automatically.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let (status, error_code) = match &err.kind {
            ErrorKind::Validation => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            ErrorKind::Authentication => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
            ErrorKind::Authorization => (StatusCode::FORBIDDEN, "FORBIDDEN"),
            ErrorKind::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ErrorKind::Conflict => (StatusCode::CONFLICT, "CONFLICT"),
            _ => {
                tracing::error!(error = %err.message, kind = %err.kind, "Internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
            }
        };

        // Internal error details stay in the log, not the response body.
        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            "An internal error occurred".to_string()
        } else {
            err.message
        };

        let body = ApiErrorResponse {
            error: error_code.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}
