//! API error types and responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use paysub_client::ClientError;
use paysub_core::ValidationError;
use paysub_store::StoreError;

/// API error type.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Bad request - invalid input.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Resource not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// The processor credential is not configured; no call was attempted.
    #[error("payment processor is not configured")]
    NotConfigured,

    /// The processor responded but rejected the request.
    #[error("upstream rejected: {message}")]
    UpstreamRejected {
        /// Upstream HTTP status.
        status: u16,
        /// Processor-supplied message.
        message: String,
        /// Processor-defined error code, if present.
        code: Option<String>,
    },

    /// The processor could not be reached.
    #[error("upstream unreachable: {0}")]
    UpstreamUnreachable(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

/// JSON error response body.
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match &self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg.clone(), None),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg.clone(), None),
            Self::NotConfigured => (
                StatusCode::SERVICE_UNAVAILABLE,
                "not_configured",
                self.to_string(),
                None,
            ),
            Self::UpstreamRejected {
                status,
                message,
                code,
            } => (
                StatusCode::BAD_GATEWAY,
                "upstream_rejected",
                message.clone(),
                Some(serde_json::json!({
                    "upstream_status": status,
                    "upstream_code": code,
                })),
            ),
            Self::UpstreamUnreachable(msg) => (
                StatusCode::BAD_GATEWAY,
                "upstream_unreachable",
                msg.clone(),
                None,
            ),
            Self::Internal(msg) => {
                tracing::error!(error = %msg, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                    None,
                )
            }
        };

        let body = ErrorResponse {
            error: ErrorBody {
                code: code.to_string(),
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::BadRequest(err.to_string())
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => Self::NotFound("record not found".into()),
            StoreError::Database(msg) | StoreError::Serialization(msg) => Self::Internal(msg),
        }
    }
}

impl From<ClientError> for ApiError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Configuration(_) => Self::NotConfigured,
            ClientError::Api {
                status,
                message,
                code,
            } => Self::UpstreamRejected {
                status,
                message,
                code,
            },
            ClientError::Http(e) => Self::UpstreamUnreachable(e.to_string()),
        }
    }
}
