//! Error types for the status API service.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use hypr_auth_core::StatusError;
use hypr_types::ErrorResponse;

/// API error type
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Status(#[from] StatusError),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Status(err) => StatusCode::from_u16(err.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let Self::Status(err) = &self;

        if status.is_server_error() {
            tracing::error!(error = %err, code = err.error_code(), "Status request failed");
        } else {
            tracing::debug!(error = %err, code = err.error_code(), "Status request rejected");
        }

        let body = ErrorResponse::new(err.error_code(), err.message());
        (status, Json(body)).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
