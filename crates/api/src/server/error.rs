//! Domain-error-to-HTTP-response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

use common::protocol::{ErrorResponse, InternalErrorResponse};
use common::ServiceError;

/// Wrapper that lets handlers return [`ServiceError`] with `?`.
///
/// Every variant maps to a fixed status code and wire body in one place.
/// Internal detail is logged here and never leaves the process.
#[derive(Debug)]
pub struct ApiError(pub ServiceError);

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        match self.0 {
            ServiceError::Internal(detail) => {
                error!(error = %detail, "handler failed");
                (status, Json(InternalErrorResponse::new())).into_response()
            }
            err => (status, Json(ErrorResponse::new(err.to_string()))).into_response(),
        }
    }
}
