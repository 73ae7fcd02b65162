use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use videohub_core::error::CoreError;

use crate::response::{
    ServerErrorResponse, ValidationErrorResponse, INTERNAL_SERVER_ERROR_MESSAGE,
};

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] so handlers can return it with `?`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `videohub_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The request body was not valid JSON (or had the wrong content type).
    #[error("Malformed request body: {0}")]
    MalformedBody(#[from] JsonRejection),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Core(CoreError::Validation(errors)) => (
                StatusCode::BAD_REQUEST,
                Json(ValidationErrorResponse {
                    errors_messages: errors,
                }),
            )
                .into_response(),
            AppError::Core(CoreError::NotFound { .. }) => StatusCode::NOT_FOUND.into_response(),
            AppError::Core(CoreError::Internal(msg)) => {
                tracing::error!(error = %msg, "Internal error");
                internal_error_response()
            }
            AppError::MalformedBody(rejection) => {
                tracing::debug!(error = %rejection, "Rejected request body");
                rejection.into_response()
            }
        }
    }
}

/// The generic 500 response; details stay in the logs.
pub fn internal_error_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ServerErrorResponse {
            error: INTERNAL_SERVER_ERROR_MESSAGE,
        }),
    )
        .into_response()
}
