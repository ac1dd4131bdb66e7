use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use trivia_core::error::CoreError;

use crate::response::ErrorBody;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce the `{success: false, message}`
/// envelope with one uniform message per status code.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `trivia_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A malformed request (bad JSON body, bad query string).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// A known route hit with an unsupported method.
    #[error("method not allowed")]
    MethodNotAllowed,

    /// An internal error with a human-readable message.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { .. } | CoreError::NoResults(_) => StatusCode::NOT_FOUND,
                CoreError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            },
            AppError::Database(err) => classify_sqlx_error(err),
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "internal error");
        } else {
            tracing::debug!(error = %self, status = %status, "request rejected");
        }

        // The wire contract uses one fixed message per status; error detail
        // stays in the logs.
        (status, Json(ErrorBody::for_status(status))).into_response()
    }
}

/// Classify a sqlx error into an HTTP status.
///
/// - `RowNotFound` maps to 404.
/// - Foreign key violations (Postgres code 23503, e.g. a question created
///   against a missing category) map to 422.
/// - Everything else maps to 500.
fn classify_sqlx_error(err: &sqlx::Error) -> StatusCode {
    match err {
        sqlx::Error::RowNotFound => StatusCode::NOT_FOUND,
        sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("23503") => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
