use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

use super::error_payload::ErrorPayload;

/// Application error types
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    /// A graph or uniqueness invariant would be violated (already following,
    /// duplicate email, ...).
    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("An error occurred while accessing the database")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Internal server error")]
    InternalServerError,
}

impl AppError {
    pub fn code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::BAD_REQUEST,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Store failures are logged in full here; the caller only ever sees
        // the generic message.
        if let AppError::DatabaseError(ref e) = self {
            error!("database error: {e}");
        }

        let status = self.code();
        let payload = ErrorPayload {
            message: self.to_string(),
            success: false,
        };

        (status, Json(payload)).into_response()
    }
}
