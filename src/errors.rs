use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    InvalidQueryParameter(String),

    #[error("{0}")]
    Validation(String),

    #[error("Access denied, no token provided.")]
    Unauthorized,

    #[error("Invalid token.")]
    InvalidToken,

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("Database error: {0}")]
    Store(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<rusqlite::Error> for AppError {
    fn from(err: rusqlite::Error) -> Self {
        match err.sqlite_error_code() {
            // Constraint violations (duplicate email, dangling foreign key)
            // are caller mistakes, not store failures.
            Some(rusqlite::ErrorCode::ConstraintViolation) => {
                AppError::Validation(err.to_string())
            }
            _ => AppError::Store(err.to_string()),
        }
    }
}

impl From<r2d2::Error> for AppError {
    fn from(err: r2d2::Error) -> Self {
        AppError::Store(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        // Choose status codes per variant
        let status = match self {
            AppError::InvalidQueryParameter(_) => StatusCode::BAD_REQUEST,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            // The original auth middleware answered malformed tokens with 400
            AppError::InvalidToken => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!("request failed: {self}");
        }

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}
