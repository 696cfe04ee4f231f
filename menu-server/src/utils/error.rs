//! Unified error handling
//!
//! [`AppError`] covers the whole request taxonomy. The `IntoResponse`
//! impl maps each variant to a status code and the `{ "error": ... }`
//! body the admin editor and display pages parse.
//!
//! | Variant | Status | Body |
//! |---------|--------|------|
//! | Unauthorized | 401 | `{"error":"Unauthorized"}` |
//! | InvalidJson | 400 | `{"error":"Invalid JSON"}` |
//! | Validation | 400 | `{"error":"<message>"}` |
//! | Invalid | 400 | `{"error":"<message>"}` |
//! | Database | 500 | `{"error":"Store unavailable"}` |
//! | Internal | 500 | `{"error":"Internal server error"}` |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

use crate::db::repository::RepoError;

/// Error body as served to clients
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Application error taxonomy
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Write attempted without a valid session (401)
    #[error("Unauthorized")]
    Unauthorized,

    /// Request body was not parseable JSON (400)
    #[error("Invalid JSON")]
    InvalidJson,

    /// Payload failed validation (400)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Bad request outside payload validation, e.g. login failure (400)
    #[error("Invalid request: {0}")]
    Invalid(String),

    /// Underlying document store unreachable or failing (500)
    #[error("Database error: {0}")]
    Database(String),

    /// Anything else (500)
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Unified login failure message, so usernames cannot be enumerated.
    pub fn invalid_credentials() -> Self {
        Self::Invalid("Invalid username or password".to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized".to_string()),
            AppError::InvalidJson => (StatusCode::BAD_REQUEST, "Invalid JSON".to_string()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Invalid(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Database(msg) => {
                error!(target: "database", error = %msg, "Store error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Store unavailable".to_string(),
                )
            }
            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Database(msg) => AppError::Database(msg),
        }
    }
}
