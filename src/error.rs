//! Application error type and its HTTP representation.
//!
//! Every error is rendered as:
//!
//! ```json
//! { "error": { "code": "validation_error", "message": "...", "details": {} } }
//! ```

use axum::{
    Json,
    extract::rejection::FormRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::utils::codec::InvalidCode;
use crate::utils::url_normalizer::UrlValidationError;

/// PostgreSQL `string_data_right_truncation`, raised when a value exceeds a
/// `VARCHAR(n)` column.
const PG_STRING_TRUNCATION: &str = "22001";

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error payload.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },
    #[error("{message}")]
    NotFound { message: String, details: Value },
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Validation { .. } => (StatusCode::BAD_REQUEST, "validation_error"),
            AppError::NotFound { .. } => (StatusCode::NOT_FOUND, "not_found"),
            AppError::Internal { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        }
    }

    /// Converts the error into its JSON payload.
    pub fn into_error_info(self) -> ErrorInfo {
        let (_, code) = self.status_and_code();
        let (message, details) = match self {
            AppError::Validation { message, details }
            | AppError::NotFound { message, details }
            | AppError::Internal { message, details } => (message, details),
        };

        ErrorInfo {
            code,
            message,
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, _) = self.status_and_code();
        let body = ErrorBody {
            error: self.into_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<UrlValidationError> for AppError {
    fn from(e: UrlValidationError) -> Self {
        let details = match &e {
            UrlValidationError::Required => json!({}),
            UrlValidationError::UnsupportedScheme { scheme } => json!({ "scheme": scheme }),
            UrlValidationError::Malformed { reason } => json!({ "reason": reason }),
        };

        AppError::bad_request(e.to_string(), details)
    }
}

/// A malformed code is reported exactly like an unknown one.
impl From<InvalidCode> for AppError {
    fn from(e: InvalidCode) -> Self {
        AppError::not_found("Short link not found", json!({ "reason": e.to_string() }))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        AppError::bad_request(
            "Request validation failed",
            serde_json::to_value(&e).unwrap_or_default(),
        )
    }
}

/// A missing or unreadable form body counts as a missing field.
impl From<FormRejection> for AppError {
    fn from(e: FormRejection) -> Self {
        AppError::bad_request(
            "Request validation failed",
            json!({ "reason": e.body_text() }),
        )
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.code().as_deref() == Some(PG_STRING_TRUNCATION)
        {
            return AppError::bad_request(
                "URL is too long",
                json!({ "max_length": crate::domain::entities::MAX_URL_LENGTH }),
            );
        }

        tracing::error!("Database error: {}", e);
        AppError::internal("Database error", json!({}))
    }
}
