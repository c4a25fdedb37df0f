//! Error handling module
//!
//! Centralized error types and HTTP response conversion.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Application-wide Result type
pub type AppResult<T> = Result<T, AppError>;

/// Application error types
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Client errors (4xx)
    #[error("Invalid request: {0}")]
    Validation(String),

    #[error(transparent)]
    Amount(#[from] crate::domain::AmountError),

    #[error("Invalid balance operation: {0}")]
    InvalidBalanceOperation(String),

    #[error("Missing bearer token")]
    MissingBearerToken,

    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Access denied")]
    AccessDenied,

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Account not found: {0}")]
    AccountNotFound(String),

    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    #[error("Transaction not found: {0}")]
    TransactionNotFound(String),

    #[error("Name already in use: {0}")]
    DuplicateName(String),

    #[error("Email already registered")]
    EmailTaken,

    // Server errors (5xx)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub error_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_code, details) = match &self {
            // 400 Bad Request
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, "validation_error", Some(msg.clone()))
            }
            AppError::Amount(e) => {
                (StatusCode::BAD_REQUEST, "invalid_amount", Some(e.to_string()))
            }
            AppError::InvalidBalanceOperation(msg) => {
                (StatusCode::BAD_REQUEST, "invalid_balance_operation", Some(msg.clone()))
            }

            // 401 Unauthorized
            AppError::MissingBearerToken => {
                (StatusCode::UNAUTHORIZED, "missing_bearer_token", None)
            }
            AppError::InvalidToken => {
                (StatusCode::UNAUTHORIZED, "invalid_token", None)
            }
            AppError::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, "invalid_credentials", None)
            }

            // 403 Forbidden
            AppError::AccessDenied => {
                (StatusCode::FORBIDDEN, "access_denied", None)
            }

            // 404 Not Found
            AppError::UserNotFound(id) => {
                (StatusCode::NOT_FOUND, "user_not_found", Some(id.clone()))
            }
            AppError::AccountNotFound(id) => {
                (StatusCode::NOT_FOUND, "account_not_found", Some(id.clone()))
            }
            AppError::CategoryNotFound(id) => {
                (StatusCode::NOT_FOUND, "category_not_found", Some(id.clone()))
            }
            AppError::TransactionNotFound(id) => {
                (StatusCode::NOT_FOUND, "transaction_not_found", Some(id.clone()))
            }

            // 409 Conflict
            AppError::DuplicateName(name) => {
                (StatusCode::CONFLICT, "duplicate_name", Some(name.clone()))
            }
            AppError::EmailTaken => {
                (StatusCode::CONFLICT, "email_taken", None)
            }

            // 500 Internal Server Error
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "database_error", None)
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", None)
            }
            AppError::Config(e) => {
                tracing::error!("Config error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "config_error", None)
            }
        };

        let body = ErrorResponse {
            error: self.to_string(),
            error_code: error_code.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}
