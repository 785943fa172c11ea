/**
 * Backend Error Types
 *
 * This module defines the error type returned by every HTTP handler and
 * service function in the backend.
 *
 * # Error Categories
 *
 * ## Handler Errors
 *
 * Carry an explicit status code: missing or malformed credentials,
 * duplicate registrations, rejected refresh tokens.
 *
 * ## Not Found
 *
 * A requested row does not exist (article, user).
 *
 * ## Wrapped Errors
 *
 * Validation errors from the shared module, database errors, token
 * decoding errors and password hashing errors convert with `?`.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::SharedError;

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use blogpress::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::handler(StatusCode::CONFLICT, "Email already registered");
/// assert_eq!(err.status_code(), StatusCode::CONFLICT);
///
/// let err = BackendError::not_found("not found: 42");
/// assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Handler error with an explicit status (e.g. 401, 409)
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// The requested row does not exist
    #[error("{message}")]
    NotFound {
        /// Human-readable error message
        message: String,
    },

    /// Payload validation failure
    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// JWT encoding or decoding error
    #[error("Token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    /// Password hashing error
    #[error("Password hashing error: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// Shorthand for a 401 handler error
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::UNAUTHORIZED, message)
    }

    /// Create a new not-found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `HandlerError` - Uses the status code from the error
    /// - `NotFound` - 404 Not Found
    /// - `SharedError` - 400 Bad Request
    /// - `Database` - 500 Internal Server Error
    /// - `Token` - 401 Unauthorized
    /// - `PasswordHash` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::SharedError(SharedError::ValidationError { .. }) => StatusCode::BAD_REQUEST,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Token(_) => StatusCode::UNAUTHORIZED,
            Self::PasswordHash(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the message sent to the client
    ///
    /// Internal failures get a generic message; their details only go to the log.
    pub fn message(&self) -> String {
        match self {
            Self::HandlerError { message, .. } => message.clone(),
            Self::NotFound { message } => message.clone(),
            Self::SharedError(err) => err.to_string(),
            Self::Token(_) => "Invalid token".to_string(),
            Self::Database(_) | Self::PasswordHash(_) => "Internal server error".to_string(),
        }
    }
}
