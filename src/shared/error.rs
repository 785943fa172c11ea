//! Shared Error Types
//!
//! This module defines error types that are shared between the server and
//! any client of the article API. They describe payloads that are malformed
//! independently of storage or authentication.
//!
//! # Usage
//!
//! ```rust
//! use blogpress::shared::error::SharedError;
//!
//! let error = SharedError::validation("title", "Title must not be empty");
//! assert!(error.to_string().contains("title"));
//! ```
use thiserror::Error;

/// Errors that can be detected without touching the server
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}
