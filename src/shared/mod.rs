//! Shared Module
//!
//! This module contains types and data structures that are shared between
//! the backend and API clients. They compile without the `ssr` feature so a
//! client crate can depend on the payload definitions alone.

/// Article entity and API payloads
pub mod article;

/// Shared error types
pub mod error;

/// Re-export commonly used types for convenience
pub use article::{AddArticleRequest, Article, ArticleResponse, UpdateArticleRequest};
pub use error::SharedError;
