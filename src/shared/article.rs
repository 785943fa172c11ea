/**
 * Article Data Structures
 *
 * This module defines the article entity and the payloads exchanged with
 * clients over the `/api/articles` endpoints.
 *
 * The entity is the row type stored in the `articles` table. Request types
 * carry only what a client may set (title and content); the id and
 * timestamps are always assigned by the server.
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;

/// A blog article as stored in the database
///
/// # Example
/// ```rust
/// use blogpress::shared::{Article, ArticleResponse};
/// use chrono::Utc;
///
/// let article = Article {
///     id: 1,
///     title: "Hello".to_string(),
///     content: "First post".to_string(),
///     created_at: Utc::now(),
///     updated_at: Utc::now(),
/// };
/// let response = ArticleResponse::from(article);
/// assert_eq!(response.title, "Hello");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, sqlx::FromRow)]
pub struct Article {
    /// Database-assigned identifier
    pub id: i64,
    /// Article title
    pub title: String,
    /// Article body
    pub content: String,
    /// When the article was first saved
    pub created_at: DateTime<Utc>,
    /// When the title or content last changed
    pub updated_at: DateTime<Utc>,
}

/// Body of `POST /api/articles`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddArticleRequest {
    pub title: String,
    pub content: String,
}

impl AddArticleRequest {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Check that both fields carry text
    pub fn validate(&self) -> Result<(), SharedError> {
        validate_fields(&self.title, &self.content)
    }
}

/// Body of `PUT /api/articles/{id}`
///
/// Both fields are replaced; there is no partial update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateArticleRequest {
    pub title: String,
    pub content: String,
}

impl UpdateArticleRequest {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Check that both fields carry text
    pub fn validate(&self) -> Result<(), SharedError> {
        validate_fields(&self.title, &self.content)
    }
}

/// Article view returned by the read endpoints
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArticleResponse {
    pub id: i64,
    pub title: String,
    pub content: String,
}

impl From<Article> for ArticleResponse {
    fn from(article: Article) -> Self {
        Self {
            id: article.id,
            title: article.title,
            content: article.content,
        }
    }
}

fn validate_fields(title: &str, content: &str) -> Result<(), SharedError> {
    if title.trim().is_empty() {
        return Err(SharedError::validation("title", "Title must not be empty"));
    }
    if content.trim().is_empty() {
        return Err(SharedError::validation("content", "Content must not be empty"));
    }
    Ok(())
}
