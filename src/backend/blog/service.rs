//! Article Service
//!
//! The operations behind the article endpoints. Requests are validated here
//! and a missing row becomes a 404 `BackendError`.

use sqlx::SqlitePool;

use crate::backend::blog::repository;
use crate::backend::error::BackendError;
use crate::shared::{AddArticleRequest, Article, UpdateArticleRequest};

fn not_found(id: i64) -> BackendError {
    BackendError::not_found(format!("not found: {}", id))
}

pub async fn save(pool: &SqlitePool, request: AddArticleRequest) -> Result<Article, BackendError> {
    request.validate()?;
    let article = repository::insert_article(pool, &request.title, &request.content).await?;
    tracing::debug!("Saved article {}", article.id);
    Ok(article)
}

pub async fn find_all(pool: &SqlitePool) -> Result<Vec<Article>, BackendError> {
    Ok(repository::find_all_articles(pool).await?)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Article, BackendError> {
    repository::find_article_by_id(pool, id)
        .await?
        .ok_or_else(|| not_found(id))
}

/// Delete an article; deleting an id that does not exist is not an error
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<(), BackendError> {
    let removed = repository::delete_article(pool, id).await?;
    if removed == 0 {
        tracing::debug!("Delete of missing article {} ignored", id);
    }
    Ok(())
}

pub async fn update(
    pool: &SqlitePool,
    id: i64,
    request: UpdateArticleRequest,
) -> Result<Article, BackendError> {
    request.validate()?;
    repository::update_article(pool, id, &request.title, &request.content)
        .await?
        .ok_or_else(|| not_found(id))
}
