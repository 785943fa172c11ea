//! Article HTTP Handlers
//!
//! - `POST /api/articles` - Create an article (201, full article)
//! - `GET /api/articles` - List articles (public)
//! - `GET /api/articles/{id}` - Fetch one article
//! - `PUT /api/articles/{id}` - Replace title and content
//! - `DELETE /api/articles/{id}` - Delete an article

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use sqlx::SqlitePool;

use crate::backend::blog::service;
use crate::backend::error::BackendError;
use crate::backend::extract::Json;
use crate::backend::middleware::auth::AuthUser;
use crate::shared::{AddArticleRequest, Article, ArticleResponse, UpdateArticleRequest};

pub async fn add_article(
    State(pool): State<SqlitePool>,
    AuthUser(current): AuthUser,
    Json(request): Json<AddArticleRequest>,
) -> Result<(StatusCode, Json<Article>), BackendError> {
    let article = service::save(&pool, request).await?;
    tracing::info!("{} created article {}", current.email, article.id);

    Ok((StatusCode::CREATED, Json(article)))
}

pub async fn find_all_articles(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<ArticleResponse>>, BackendError> {
    let articles = service::find_all(&pool)
        .await?
        .into_iter()
        .map(ArticleResponse::from)
        .collect();

    Ok(Json(articles))
}

pub async fn find_article(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<Json<ArticleResponse>, BackendError> {
    let article = service::find_by_id(&pool, id).await?;
    Ok(Json(article.into()))
}

pub async fn delete_article(
    State(pool): State<SqlitePool>,
    AuthUser(current): AuthUser,
    Path(id): Path<i64>,
) -> Result<StatusCode, BackendError> {
    service::delete(&pool, id).await?;
    tracing::info!("{} deleted article {}", current.email, id);

    Ok(StatusCode::OK)
}

pub async fn update_article(
    State(pool): State<SqlitePool>,
    AuthUser(current): AuthUser,
    Path(id): Path<i64>,
    Json(request): Json<UpdateArticleRequest>,
) -> Result<Json<Article>, BackendError> {
    let article = service::update(&pool, id, request).await?;
    tracing::info!("{} updated article {}", current.email, id);

    Ok(Json(article))
}
