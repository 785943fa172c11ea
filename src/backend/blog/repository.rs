//! Article Database Operations
//!
//! Plain persistence for the `articles` table. Nothing here validates input
//! or turns a missing row into an error; that is the service's job.

use chrono::Utc;
use sqlx::SqlitePool;

use crate::shared::Article;

/// Insert a new article and return the stored row
pub async fn insert_article(pool: &SqlitePool, title: &str, content: &str) -> Result<Article, sqlx::Error> {
    let now = Utc::now();

    sqlx::query_as::<_, Article>(
        r#"
        INSERT INTO articles (title, content, created_at, updated_at)
        VALUES (?, ?, ?, ?)
        RETURNING id, title, content, created_at, updated_at
        "#,
    )
    .bind(title)
    .bind(content)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await
}

/// All articles, oldest first
pub async fn find_all_articles(pool: &SqlitePool) -> Result<Vec<Article>, sqlx::Error> {
    sqlx::query_as::<_, Article>(
        r#"
        SELECT id, title, content, created_at, updated_at
        FROM articles
        ORDER BY id ASC
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn find_article_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Article>, sqlx::Error> {
    sqlx::query_as::<_, Article>(
        r#"
        SELECT id, title, content, created_at, updated_at
        FROM articles
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Replace title and content; `None` if no row has this id
pub async fn update_article(
    pool: &SqlitePool,
    id: i64,
    title: &str,
    content: &str,
) -> Result<Option<Article>, sqlx::Error> {
    sqlx::query_as::<_, Article>(
        r#"
        UPDATE articles
        SET title = ?, content = ?, updated_at = ?
        WHERE id = ?
        RETURNING id, title, content, created_at, updated_at
        "#,
    )
    .bind(title)
    .bind(content)
    .bind(Utc::now())
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Delete by id; returns the number of rows removed
pub async fn delete_article(pool: &SqlitePool, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM articles WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
