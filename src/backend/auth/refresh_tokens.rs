/**
 * Refresh Token Storage
 *
 * Each user holds at most one refresh token. Logging in replaces it and
 * logging out deletes it, so a refresh token only mints access tokens while
 * its row exists.
 */

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct RefreshToken {
    pub id: i64,
    pub user_id: i64,
    pub refresh_token: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Store `refresh_token` as the user's current token, replacing any previous one
pub async fn save_refresh_token(
    pool: &SqlitePool,
    user_id: i64,
    refresh_token: &str,
) -> Result<RefreshToken, sqlx::Error> {
    let now = Utc::now();

    sqlx::query_as::<_, RefreshToken>(
        r#"
        INSERT INTO refresh_tokens (user_id, refresh_token, created_at, updated_at)
        VALUES (?, ?, ?, ?)
        ON CONFLICT(user_id) DO UPDATE
        SET refresh_token = excluded.refresh_token, updated_at = excluded.updated_at
        RETURNING id, user_id, refresh_token, created_at, updated_at
        "#,
    )
    .bind(user_id)
    .bind(refresh_token)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await
}

pub async fn find_by_refresh_token(
    pool: &SqlitePool,
    refresh_token: &str,
) -> Result<Option<RefreshToken>, sqlx::Error> {
    sqlx::query_as::<_, RefreshToken>(
        r#"
        SELECT id, user_id, refresh_token, created_at, updated_at
        FROM refresh_tokens
        WHERE refresh_token = ?
        "#,
    )
    .bind(refresh_token)
    .fetch_optional(pool)
    .await
}

pub async fn find_by_user_id(
    pool: &SqlitePool,
    user_id: i64,
) -> Result<Option<RefreshToken>, sqlx::Error> {
    sqlx::query_as::<_, RefreshToken>(
        r#"
        SELECT id, user_id, refresh_token, created_at, updated_at
        FROM refresh_tokens
        WHERE user_id = ?
        "#,
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

/// Remove the user's refresh token; returns the number of rows deleted
pub async fn delete_by_user_id(pool: &SqlitePool, user_id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM refresh_tokens WHERE user_id = ?")
        .bind(user_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
