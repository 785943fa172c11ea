//! Database test fixtures and utilities
//!
//! Every fixture gets its own in-memory SQLite database, so tests are
//! isolated without truncation or transactions.

use blogpress::backend::server::config::{load_database, DEFAULT_DATABASE_URL};
use blogpress::shared::Article;
use sqlx::SqlitePool;

/// Create a migrated in-memory database pool
pub async fn create_test_pool() -> SqlitePool {
    load_database(DEFAULT_DATABASE_URL)
        .await
        .expect("Failed to create test database pool")
}

/// Test database fixture
///
/// The database lives as long as the pool, which is dropped with the fixture.
pub struct TestDatabase {
    pool: SqlitePool,
}

impl TestDatabase {
    /// Create a new test database fixture
    pub async fn new() -> Self {
        Self {
            pool: create_test_pool().await,
        }
    }

    /// Get the database pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Insert an article directly, bypassing the API
    pub async fn seed_article(&self, title: &str, content: &str) -> Article {
        blogpress::backend::blog::repository::insert_article(&self.pool, title, content)
            .await
            .expect("Failed to seed article")
    }

    /// Number of rows in `table`
    pub async fn count(&self, table: &str) -> i64 {
        sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
            .fetch_one(&self.pool)
            .await
            .expect("Failed to count rows")
    }
}
