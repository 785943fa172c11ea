/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * The `AppState` struct serves as the central state container for the
 * application, holding:
 * - The SQLite connection pool
 * - The JWT token provider
 * - The bcrypt cost used for new password hashes
 *
 * Every field is cheap to clone (`SqlitePool` is reference counted and the
 * token provider holds only keys), so the state is cloned per request.
 *
 * # State Extraction
 *
 * The `FromRef` implementations allow Axum handlers to extract specific
 * parts of the state without needing the entire `AppState`.
 *
 * # Example
 *
 * ```rust
 * use axum::extract::State;
 * use sqlx::SqlitePool;
 *
 * async fn handler(State(pool): State<SqlitePool>) {
 *     let _ = sqlx::query("SELECT 1").execute(&pool).await;
 * }
 * ```
 */

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::backend::auth::token_provider::TokenProvider;

/// Application state
///
/// This struct holds all shared state for the application.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db_pool: SqlitePool,
    /// JWT issuance and validation
    pub tokens: TokenProvider,
    /// bcrypt work factor for signup
    pub bcrypt_cost: u32,
}

impl AppState {
    pub fn new(db_pool: SqlitePool, tokens: TokenProvider, bcrypt_cost: u32) -> Self {
        Self {
            db_pool,
            tokens,
            bcrypt_cost,
        }
    }
}

/// Implement FromRef for SqlitePool
///
/// Handlers that only touch the database take `State<SqlitePool>`.
impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

/// Implement FromRef for TokenProvider
impl FromRef<AppState> for TokenProvider {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}

#[cfg(test)]
impl AppState {
    /// Fresh migrated in-memory database, default JWT settings, minimum bcrypt cost
    pub(crate) async fn in_memory() -> Self {
        use crate::backend::auth::token_provider::JwtProperties;
        use crate::backend::server::config::{load_database, DEFAULT_DATABASE_URL};

        let pool = load_database(DEFAULT_DATABASE_URL)
            .await
            .expect("in-memory database");
        Self::new(pool, TokenProvider::new(JwtProperties::default()), 4)
    }
}
