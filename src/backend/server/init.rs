/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP server,
 * including state creation, database loading, and route configuration.
 *
 * # Initialization Process
 *
 * 1. Connect to the database and run migrations
 * 2. Build the token provider from the JWT settings
 * 3. Create the application state
 * 4. Create and configure the router
 */

use axum::Router;
use sqlx::SqlitePool;

use crate::backend::auth::token_provider::TokenProvider;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_database, ServerConfig};
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
///
/// # Errors
///
/// Fails if the database cannot be opened or a migration fails. Unlike a
/// missing optional service, the blog cannot run without its store.
pub async fn create_app(config: ServerConfig) -> Result<Router<()>, sqlx::Error> {
    tracing::info!("Initializing blogpress backend server");

    let db_pool = load_database(&config.database_url).await?;

    Ok(build_app(db_pool, &config))
}

/// Build the router around an already-migrated pool
pub fn build_app(db_pool: SqlitePool, config: &ServerConfig) -> Router<()> {
    let tokens = TokenProvider::new(config.jwt.clone());
    let app_state = AppState::new(db_pool, tokens, config.bcrypt_cost);

    let app = create_router(app_state);
    tracing::info!("Router configured");

    app
}
