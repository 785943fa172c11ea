/**
 * Server Configuration
 *
 * This module handles loading of server configuration and the database
 * connection pool.
 *
 * # Configuration Sources
 *
 * Configuration is loaded from environment variables (after `.env` has been
 * read by the binary), with defaults that let the server start with no
 * setup at all: an in-memory database and a development signing secret.
 *
 * | Variable       | Default                  |
 * |----------------|--------------------------|
 * | `DATABASE_URL` | `sqlite::memory:`        |
 * | `SERVER_PORT`  | `3000`                   |
 * | `JWT_ISSUER`   | `blogpress`              |
 * | `JWT_SECRET`   | development secret       |
 * | `BCRYPT_COST`  | `bcrypt::DEFAULT_COST`   |
 */

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::backend::auth::token_provider::JwtProperties;

/// Default database: lives as long as the process
pub const DEFAULT_DATABASE_URL: &str = "sqlite::memory:";

/// Default HTTP port
pub const DEFAULT_PORT: u16 = 3000;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// sqlx SQLite connection string
    pub database_url: String,
    /// Port to listen on (all interfaces)
    pub port: u16,
    /// Token signing settings
    pub jwt: JwtProperties,
    /// bcrypt work factor for new password hashes
    pub bcrypt_cost: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            port: DEFAULT_PORT,
            jwt: JwtProperties::default(),
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl ServerConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, falling back to defaults
    ///
    /// Values that fail to parse are logged and replaced by the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let database_url = lookup("DATABASE_URL").unwrap_or(defaults.database_url);

        let port = match lookup("SERVER_PORT") {
            Some(raw) => raw.parse::<u16>().unwrap_or_else(|_| {
                tracing::warn!("Invalid SERVER_PORT '{}', using {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => defaults.port,
        };

        let bcrypt_cost = match lookup("BCRYPT_COST") {
            Some(raw) => match raw.parse::<u32>() {
                Ok(cost) if (4..=31).contains(&cost) => cost,
                _ => {
                    tracing::warn!("Invalid BCRYPT_COST '{}', using {}", raw, defaults.bcrypt_cost);
                    defaults.bcrypt_cost
                }
            },
            None => defaults.bcrypt_cost,
        };

        let mut jwt = defaults.jwt;
        if let Some(issuer) = lookup("JWT_ISSUER") {
            jwt.issuer = issuer;
        }
        match lookup("JWT_SECRET") {
            Some(secret) if !secret.is_empty() => jwt.secret_key = secret,
            _ => tracing::warn!("JWT_SECRET not set. Using the development secret."),
        }

        Self {
            database_url,
            port,
            jwt,
            bcrypt_cost,
        }
    }
}

/// Whether `database_url` names an in-memory database
///
/// Covers both `sqlite::memory:` and URI filenames opened with
/// `mode=memory` (shared-cache in-memory databases).
pub fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

/// Connect to the database and run migrations
///
/// In-memory databases are pinned to a single connection that never idles
/// out, otherwise the data would vanish with the connection.
///
/// # Example
///
/// ```rust,no_run
/// use blogpress::backend::server::config::load_database;
///
/// # async fn example() -> Result<(), sqlx::Error> {
/// let pool = load_database("sqlite://blog.db").await?;
/// # Ok(())
/// # }
/// ```
pub async fn load_database(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    tracing::info!("Connecting to database...");

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool_options = if is_in_memory(database_url) {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(8)
    };

    let pool = pool_options.connect_with(options).await?;
    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database migrations completed successfully");

    Ok(pool)
}
