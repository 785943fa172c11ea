//! Backend Module
//!
//! This module contains all server-side code for blogpress: an Axum HTTP
//! server exposing article CRUD and token-based authentication over a
//! SQLite store.
//!
//! This module is only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`blog`** - Article repository, service and handlers
//! - **`auth`** - Users, passwords, JWT tokens, refresh tokens
//! - **`middleware`** - Bearer token authentication
//! - **`error`** - Backend-specific error types
//! - **`extract`** - `Json` extractor that rejects with `BackendError`
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - blogpress-server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── blog/           - Articles
//! ├── auth/           - Authentication
//! ├── middleware/     - Request middleware
//! ├── extract.rs      - Json extractor
//! └── error/          - Error types
//! ```
//!
//! # Error Handling
//!
//! Handlers return `Result<_, BackendError>`. The error converts into a JSON
//! body `{"error": ..., "status": ...}` with the matching status code.
//!
//! # Example
//!
//! ```rust,no_run
//! use blogpress::backend::{create_app, server::ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let app = create_app(ServerConfig::from_env()).await?;
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Articles
pub mod blog;

/// Backend error types
pub mod error;

/// Request extractors
pub mod extract;

/// Authentication and user management
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Re-export commonly used types
pub use error::BackendError;
pub use server::{build_app, create_app, AppState};
