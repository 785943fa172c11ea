//! Blogpress - Main Library
//!
//! Blogpress is a small blog backend built with Rust: article CRUD over a JSON
//! HTTP API, persisted in SQLite, with JWT authentication guarding every
//! endpoint except signup, login, token refresh and the public article list.
//!
//! # Module Structure
//!
//! - **`shared`** - Types shared between the server and any client
//!   - Article entity and request/response payloads
//!   - Validation error types
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Axum HTTP server, routes and authentication middleware
//!   - Token issuance and validation (JWT, HS256)
//!   - User, refresh token and article persistence (sqlx + SQLite)
//!
//! # Feature Flags
//!
//! - **`ssr`** (default) - Enables the backend modules and the server binary.
//!   Without it only the `shared` payload types are compiled.
//!
//! # Usage
//!
//! ```rust,no_run
//! use blogpress::backend::server::{config::ServerConfig, init::create_app};
//!
//! # async fn example() -> Result<(), sqlx::Error> {
//! let config = ServerConfig::from_env();
//! let app = create_app(config).await?;
//! // Serve `app` with axum::serve
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `shared::SharedError` for payload validation failures
//! - `backend::BackendError` for everything a handler can return; it renders
//!   itself as a JSON error body with the matching HTTP status

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;
