//! Blog Module
//!
//! Article CRUD: persistence, the service layer and the HTTP handlers.
//!
//! ```text
//! blog/
//! ├── mod.rs         - Module exports
//! ├── repository.rs  - SQL for the articles table
//! ├── service.rs     - Validation and not-found handling
//! └── handlers.rs    - Axum handlers for /api/articles
//! ```

/// Article database operations
pub mod repository;

/// Article service operations
pub mod service;

/// HTTP handlers for /api/articles
pub mod handlers;

pub use handlers::{add_article, delete_article, find_all_articles, find_article, update_article};
