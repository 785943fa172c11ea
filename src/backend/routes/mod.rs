//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! - **`router`** - Main router creation and route assembly
//! - **`api_routes`** - API endpoints, split into public and protected sets
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation
//! └── api_routes.rs   - API endpoint handlers
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use blogpress::backend::routes::create_router;
//! use blogpress::backend::server::state::AppState;
//!
//! fn example(app_state: AppState) {
//!     let router = create_router(app_state);
//! }
//! ```

/// Main router creation
pub mod router;

/// API endpoint handlers
pub mod api_routes;

// Re-export commonly used functions
pub use router::create_router;
