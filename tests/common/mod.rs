//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - Database test fixtures
//! - Authentication test helpers
//! - Hand-built JWTs for rejection paths
//! - Custom assertion macros

#[macro_use]
pub mod assertions;
pub mod auth_helpers;
pub mod database;
pub mod jwt_factory;

// Re-export commonly used utilities
pub use auth_helpers::*;
pub use database::*;
pub use jwt_factory::*;

use axum_test::TestServer;
use blogpress::backend::server::{build_app, ServerConfig};

/// bcrypt cost used by every test; the minimum bcrypt accepts
pub const TEST_BCRYPT_COST: u32 = 4;

/// Server configuration for tests: default JWT settings, cheap hashing
pub fn test_config() -> ServerConfig {
    ServerConfig {
        bcrypt_cost: TEST_BCRYPT_COST,
        ..ServerConfig::default()
    }
}

/// Spin up the full router over the fixture's pool
pub fn create_test_server(db: &TestDatabase) -> TestServer {
    let app = build_app(db.pool().clone(), &test_config());
    TestServer::new(app).expect("Failed to create test server")
}
