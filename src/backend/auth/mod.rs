//! Authentication Module
//!
//! This module handles user registration, login, JWT issuance and
//! validation, and refresh token bookkeeping.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs             - Module exports and documentation
//! ├── users.rs           - User model and database operations
//! ├── password.rs        - bcrypt hashing and verification
//! ├── token_provider.rs  - JWT generation, validation and claim extraction
//! ├── refresh_tokens.rs  - Refresh token storage
//! ├── token_service.rs   - Refresh token → access token exchange
//! └── handlers/          - HTTP handlers
//! ```
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Access tokens live for 2 hours, refresh tokens for 14 days
//! - A refresh token is honoured only while it is the user's stored token
//! - Invalid credentials return 401 (no information leakage)

/// User data model and database operations
pub mod users;

/// Password hashing
pub mod password;

/// JWT token generation and validation
pub mod token_provider;

/// Refresh token storage
pub mod refresh_tokens;

/// Access token renewal
pub mod token_service;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::types::{AuthResponse, LoginRequest, SignupRequest, UserResponse};
pub use handlers::{create_access_token, get_me, login, logout, signup};
pub use token_provider::{Authentication, Claims, JwtProperties, TokenKind, TokenProvider, ROLE_USER};
