//! Authentication Handlers Module
//!
//! This module contains all HTTP handlers for authentication endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Request and response types
//! ├── session.rs  - Token pair issuance shared by signup and login
//! ├── signup.rs   - User registration handler
//! ├── login.rs    - User authentication handler
//! ├── me.rs       - Get current user handler
//! └── token.rs    - Access token refresh and logout handlers
//! ```
//!
//! # Handlers
//!
//! - **`signup`** - POST /api/auth/signup - User registration
//! - **`login`** - POST /api/auth/login - User authentication
//! - **`get_me`** - GET /api/auth/me - Get current user info
//! - **`create_access_token`** - POST /api/token - Refresh an access token
//! - **`logout`** - POST /api/auth/logout - Revoke the refresh token
//!
//! # Authentication Flow
//!
//! 1. **Signup / Login**: email and password → access token + refresh token
//! 2. **Protected call**: `Authorization: Bearer <access token>`
//! 3. **Refresh**: refresh token → new access token
//! 4. **Logout**: refresh token deleted, can no longer be exchanged

/// Request and response types
pub mod types;

/// Token pair issuance
pub mod session;

/// Signup handler
pub mod signup;

/// Login handler
pub mod login;

/// Get current user handler
pub mod me;

/// Token refresh and logout handlers
pub mod token;

// Re-export commonly used types
pub use types::{
    AuthResponse, CreateAccessTokenRequest, CreateAccessTokenResponse, LoginRequest, SignupRequest,
    UserResponse,
};

// Re-export handlers
pub use login::login;
pub use me::get_me;
pub use signup::signup;
pub use token::{create_access_token, logout};
