/**
 * Authentication Handler Types
 *
 * This module defines the request and response types used by authentication handlers.
 * These types are shared across signup, login, token refresh and get_me handlers.
 */

use serde::{Deserialize, Serialize};

use crate::backend::auth::users::User;

/// Sign up request
///
/// Contains the email and password for user registration.
#[derive(Deserialize, Serialize, Debug)]
pub struct SignupRequest {
    /// User's email address, used as login name
    pub email: String,
    /// User's password (will be hashed before storage)
    pub password: String,
}

/// Login request
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    /// User's email address
    pub email: String,
    /// User's password (will be verified against stored hash)
    pub password: String,
}

/// Auth response
///
/// Returned by signup and login handlers. Contains both tokens and
/// user information for immediate authentication.
#[derive(Serialize, Deserialize, Debug)]
pub struct AuthResponse {
    /// Short-lived JWT for the `Authorization` header
    pub access_token: String,
    /// Long-lived JWT exchanged at `POST /api/token`
    pub refresh_token: String,
    /// User information (without sensitive data)
    pub user: UserResponse,
}

/// User response (without sensitive data)
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserResponse {
    /// User's unique ID
    pub id: i64,
    /// User's email address
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
        }
    }
}

/// Body of `POST /api/token`
#[derive(Deserialize, Serialize, Debug)]
pub struct CreateAccessTokenRequest {
    pub refresh_token: String,
}

/// Response of `POST /api/token`
#[derive(Deserialize, Serialize, Debug)]
pub struct CreateAccessTokenResponse {
    pub access_token: String,
}
