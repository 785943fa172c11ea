//! Authentication test helpers
//!
//! Provides utilities for creating test users, generating tokens,
//! and testing authentication flows.

use blogpress::backend::auth::password::hash_password;
use blogpress::backend::auth::refresh_tokens::save_refresh_token;
use blogpress::backend::auth::users::create_user;
use blogpress::backend::auth::{JwtProperties, TokenProvider};
use sqlx::SqlitePool;
use uuid::Uuid;

use super::TEST_BCRYPT_COST;

/// Test user credentials
pub struct TestUser {
    pub id: i64,
    pub email: String,
    pub password: String,
    pub access_token: String,
    pub refresh_token: String,
}

/// Token provider matching the one `create_test_server` builds
pub fn test_token_provider() -> TokenProvider {
    TokenProvider::new(JwtProperties::default())
}

/// Create a test user in the database with a stored refresh token
pub async fn create_test_user(
    pool: &SqlitePool,
    email: &str,
    password: &str,
) -> Result<TestUser, Box<dyn std::error::Error>> {
    let password_hash = hash_password(password, TEST_BCRYPT_COST)?;
    let user = create_user(pool, email.to_string(), password_hash).await?;

    let tokens = test_token_provider();
    let access_token = tokens.generate_access_token(&user)?;
    let refresh_token = tokens.generate_refresh_token(&user)?;
    save_refresh_token(pool, user.id, &refresh_token).await?;

    Ok(TestUser {
        id: user.id,
        email: user.email,
        password: password.to_string(),
        access_token,
        refresh_token,
    })
}

/// Create a test user with a unique email
pub async fn create_unique_test_user(
    pool: &SqlitePool,
) -> Result<TestUser, Box<dyn std::error::Error>> {
    let email = format!("test_{}@example.com", Uuid::new_v4());
    create_test_user(pool, &email, "test_password_123").await
}

/// Create authorization header value
pub fn auth_header(token: &str) -> String {
    format!("Bearer {}", token)
}
