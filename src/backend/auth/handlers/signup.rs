/**
 * Signup Handler
 *
 * This module implements the user registration handler for POST /api/auth/signup.
 *
 * # Registration Process
 *
 * 1. Validate email format and password length
 * 2. Check if user already exists
 * 3. Hash password using bcrypt
 * 4. Create user in database
 * 5. Issue access and refresh tokens
 *
 * # Validation
 *
 * - Email must contain '@' character (basic validation)
 * - Password must be at least 8 characters long (counted as chars, not bytes)
 * - Email must be unique (no existing user with same email)
 */

use axum::{extract::State, http::StatusCode};

use crate::backend::auth::handlers::session::issue_session;
use crate::backend::auth::handlers::types::{AuthResponse, SignupRequest};
use crate::backend::auth::password::hash_password;
use crate::backend::auth::users::{create_user, get_user_by_email};
use crate::backend::error::BackendError;
use crate::backend::extract::Json;
use crate::backend::server::state::AppState;
use crate::shared::SharedError;

/// Minimum accepted password length
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Sign up handler
///
/// # Errors
///
/// * `400 Bad Request` - If email format is invalid or password is too short
/// * `409 Conflict` - If user with this email already exists
/// * `500 Internal Server Error` - If password hashing, user creation, or token generation fails
///
/// # Example Request
///
/// ```http
/// POST /api/auth/signup HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "email": "user@example.com",
///   "password": "securepassword123"
/// }
/// ```
pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), BackendError> {
    tracing::info!("Signup request for email: {}", request.email);

    // Validate email format (basic check)
    if !request.email.contains('@') {
        tracing::warn!("Invalid email format: {}", request.email);
        return Err(SharedError::validation("email", "Invalid email format").into());
    }

    if request.password.chars().count() < MIN_PASSWORD_LENGTH {
        tracing::warn!("Password too short");
        return Err(SharedError::validation(
            "password",
            format!("Password must be at least {} characters", MIN_PASSWORD_LENGTH),
        )
        .into());
    }

    if get_user_by_email(&state.db_pool, &request.email).await?.is_some() {
        tracing::warn!("Email already exists: {}", request.email);
        return Err(BackendError::handler(StatusCode::CONFLICT, "Email already registered"));
    }

    let password_hash = hash_password(&request.password, state.bcrypt_cost)?;

    // A concurrent signup can still win the race; the unique index catches it
    let user = create_user(&state.db_pool, request.email.clone(), password_hash)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                BackendError::handler(StatusCode::CONFLICT, "Email already registered")
            }
            other => BackendError::from(other),
        })?;

    tracing::info!("User created successfully: {} ({})", user.id, user.email);

    let response = issue_session(&state, user).await?;
    Ok((StatusCode::CREATED, Json(response)))
}
