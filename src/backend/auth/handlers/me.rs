/**
 * Get Current User Handler
 *
 * This module implements the handler for GET /api/auth/me, which returns
 * information about the currently authenticated user.
 *
 * The route sits behind the authentication middleware, so the handler reads
 * the already-verified identity instead of parsing the header itself.
 */

use axum::extract::State;
use sqlx::SqlitePool;

use crate::backend::auth::handlers::types::UserResponse;
use crate::backend::auth::users::get_user_by_id;
use crate::backend::error::BackendError;
use crate::backend::extract::Json;
use crate::backend::middleware::auth::AuthUser;

/// Get current user handler
///
/// # Errors
///
/// * `401 Unauthorized` - If the request was not authenticated
/// * `404 Not Found` - If the user was deleted after the token was issued
pub async fn get_me(
    State(pool): State<SqlitePool>,
    AuthUser(current): AuthUser,
) -> Result<Json<UserResponse>, BackendError> {
    let user = get_user_by_id(&pool, current.user_id)
        .await?
        .ok_or_else(|| {
            tracing::warn!("User not found: {}", current.user_id);
            BackendError::not_found(format!("not found: {}", current.user_id))
        })?;

    Ok(Json(user.into()))
}
