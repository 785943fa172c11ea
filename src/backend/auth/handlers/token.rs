/**
 * Token Refresh and Logout Handlers
 *
 * - `POST /api/token` exchanges a refresh token for a new access token.
 *   It is public: the caller's access token has usually expired by then.
 * - `POST /api/auth/logout` forgets the caller's refresh token.
 */

use axum::{extract::State, http::StatusCode};

use crate::backend::auth::handlers::types::{CreateAccessTokenRequest, CreateAccessTokenResponse};
use crate::backend::auth::refresh_tokens::delete_by_user_id;
use crate::backend::auth::token_service::create_new_access_token;
use crate::backend::error::BackendError;
use crate::backend::extract::Json;
use crate::backend::middleware::auth::AuthUser;
use crate::backend::server::state::AppState;

/// Create a new access token from a refresh token
///
/// # Errors
///
/// * `401 Unauthorized` - If the refresh token is invalid, expired or revoked
pub async fn create_access_token(
    State(state): State<AppState>,
    Json(request): Json<CreateAccessTokenRequest>,
) -> Result<(StatusCode, Json<CreateAccessTokenResponse>), BackendError> {
    let access_token =
        create_new_access_token(&state.db_pool, &state.tokens, &request.refresh_token).await?;

    Ok((StatusCode::CREATED, Json(CreateAccessTokenResponse { access_token })))
}

/// Log out the current user
///
/// Access tokens already handed out stay valid until they expire.
pub async fn logout(
    State(state): State<AppState>,
    AuthUser(current): AuthUser,
) -> Result<StatusCode, BackendError> {
    let removed = delete_by_user_id(&state.db_pool, current.user_id).await?;
    tracing::info!("User {} logged out ({} refresh token(s) revoked)", current.email, removed);

    Ok(StatusCode::OK)
}
