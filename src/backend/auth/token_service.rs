/**
 * Access Token Renewal
 *
 * Exchanges a stored refresh token for a fresh access token.
 */

use sqlx::SqlitePool;

use crate::backend::auth::refresh_tokens::find_by_refresh_token;
use crate::backend::auth::token_provider::{TokenKind, TokenProvider};
use crate::backend::auth::users::get_user_by_id;
use crate::backend::error::BackendError;

/// Issue a new access token for the owner of `refresh_token`
///
/// # Errors
///
/// * `401 Unauthorized` - If the token fails validation, is not a refresh
///   token, is not the owner's current token, or its owner no longer exists
pub async fn create_new_access_token(
    pool: &SqlitePool,
    tokens: &TokenProvider,
    refresh_token: &str,
) -> Result<String, BackendError> {
    if let Err(e) = tokens.get_claims_of_kind(refresh_token, TokenKind::Refresh) {
        tracing::warn!("Refresh rejected: {:?}", e.kind());
        return Err(BackendError::unauthorized("Unexpected token"));
    }

    let stored = find_by_refresh_token(pool, refresh_token)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Refresh token is not on record");
            BackendError::unauthorized("Unexpected token")
        })?;

    let user = get_user_by_id(pool, stored.user_id)
        .await?
        .ok_or_else(|| BackendError::unauthorized("Unexpected user"))?;

    let access_token = tokens.generate_access_token(&user)?;
    tracing::info!("Issued new access token for user {}", user.id);

    Ok(access_token)
}
