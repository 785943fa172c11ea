/**
 * Session Issuance
 *
 * Shared by signup and login: mint an access/refresh token pair for a user
 * and record the refresh token as the user's current one.
 */

use crate::backend::auth::handlers::types::AuthResponse;
use crate::backend::auth::refresh_tokens::save_refresh_token;
use crate::backend::auth::users::User;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;

pub(crate) async fn issue_session(state: &AppState, user: User) -> Result<AuthResponse, BackendError> {
    let access_token = state.tokens.generate_access_token(&user)?;
    let refresh_token = state.tokens.generate_refresh_token(&user)?;

    save_refresh_token(&state.db_pool, user.id, &refresh_token).await?;

    Ok(AuthResponse {
        access_token,
        refresh_token,
        user: user.into(),
    })
}
