/**
 * Authentication Middleware
 *
 * This module provides middleware for protecting routes that require
 * user authentication. It extracts and verifies JWT tokens from the
 * Authorization header and provides the user to handlers.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::backend::auth::users::get_user_by_email;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;

/// Scheme prefix of the Authorization header value
pub const TOKEN_PREFIX: &str = "Bearer ";

/// Authenticated user data extracted from JWT token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: i64,
    pub email: String,
    pub authorities: Vec<String>,
}

/// Pull the bearer token out of the request headers
pub fn extract_bearer_token(headers: &HeaderMap) -> Result<&str, BackendError> {
    let auth_header = headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            BackendError::unauthorized("Missing Authorization header")
        })?;

    auth_header.strip_prefix(TOKEN_PREFIX).ok_or_else(|| {
        tracing::warn!("Invalid Authorization header format");
        BackendError::unauthorized("Invalid Authorization header format")
    })
}

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts JWT token from Authorization header
/// 2. Verifies the token (access tokens only; refresh tokens are rejected)
/// 3. Resolves the token subject to a stored user
/// 4. Attaches user data to request extensions for use in handlers
///
/// Returns 401 Unauthorized if token is missing or invalid
pub async fn auth_middleware(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let token = extract_bearer_token(request.headers())?;

    let authentication = app_state.tokens.get_authentication(token).map_err(|e| {
        tracing::warn!("Invalid token: {:?}", e.kind());
        BackendError::unauthorized("Invalid token")
    })?;

    let user = get_user_by_email(&app_state.db_pool, &authentication.username)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Token subject not found in database");
            BackendError::unauthorized("Invalid token")
        })?;

    request.extensions_mut().insert(AuthenticatedUser {
        user_id: user.id,
        email: user.email,
        authorities: authentication.authorities,
    });

    Ok(next.run(request).await)
}

/// Axum extractor for authenticated user
///
/// Reads the user that `auth_middleware` attached to the request. Using it
/// on a route without the middleware always yields 401.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                BackendError::unauthorized("Authentication required")
            })?;

        Ok(AuthUser(user))
    }
}
