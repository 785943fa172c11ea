/**
 * API Route Handlers
 *
 * This module defines the API endpoints, split by whether they require a
 * bearer token.
 *
 * # Routes
 *
 * ## Public
 * - `POST /api/auth/signup` - User registration
 * - `POST /api/auth/login` - User login
 * - `POST /api/token` - Exchange a refresh token for an access token
 * - `GET /api/articles` - List articles
 *
 * ## Protected
 * - `GET /api/auth/me` - Get current user info
 * - `POST /api/auth/logout` - Revoke the refresh token
 * - `POST /api/articles` - Create an article
 * - `GET /api/articles/{id}` - Fetch an article
 * - `PUT /api/articles/{id}` - Update an article
 * - `DELETE /api/articles/{id}` - Delete an article
 */

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::backend::auth::{create_access_token, get_me, login, logout, signup};
use crate::backend::blog::handlers::{
    add_article, delete_article, find_all_articles, find_article, update_article,
};
use crate::backend::middleware::auth::auth_middleware;
use crate::backend::server::state::AppState;

/// Routes reachable without a token
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/api/auth/signup", post(signup))
        .route("/api/auth/login", post(login))
        .route("/api/token", post(create_access_token))
        .route("/api/articles", get(find_all_articles))
}

/// Routes behind `auth_middleware`
///
/// The middleware is added with `route_layer`, so unknown paths still reach
/// the fallback instead of being answered with 401.
pub fn protected_routes(app_state: AppState) -> Router<AppState> {
    Router::new()
        .route("/api/auth/me", get(get_me))
        .route("/api/auth/logout", post(logout))
        .route("/api/articles", post(add_article))
        .route(
            "/api/articles/{id}",
            get(find_article).put(update_article).delete(delete_article),
        )
        .route_layer(middleware::from_fn_with_state(app_state, auth_middleware))
}

/// Configure API routes
///
/// `/api/articles` appears in both halves; axum merges the two method
/// routers so `GET` stays public while `POST` is guarded.
pub fn configure_api_routes(router: Router<AppState>, app_state: AppState) -> Router<AppState> {
    router
        .merge(public_routes())
        .merge(protected_routes(app_state))
}
