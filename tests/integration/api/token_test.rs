//! Token refresh and logout integration tests

use axum::http::StatusCode;
use blogpress::backend::auth::handlers::CreateAccessTokenResponse;
use blogpress::backend::auth::UserResponse;
use serde_json::json;

use blogpress::shared::AddArticleRequest;

use crate::common::{
    create_test_server, create_unique_test_user, test_token_provider, JwtFactory, TestDatabase,
};

#[tokio::test]
async fn test_create_new_access_token() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db);
    let user = create_unique_test_user(db.pool()).await.unwrap();

    let response = server
        .post("/api/token")
        .json(&json!({ "refresh_token": user.refresh_token }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: CreateAccessTokenResponse = response.json();
    assert_ne!(body.access_token, user.access_token);
    assert_eq!(
        test_token_provider().get_user_id(&body.access_token).unwrap(),
        Some(user.id)
    );

    // The new token works on protected routes
    let me: UserResponse = server
        .get("/api/auth/me")
        .authorization_bearer(&body.access_token)
        .await
        .json();
    assert_eq!(me.id, user.id);
}

#[tokio::test]
async fn test_create_new_access_token_with_garbage() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db);

    let response = server
        .post("/api/token")
        .json(&json!({ "refresh_token": "not-a-jwt" }))
        .await;

    assert_error_response!(response, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_superseded_refresh_token_is_rejected() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db);
    let user = create_unique_test_user(db.pool()).await.unwrap();

    // Logging in again stores a new refresh token
    let response = server
        .post("/api/auth/login")
        .json(&json!({ "email": user.email, "password": user.password }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let response = server
        .post("/api/token")
        .json(&json!({ "refresh_token": user.refresh_token }))
        .await;

    assert_error_response!(response, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_logout_revokes_refresh_token() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db);
    let user = create_unique_test_user(db.pool()).await.unwrap();

    let response = server
        .post("/api/auth/logout")
        .authorization_bearer(&user.access_token)
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(db.count("refresh_tokens").await, 0);

    let response = server
        .post("/api/token")
        .json(&json!({ "refresh_token": user.refresh_token }))
        .await;
    assert_error_response!(response, StatusCode::UNAUTHORIZED);

    // Access tokens stay valid until they expire
    let response = server
        .get("/api/auth/me")
        .authorization_bearer(&user.access_token)
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_logout_requires_token() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db);

    let response = server.post("/api/auth/logout").await;

    assert_error_response!(response, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_refresh_token_is_not_a_bearer_credential() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db);
    let user = create_unique_test_user(db.pool()).await.unwrap();

    let response = server
        .post("/api/articles")
        .authorization_bearer(&user.refresh_token)
        .json(&AddArticleRequest::new("title", "content"))
        .await;

    assert_error_response!(response, StatusCode::UNAUTHORIZED);
    assert_eq!(db.count("articles").await, 0);
}

#[tokio::test]
async fn test_revoked_refresh_token_stays_rejected_as_bearer() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db);
    let user = create_unique_test_user(db.pool()).await.unwrap();

    let response = server
        .post("/api/auth/logout")
        .authorization_bearer(&user.access_token)
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let response = server
        .post("/api/articles")
        .authorization_bearer(&user.refresh_token)
        .json(&AddArticleRequest::new("title", "content"))
        .await;
    assert_error_response!(response, StatusCode::UNAUTHORIZED);

    let response = server
        .get("/api/auth/me")
        .authorization_bearer(&user.refresh_token)
        .await;
    assert_error_response!(response, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_access_token_cannot_be_exchanged() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db);
    let user = create_unique_test_user(db.pool()).await.unwrap();

    let response = server
        .post("/api/token")
        .json(&json!({ "refresh_token": user.access_token }))
        .await;

    assert_error_response!(response, StatusCode::UNAUTHORIZED, "Unexpected token");
}

#[tokio::test]
async fn test_hand_built_refresh_token_is_not_a_bearer_credential() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db);
    let user = create_unique_test_user(db.pool()).await.unwrap();
    let token = JwtFactory::for_subject(&user.email)
        .with_id(user.id)
        .refresh()
        .create_token();

    let response = server
        .get("/api/auth/me")
        .authorization_bearer(&token)
        .await;

    assert_error_response!(response, StatusCode::UNAUTHORIZED);
}
