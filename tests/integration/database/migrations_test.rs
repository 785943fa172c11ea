//! Database migration tests
//!
//! Tests to ensure migrations run correctly and database schema is valid

use crate::common::database::{create_test_pool, TestDatabase};
use blogpress::backend::auth::refresh_tokens::{find_by_user_id, save_refresh_token};
use blogpress::backend::auth::users::create_user;

#[tokio::test]
async fn test_tables_exist() {
    let pool = create_test_pool().await;

    for table in ["users", "articles", "refresh_tokens"] {
        let result = sqlx::query(&format!("SELECT 1 FROM {} LIMIT 1", table))
            .execute(&pool)
            .await;
        assert!(result.is_ok(), "{} table should exist", table);
    }
}

#[tokio::test]
async fn test_article_ids_are_sequential() {
    let db = TestDatabase::new().await;

    let first = db.seed_article("first", "one").await;
    let second = db.seed_article("second", "two").await;

    assert_eq!(second.id, first.id + 1);
}

#[tokio::test]
async fn test_user_email_is_unique() {
    let db = TestDatabase::new().await;

    assert_ok!(create_user(db.pool(), "a@example.com".to_string(), "hash".to_string()).await);
    let duplicate = create_user(db.pool(), "a@example.com".to_string(), "hash".to_string()).await;

    match duplicate {
        Err(sqlx::Error::Database(err)) => assert!(err.is_unique_violation()),
        other => panic!("Expected unique violation, got {:?}", other.map(|u| u.id)),
    }
}

#[tokio::test]
async fn test_refresh_tokens_cascade_with_user() {
    let db = TestDatabase::new().await;
    let user = assert_ok!(create_user(db.pool(), "a@example.com".to_string(), "hash".to_string()).await);
    assert_ok!(save_refresh_token(db.pool(), user.id, "token").await);

    sqlx::query("DELETE FROM users WHERE id = ?")
        .bind(user.id)
        .execute(db.pool())
        .await
        .unwrap();

    assert!(find_by_user_id(db.pool(), user.id).await.unwrap().is_none());
}
