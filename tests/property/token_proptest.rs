//! Property-based tests for token issuance

use blogpress::backend::auth::users::User;
use chrono::Utc;
use proptest::prelude::*;

use crate::common::test_token_provider;

fn user(id: i64, email: String) -> User {
    let now = Utc::now();
    User {
        id,
        email,
        password_hash: String::new(),
        created_at: now,
        updated_at: now,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_access_token_carries_identity(id in 1i64..i64::MAX, local in "[a-z0-9._]{1,20}") {
        let tokens = test_token_provider();
        let email = format!("{}@example.com", local);
        let token = tokens.generate_access_token(&user(id, email.clone())).unwrap();

        let claims = tokens.get_claims(&token).unwrap();
        prop_assert_eq!(claims.sub, email);
        prop_assert_eq!(claims.id, Some(id));
        prop_assert_eq!(claims.iss, "blogpress");
        prop_assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_tokens_are_unique(id in 1i64..1000) {
        let tokens = test_token_provider();
        let user = user(id, "user@example.com".to_string());

        let first = tokens.generate_refresh_token(&user).unwrap();
        let second = tokens.generate_refresh_token(&user).unwrap();
        prop_assert_ne!(first, second);
    }

    #[test]
    fn test_tampered_token_is_rejected(id in 1i64..1000, flip in 0usize..16) {
        let tokens = test_token_provider();
        let token = tokens.generate_access_token(&user(id, "user@example.com".to_string())).unwrap();

        // Change one character of the signature segment
        let signature_start = token.rfind('.').unwrap() + 1;
        let index = signature_start + flip % (token.len() - signature_start);
        let mut bytes = token.into_bytes();
        bytes[index] = if bytes[index] == b'A' { b'B' } else { b'A' };
        let tampered = String::from_utf8(bytes).unwrap();

        prop_assert!(!tokens.valid_token(&tampered));
    }
}
