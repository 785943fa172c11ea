//! Hand-built JWTs
//!
//! Tokens signed outside `TokenProvider` so tests can produce the claim
//! sets it never would: expired, foreign issuer, wrong key.

use blogpress::backend::auth::{Claims, JwtProperties, TokenKind};
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};

/// Builder for test tokens, defaulting to a valid access token for `subject`
pub struct JwtFactory {
    pub issuer: String,
    pub secret_key: String,
    pub subject: String,
    pub id: Option<i64>,
    pub kind: TokenKind,
    pub issued_at: chrono::DateTime<Utc>,
    pub expires_at: chrono::DateTime<Utc>,
}

impl JwtFactory {
    pub fn for_subject(subject: &str) -> Self {
        let properties = JwtProperties::default();
        let now = Utc::now();
        Self {
            issuer: properties.issuer,
            secret_key: properties.secret_key,
            subject: subject.to_string(),
            id: None,
            kind: TokenKind::Access,
            issued_at: now,
            expires_at: now + Duration::days(14),
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn refresh(mut self) -> Self {
        self.kind = TokenKind::Refresh;
        self
    }

    /// Expired well past the validator's leeway
    pub fn expired(mut self) -> Self {
        self.issued_at = Utc::now() - Duration::days(7);
        self.expires_at = self.issued_at + Duration::hours(1);
        self
    }

    pub fn with_issuer(mut self, issuer: &str) -> Self {
        self.issuer = issuer.to_string();
        self
    }

    pub fn with_secret(mut self, secret_key: &str) -> Self {
        self.secret_key = secret_key.to_string();
        self
    }

    pub fn create_token(&self) -> String {
        let claims = Claims {
            iss: self.issuer.clone(),
            sub: self.subject.clone(),
            id: self.id,
            iat: self.issued_at.timestamp(),
            exp: self.expires_at.timestamp(),
            jti: None,
            typ: self.kind,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret_key.as_bytes()),
        )
        .expect("Failed to encode test token")
    }
}
