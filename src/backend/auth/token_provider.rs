/**
 * Token Provider
 *
 * This module handles JWT generation and validation for user sessions.
 *
 * Tokens are signed with HS256 using the configured secret. Every token
 * carries the issuer, issue and expiry times, the user's email as subject,
 * the user's numeric id in an `id` claim, a random `jti` and a `typ`
 * claim telling access tokens from refresh tokens. Only access tokens
 * authenticate requests; only refresh tokens can be exchanged.
 */

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::backend::auth::users::User;

/// Authority granted to every authenticated user
pub const ROLE_USER: &str = "ROLE_USER";

/// Token signing configuration
#[derive(Debug, Clone)]
pub struct JwtProperties {
    /// Value of the `iss` claim; tokens from other issuers are rejected
    pub issuer: String,
    /// HMAC secret
    pub secret_key: String,
    /// Lifetime of access tokens
    pub access_token_ttl: Duration,
    /// Lifetime of refresh tokens
    pub refresh_token_ttl: Duration,
}

impl Default for JwtProperties {
    fn default() -> Self {
        Self {
            issuer: "blogpress".to_string(),
            secret_key: "blogpress-development-secret-change-me".to_string(),
            access_token_ttl: Duration::hours(2),
            refresh_token_ttl: Duration::days(14),
        }
    }
}

/// What a token may be used for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// Bearer credential for protected endpoints
    Access,
    /// Exchanged at `POST /api/token` for a new access token
    Refresh,
}

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Issuer
    pub iss: String,
    /// Subject (user email)
    pub sub: String,
    /// User ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Token ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,
    /// Token kind
    pub typ: TokenKind,
}

/// Identity recovered from a valid token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Authentication {
    /// The token subject (user email)
    pub username: String,
    /// Granted authorities
    pub authorities: Vec<String>,
}

/// Issues and validates JWTs
#[derive(Clone)]
pub struct TokenProvider {
    properties: JwtProperties,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenProvider {
    pub fn new(properties: JwtProperties) -> Self {
        let encoding_key = EncodingKey::from_secret(properties.secret_key.as_bytes());
        let decoding_key = DecodingKey::from_secret(properties.secret_key.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&properties.issuer]);
        validation.set_required_spec_claims(&["exp", "iss", "sub"]);

        Self {
            properties,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    pub fn properties(&self) -> &JwtProperties {
        &self.properties
    }

    /// Create a token of `kind` for `user` that expires after `expires_in`
    pub fn generate_token(
        &self,
        user: &User,
        kind: TokenKind,
        expires_in: Duration,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = Utc::now();
        self.make_token(kind, now, now + expires_in, user)
    }

    /// Create an access token with the configured access token lifetime
    pub fn generate_access_token(&self, user: &User) -> Result<String, jsonwebtoken::errors::Error> {
        self.generate_token(user, TokenKind::Access, self.properties.access_token_ttl)
    }

    /// Create a refresh token with the configured refresh token lifetime
    pub fn generate_refresh_token(&self, user: &User) -> Result<String, jsonwebtoken::errors::Error> {
        self.generate_token(user, TokenKind::Refresh, self.properties.refresh_token_ttl)
    }

    fn make_token(
        &self,
        kind: TokenKind,
        issued_at: DateTime<Utc>,
        expiry: DateTime<Utc>,
        user: &User,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let claims = Claims {
            iss: self.properties.issuer.clone(),
            sub: user.email.clone(),
            id: Some(user.id),
            iat: issued_at.timestamp(),
            exp: expiry.timestamp(),
            jti: Some(uuid::Uuid::new_v4().to_string()),
            typ: kind,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
    }

    /// Whether the token has a valid signature, issuer and expiry
    pub fn valid_token(&self, token: &str) -> bool {
        match self.get_claims(token) {
            Ok(_) => true,
            Err(e) => {
                tracing::debug!("Token rejected: {:?}", e.kind());
                false
            }
        }
    }

    /// Verify and decode a token
    pub fn get_claims(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)?;
        Ok(token_data.claims)
    }

    /// Verify and decode a token, rejecting it unless it is of `kind`
    pub fn get_claims_of_kind(
        &self,
        token: &str,
        kind: TokenKind,
    ) -> Result<Claims, jsonwebtoken::errors::Error> {
        let claims = self.get_claims(token)?;
        if claims.typ != kind {
            return Err(ErrorKind::InvalidToken.into());
        }
        Ok(claims)
    }

    /// Build the authenticated identity carried by an access token
    ///
    /// Refresh tokens are rejected with `ErrorKind::InvalidToken`.
    pub fn get_authentication(&self, token: &str) -> Result<Authentication, jsonwebtoken::errors::Error> {
        let claims = self.get_claims_of_kind(token, TokenKind::Access)?;
        Ok(Authentication {
            username: claims.sub,
            authorities: vec![ROLE_USER.to_string()],
        })
    }

    /// Extract the user ID claim, if the token carries one
    pub fn get_user_id(&self, token: &str) -> Result<Option<i64>, jsonwebtoken::errors::Error> {
        Ok(self.get_claims(token)?.id)
    }
}
