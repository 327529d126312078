//! Bearer-token types: JWT claims and the signing key material.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::server::model::user::Account;
use sea_orm::ActiveEnum;

/// Claims carried inside every issued bearer token.
///
/// `sub` is the account id; `role` is the account's role at issue time, so a
/// role change invalidates outstanding tokens only once they expire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Account id the token was issued for.
    pub sub: i32,
    pub username: String,
    pub role: String,
    /// Issued-at, seconds since the Unix epoch.
    pub iat: i64,
    /// Expiry, seconds since the Unix epoch.
    pub exp: i64,
}

/// Signing and verification keys plus the token lifetime.
///
/// Constructed once from configuration and carried in `AppState`; nothing in
/// the codebase reads the secret from a global.
#[derive(Clone)]
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: chrono::Duration,
}

impl TokenKeys {
    /// Creates token keys from the configured secret and lifetime.
    ///
    /// # Arguments
    /// - `secret` - HMAC secret for HS256 signing
    /// - `ttl_hours` - Token lifetime in hours (24 by default in `Config`)
    ///
    /// # Returns
    /// - `TokenKeys` - Key material ready for issuing and validating tokens
    pub fn new(secret: &str, ttl_hours: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl: chrono::Duration::hours(ttl_hours),
        }
    }

    /// Issues a signed bearer token for an account.
    ///
    /// # Arguments
    /// - `account` - The account to issue the token for
    ///
    /// # Returns
    /// - `Ok(String)` - Encoded JWT
    /// - `Err(jsonwebtoken::errors::Error)` - Encoding failure
    pub fn issue(&self, account: &Account) -> Result<String, jsonwebtoken::errors::Error> {
        let now = chrono::Utc::now();
        let claims = Claims {
            sub: account.id,
            username: account.username.clone(),
            role: account.role.to_value(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding)
    }

    /// Decodes and verifies a bearer token.
    ///
    /// Signature and expiry are checked in this single step; callers only
    /// need to confirm the referenced account still exists.
    ///
    /// # Arguments
    /// - `token` - Raw JWT from the Authorization header
    ///
    /// # Returns
    /// - `Ok(Claims)` - Verified claims
    /// - `Err(jsonwebtoken::errors::Error)` - Malformed, tampered or expired token
    pub fn decode(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let data = decode::<Claims>(token, &self.decoding, &Validation::default())?;

        Ok(data.claims)
    }
}
