//! Signed Session Tokens
//!
//! A session token is an HS256 JWT binding a principal identifier to an
//! expiry (`sub`, `iat`, `exp`). Tokens are stateless; the signature is
//! checked first and `exp` is compared against the caller's clock with no
//! leeway.

use std::time::Duration;

use chrono::{DateTime, Utc};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode,
    errors::ErrorKind,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Claims carried by a session token (seconds since the Unix epoch)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Principal identifier
    pub sub: Uuid,
    /// Issued at
    pub iat: i64,
    /// Expires at
    pub exp: i64,
}

impl TokenClaims {
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("Malformed token")]
    Malformed,

    #[error("Invalid token signature")]
    BadSignature,

    #[error("Token expired")]
    Expired,

    #[error("Failed to encode token claims")]
    Encode,
}

/// Issue a token for `subject` valid for `ttl` from now
pub fn issue(secret: &[u8], subject: Uuid, ttl: Duration) -> Result<String, TokenError> {
    issue_at(secret, subject, Utc::now(), ttl)
}

/// Issue a token as if the current time were `now`
pub fn issue_at(
    secret: &[u8],
    subject: Uuid,
    now: DateTime<Utc>,
    ttl: Duration,
) -> Result<String, TokenError> {
    let iat = now.timestamp();
    let claims = TokenClaims {
        sub: subject,
        iat,
        exp: iat.saturating_add(ttl.as_secs() as i64),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret),
    )
    .map_err(|_| TokenError::Encode)
}

/// Verify signature and expiry, returning the claims
pub fn verify(secret: &[u8], token: &str) -> Result<TokenClaims, TokenError> {
    verify_at(secret, token, Utc::now())
}

/// Verify as if the current time were `now`
pub fn verify_at(
    secret: &[u8],
    token: &str,
    now: DateTime<Utc>,
) -> Result<TokenClaims, TokenError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;
    // Expiry is checked below against `now`, not the system clock
    validation.validate_exp = false;

    let claims = decode::<TokenClaims>(token, &DecodingKey::from_secret(secret), &validation)
        .map_err(|err| match err.kind() {
            ErrorKind::InvalidSignature => TokenError::BadSignature,
            ErrorKind::ExpiredSignature => TokenError::Expired,
            _ => TokenError::Malformed,
        })?
        .claims;

    if now.timestamp() >= claims.exp {
        return Err(TokenError::Expired);
    }

    Ok(claims)
}
