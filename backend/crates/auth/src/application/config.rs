//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

use platform::cookie::CookieConfig;
use uuid::Uuid;

use crate::error::AuthResult;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

/// Minimum signing secret length in bytes
pub const MIN_TOKEN_SECRET_LEN: usize = 32;

#[derive(Clone)]
pub struct AuthConfig {
    /// Session cookie name
    pub token_cookie_name: String,
    /// HS256 signing secret (at least 32 bytes)
    pub token_secret: Vec<u8>,
    /// Session token lifetime (30 days)
    pub token_ttl: Duration,
    /// Whether to require Secure cookie
    pub cookie_secure: bool,
    pub cookie_same_site: SameSite,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self::with_secret(platform::crypto::random_bytes(MIN_TOKEN_SECRET_LEN))
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("token_cookie_name", &self.token_cookie_name)
            .field("token_secret", &"[REDACTED]")
            .field("token_ttl", &self.token_ttl)
            .field("cookie_secure", &self.cookie_secure)
            .field("cookie_same_site", &self.cookie_same_site)
            .field("password_pepper", &self.password_pepper.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl AuthConfig {
    /// Production defaults around an explicit signing secret
    pub fn with_secret(token_secret: Vec<u8>) -> Self {
        Self {
            token_cookie_name: "token".to_string(),
            token_secret,
            token_ttl: Duration::from_secs(30 * 24 * 3600),
            cookie_secure: true,
            cookie_same_site: SameSite::Strict,
            password_pepper: None,
        }
    }

    /// Random secret and an insecure cookie, for local development
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            ..Self::default()
        }
    }

    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }

    /// Attributes of the session cookie
    pub fn cookie(&self) -> CookieConfig {
        CookieConfig {
            name: self.token_cookie_name.clone(),
            secure: self.cookie_secure,
            http_only: true,
            same_site: self.cookie_same_site,
            path: "/".to_string(),
            max_age_secs: Some(self.token_ttl.as_secs() as i64),
        }
    }

    /// Sign a session token for the given principal id
    pub fn issue_token(&self, subject: Uuid) -> AuthResult<String> {
        Ok(platform::token::issue(
            &self.token_secret,
            subject,
            self.token_ttl,
        )?)
    }

    /// Verify a session token and return its subject
    pub fn verify_token(&self, token: &str) -> AuthResult<Uuid> {
        Ok(platform::token::verify(&self.token_secret, token)?.sub)
    }
}
