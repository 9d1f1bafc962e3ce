//! Teacher User Name
//!
//! A teacher's public handle. Input is NFKC-normalized, trimmed and
//! lower-cased; the stored value is always the canonical form.
//!
//! Invariants:
//! - 3 to 30 characters
//! - ASCII letters, digits and `_ . -` only
//! - starts with a letter or digit

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use unicode_normalization::UnicodeNormalization;

pub const USER_NAME_MIN_LENGTH: usize = 3;
pub const USER_NAME_MAX_LENGTH: usize = 30;

const ALLOWED_SPECIAL_CHARS: &[char] = &['_', '.', '-'];

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserName(String);

impl UserName {
    pub fn new(raw: impl AsRef<str>) -> AppResult<Self> {
        let normalized: String = raw.as_ref().nfkc().collect();
        let canonical = normalized.trim().to_lowercase();

        let len = canonical.chars().count();
        if !(USER_NAME_MIN_LENGTH..=USER_NAME_MAX_LENGTH).contains(&len) {
            return Err(AppError::bad_request(format!(
                "Username must be {USER_NAME_MIN_LENGTH} to {USER_NAME_MAX_LENGTH} characters"
            )));
        }

        if !canonical
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || ALLOWED_SPECIAL_CHARS.contains(&c))
        {
            return Err(AppError::bad_request(
                "Username may only contain letters, digits, '_', '.' and '-'",
            ));
        }

        if !canonical.starts_with(|c: char| c.is_ascii_alphanumeric()) {
            return Err(AppError::bad_request(
                "Username must start with a letter or digit",
            ));
        }

        Ok(Self(canonical))
    }

    pub fn from_db(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
