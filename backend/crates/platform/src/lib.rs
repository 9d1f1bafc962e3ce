//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Secure random bytes
//! - Password hashing (Argon2id)
//! - Signed session tokens (HS256 JWT)
//! - Cookie and bearer-token extraction

pub mod cookie;
pub mod crypto;
pub mod password;
pub mod token;
