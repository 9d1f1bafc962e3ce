//! Server Configuration
//!
//! Read once at startup from the environment (and `.env`).

use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, bail};
use auth::AuthConfig;
use auth::application::config::MIN_TOKEN_SECRET_LEN;
use axum::http::HeaderValue;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_TOKEN_TTL_DAYS: u64 = 30;

#[derive(Debug)]
pub struct ServerConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub bind_addr: SocketAddr,
    pub cors_origins: Vec<HeaderValue>,
    pub auth: AuthConfig,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

        let max_connections = parse_or("DATABASE_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?;

        let bind_addr = env::var("BIND_ADDR")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
            .parse()
            .context("BIND_ADDR must be a socket address")?;

        let cors_origins = env::var("CORS_ORIGIN")
            .unwrap_or_else(|_| DEFAULT_CORS_ORIGIN.to_string())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(|origin| {
                origin
                    .parse()
                    .with_context(|| format!("invalid CORS origin: {origin}"))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        Ok(Self {
            database_url,
            max_connections,
            bind_addr,
            cors_origins,
            auth: auth_config()?,
        })
    }
}

fn auth_config() -> anyhow::Result<AuthConfig> {
    let production = env::var("APP_ENV").is_ok_and(|v| v.eq_ignore_ascii_case("production"));

    let mut config = match env::var("TOKEN_SECRET") {
        Ok(secret) => {
            if secret.len() < MIN_TOKEN_SECRET_LEN {
                bail!("TOKEN_SECRET must be at least {MIN_TOKEN_SECRET_LEN} bytes");
            }
            AuthConfig::with_secret(secret.into_bytes())
        }
        Err(_) if production => bail!("TOKEN_SECRET must be set in production"),
        Err(_) => {
            tracing::warn!("TOKEN_SECRET not set, using a random secret; sessions end on restart");
            AuthConfig::default()
        }
    };

    config.cookie_secure = production;

    let ttl_days = parse_or("TOKEN_TTL_DAYS", DEFAULT_TOKEN_TTL_DAYS)?;
    if ttl_days == 0 {
        bail!("TOKEN_TTL_DAYS must be positive");
    }
    config.token_ttl = Duration::from_secs(ttl_days * 24 * 3600);

    config.password_pepper = env::var("PASSWORD_PEPPER")
        .ok()
        .filter(|p| !p.is_empty())
        .map(String::into_bytes);

    Ok(config)
}

fn parse_or<T>(name: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{name} must be a number")),
        Err(_) => Ok(default),
    }
}
