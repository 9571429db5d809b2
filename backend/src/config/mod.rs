//! Central module for application-wide configuration settings.
//!
//! Configuration is read from the environment once at startup and shared
//! immutably afterwards: the token signing secret, token lifetime, bcrypt
//! cost factor, database URL and listen port.

use std::time::Duration;

/// Token signing and password hashing parameters, read-only after startup.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// HMAC secret used to sign and verify tokens.
    pub jwt_secret: String,
    /// Lifetime of an issued token.
    pub token_ttl: Duration,
    /// bcrypt work factor for password hashing.
    pub bcrypt_cost: u32,
}

/// Top-level application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Postgres connection URL.
    pub database_url: String,
    /// HTTP listen port.
    pub port: u16,
    /// Authentication parameters.
    pub auth: AuthConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// `JWT_SECRET` and `DATABASE_URL` are required; `TOKEN_TTL_HOURS`
    /// defaults to 24, `BCRYPT_COST` to 10 and `PORT` to 3000.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url =
            std::env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL"))?;

        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let jwt_secret =
            std::env::var("JWT_SECRET").map_err(|_| ConfigError::Missing("JWT_SECRET"))?;

        let ttl_hours: u64 = std::env::var("TOKEN_TTL_HOURS")
            .unwrap_or_else(|_| "24".to_string())
            .parse()
            .map_err(|_| ConfigError::Invalid("TOKEN_TTL_HOURS"))?;

        let bcrypt_cost: u32 = std::env::var("BCRYPT_COST")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .map_err(|_| ConfigError::Invalid("BCRYPT_COST"))?;

        Ok(Self {
            database_url,
            port,
            auth: AuthConfig {
                jwt_secret,
                token_ttl: Duration::from_secs(ttl_hours * 3600),
                bcrypt_cost,
            },
        })
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("invalid value for environment variable: {0}")]
    Invalid(&'static str),
}
