//! Database configuration from the environment
//!
//! Either a full `DATABASE_URL`, or its parts:
//! - `DB_USER`, `DB_PASSWORD`, `DB_SERVER`, `DB_PORT`, `DB_NAME`
//!
//! `DATABASE_URL` wins when both are present. Parts are passed to sqlx as
//! structured options, so passwords need no URL escaping.

use sqlx::postgres::PgConnectOptions;

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing environment variable {0} (or set DATABASE_URL)")]
    Missing(&'static str),

    #[error("invalid DB_PORT '{0}': expected a port number")]
    InvalidPort(String),

    #[error("invalid DATABASE_URL: {0}")]
    InvalidUrl(#[source] sqlx::Error),
}

/// Where to find the database
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    options: PgConnectOptions,
}

impl DatabaseConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Use an explicit connection URL.
    pub fn from_url(url: &str) -> Result<Self, ConfigError> {
        let options = url.parse::<PgConnectOptions>().map_err(ConfigError::InvalidUrl)?;
        Ok(Self { options })
    }

    /// Read configuration through `lookup` (for testing).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("DATABASE_URL").filter(|u| !u.is_empty()) {
            return Self::from_url(&url);
        }

        let require = |key: &'static str| lookup(key).ok_or(ConfigError::Missing(key));

        let user = require("DB_USER")?;
        let password = require("DB_PASSWORD")?;
        let host = require("DB_SERVER")?;
        let port_raw = require("DB_PORT")?;
        let port = port_raw
            .trim()
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort(port_raw.clone()))?;
        let database = require("DB_NAME")?;

        let options = PgConnectOptions::new()
            .host(&host)
            .port(port)
            .username(&user)
            .password(&password)
            .database(&database);

        Ok(Self { options })
    }

    pub fn connect_options(&self) -> &PgConnectOptions {
        &self.options
    }

    pub fn into_connect_options(self) -> PgConnectOptions {
        self.options
    }
}
