//! Command implementations for kittenctl CLI

pub mod migrate;
pub mod serve;

pub use migrate::run_migrate;
pub use serve::run_serve;

use anyhow::{Context, Result};
use kittenctl_server::DatabaseConfig;

/// An explicit URL (flag or DATABASE_URL), else the DB_* variables.
fn database_config(database_url: Option<&str>) -> Result<DatabaseConfig> {
    match database_url.filter(|url| !url.is_empty()) {
        Some(url) => DatabaseConfig::from_url(url).context("Invalid database URL"),
        None => DatabaseConfig::from_env()
            .context("Database not configured. Set DATABASE_URL or DB_USER/DB_PASSWORD/DB_SERVER/DB_PORT/DB_NAME (a .env file works too)"),
    }
}
