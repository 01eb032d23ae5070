//! HTTP server command
//!
//! Connects to PostgreSQL, applies pending migrations and serves the API
//! until Ctrl+C or SIGTERM.

use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;

use kittenctl_server::db::{connect_pool, run_migrations, DEFAULT_MAX_CONNECTIONS};
use kittenctl_server::{run_server, ServerConfig};

use super::database_config;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "BIND_ADDR", default_value = "127.0.0.1:8000")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long, env = "CORS_PERMISSIVE")]
    pub cors_permissive: bool,

    /// Database URL (overrides the DB_* variables)
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Maximum pooled database connections
    #[arg(long, env = "DB_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Don't apply pending migrations on startup
    #[arg(long)]
    pub skip_migrations: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let db = database_config(args.database_url.as_deref())?;

    tracing::info!("Starting kittenctl server on {}", args.bind);

    let pool = connect_pool(db.into_connect_options(), args.max_connections)
        .await
        .context("Failed to connect to database")?;

    if args.skip_migrations {
        tracing::warn!("Skipping migrations; schema may be out of date");
    } else {
        run_migrations(&pool)
            .await
            .context("Failed to run database migrations")?;
    }

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
    };

    // Blocks until shutdown
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
