//! Schema migration command

use anyhow::{Context, Result};
use clap::Parser;

use kittenctl_server::db::{connect_pool, reset_schema, run_migrations};

use super::database_config;

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// Database URL (overrides the DB_* variables)
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Drop the breeds and kittens tables first (destroys all data)
    #[arg(long)]
    pub reset: bool,
}

/// Apply migrations, optionally recreating the schema from scratch
pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let db = database_config(args.database_url.as_deref())?;

    let pool = connect_pool(db.into_connect_options(), 1)
        .await
        .context("Failed to connect to database")?;

    if args.reset {
        reset_schema(&pool)
            .await
            .context("Failed to reset database schema")?;
        tracing::info!("Schema recreated");
    } else {
        run_migrations(&pool)
            .await
            .context("Failed to run database migrations")?;
    }

    pool.close().await;
    Ok(())
}
