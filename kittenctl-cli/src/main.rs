//! kittenctl CLI - run and maintain the kittens service
//!
//! - `serve`: HTTP API for breeds and kittens
//! - `migrate`: apply (or reset) the database schema
//!
//! Settings come from flags, the environment, or a `.env` file in the
//! working directory (or any parent).

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use tracing_setup::{LogFormat, LogLevel, TracingConfig};

#[derive(Parser, Debug)]
#[command(
    name = "kittenctl",
    author,
    version,
    about = "CRUD service for kittens and their breeds, backed by PostgreSQL"
)]
struct Cli {
    /// Minimum log level (RUST_LOG overrides)
    #[arg(long, global = true, env = "LOG_LEVEL", value_enum, ignore_case = true, default_value = "debug")]
    log_level: LogLevel,

    /// Log line format
    #[arg(long, global = true, env = "LOG_FORMAT", value_enum, default_value = "compact")]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),

    /// Apply database migrations
    Migrate(commands::migrate::MigrateArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Before parsing, so clap's env fallbacks see .env values
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_setup::init(&TracingConfig {
        level: cli.log_level,
        format: cli.log_format,
    })
    .context("failed to initialize logging")?;

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::Migrate(args) => commands::run_migrate(args).await?,
    }
    Ok(())
}
