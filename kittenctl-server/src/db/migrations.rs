//! Schema migrations for the breeds and kittens tables
//!
//! SQL lives in `kittenctl-server/migrations/` and is embedded at compile time.

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::PgPool;

pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Apply any pending migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrateError> {
    tracing::info!("running database migrations");
    MIGRATOR.run(pool).await?;
    tracing::info!("database schema is up to date");
    Ok(())
}

/// Drop both tables and the migration ledger, then migrate from scratch.
///
/// Destroys all stored breeds and kittens.
pub async fn reset_schema(pool: &PgPool) -> Result<(), MigrateError> {
    tracing::warn!("dropping breeds and kittens tables");

    let mut tx = pool.begin().await?;
    // kittens first: it holds the foreign key into breeds
    for stmt in [
        "DROP TABLE IF EXISTS kittens",
        "DROP TABLE IF EXISTS breeds",
        "DROP TABLE IF EXISTS _sqlx_migrations",
    ] {
        sqlx::query(stmt).execute(&mut *tx).await?;
    }
    tx.commit().await?;

    run_migrations(pool).await
}
