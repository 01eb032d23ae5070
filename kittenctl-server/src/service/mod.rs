//! Service layer - business rules between routes and repositories
//!
//! Services resolve breed names to ids, turn repository outcomes into
//! user-facing errors and log unexpected database failures.

pub mod breeds;
pub mod kittens;

use thiserror::Error;

use crate::db::DbError;

pub use breeds::BreedService;
pub use kittens::KittenService;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    NotFound(String),

    /// The request referenced something that doesn't exist
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Conflict(String),

    #[error(transparent)]
    Database(DbError),
}

impl From<DbError> for ServiceError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { resource, .. } => Self::NotFound(not_found_message(resource)),
            other => Self::Database(other),
        }
    }
}

/// "kitten" -> "Kitten wasn't found"
fn not_found_message(resource: &str) -> String {
    let mut chars = resource.chars();
    let capitalized: String = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    };
    format!("{} wasn't found", capitalized)
}

/// Log failures the caller can't fix. Not-found is an expected outcome.
fn log_failure(operation: &str, e: &DbError) {
    if !matches!(e, DbError::NotFound { .. }) {
        tracing::error!(error = %e, "failed to {}", operation);
    }
}
