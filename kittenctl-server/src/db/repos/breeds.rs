//! Breed repository
//!
//! - create: plain INSERT; duplicates come back as `UniqueViolation`
//! - find_by_name: exact match on the unique name column

use sqlx::FromRow;

use super::{DbError, Record, Repo};
use crate::models::BreedName;

/// Breed record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Breed {
    pub id: i64,
    pub name: String,
}

impl Record for Breed {
    const RESOURCE: &'static str = "breed";
    const TABLE: &'static str = "breeds";
    const SELECT: &'static str = "SELECT b.id, b.name FROM breeds b";
    const ID_COLUMN: &'static str = "b.id";
}

/// Breed repository
pub type BreedRepo<'a> = Repo<'a, Breed>;

impl<'a> Repo<'a, Breed> {
    /// Insert a breed and return the stored row.
    pub async fn create(&self, name: &BreedName) -> Result<Breed, DbError> {
        let breed = sqlx::query_as::<_, Breed>(
            r#"
            INSERT INTO breeds (name)
            VALUES ($1)
            RETURNING id, name
            "#,
        )
        .bind(name.as_str())
        .fetch_one(self.pool())
        .await?;

        Ok(breed)
    }

    /// Look a breed up by its exact name.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Breed>, DbError> {
        let breed = sqlx::query_as::<_, Breed>(
            r#"
            SELECT b.id, b.name
            FROM breeds b
            WHERE b.name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(self.pool())
        .await?;

        Ok(breed)
    }
}
