//! Repository implementations for database access
//!
//! `Repo<T>` carries the operations every table shares (list, get, delete).
//! Table-specific queries live in inherent impls on `Repo<Breed>` and
//! `Repo<Kitten>` in the submodules.

pub mod breeds;
pub mod kittens;

use std::marker::PhantomData;

use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool};

pub use breeds::{Breed, BreedRepo};
pub use kittens::{Kitten, KittenRepo};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[source] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    #[error("unique constraint violated: {constraint}")]
    UniqueViolation { constraint: String },

    #[error("foreign key constraint violated: {constraint}")]
    ForeignKeyViolation { constraint: String },
}

impl From<sqlx::Error> for DbError {
    fn from(e: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db) = &e {
            let constraint = db.constraint().unwrap_or_default().to_owned();
            if db.is_unique_violation() {
                return Self::UniqueViolation { constraint };
            }
            if db.is_foreign_key_violation() {
                return Self::ForeignKeyViolation { constraint };
            }
        }
        Self::Sqlx(e)
    }
}

/// A table row the generic repository knows how to read and delete.
pub trait Record: for<'r> FromRow<'r, PgRow> + Send + Unpin + 'static {
    /// Name used in not-found errors
    const RESOURCE: &'static str;
    /// Table to delete from
    const TABLE: &'static str;
    /// SELECT producing every column `FromRow` expects, without WHERE/ORDER BY
    const SELECT: &'static str;
    /// Qualified primary key column as it appears in `SELECT`
    const ID_COLUMN: &'static str;
}

/// Generic repository over a single record type
pub struct Repo<'a, T> {
    pool: &'a PgPool,
    _record: PhantomData<fn() -> T>,
}

impl<'a, T: Record> Repo<'a, T> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self {
            pool,
            _record: PhantomData,
        }
    }

    pub(crate) fn pool(&self) -> &'a PgPool {
        self.pool
    }

    /// All records, oldest first.
    pub async fn list(&self) -> Result<Vec<T>, DbError> {
        let sql = format!("{} ORDER BY {} ASC", T::SELECT, T::ID_COLUMN);
        let rows = sqlx::query_as::<_, T>(&sql).fetch_all(self.pool).await?;
        Ok(rows)
    }

    /// A single record, or `None` when the id is unknown.
    pub async fn find(&self, id: i64) -> Result<Option<T>, DbError> {
        let sql = format!("{} WHERE {} = $1", T::SELECT, T::ID_COLUMN);
        let row = sqlx::query_as::<_, T>(&sql)
            .bind(id)
            .fetch_optional(self.pool)
            .await?;
        Ok(row)
    }

    /// A single record; unknown ids are `DbError::NotFound`.
    pub async fn get(&self, id: i64) -> Result<T, DbError> {
        self.find(id).await?.ok_or_else(|| DbError::NotFound {
            resource: T::RESOURCE,
            id: id.to_string(),
        })
    }

    /// Delete by id in a single statement (no read-then-delete).
    ///
    /// Rows still referenced elsewhere surface as `ForeignKeyViolation`.
    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let sql = format!("DELETE FROM {} WHERE id = $1", T::TABLE);
        let result = sqlx::query(&sql).bind(id).execute(self.pool).await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: T::RESOURCE,
                id: id.to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_display() {
        let err = DbError::NotFound {
            resource: Kitten::RESOURCE,
            id: "7".into(),
        };
        assert_eq!(err.to_string(), "not found: kitten '7'");
    }

    #[test]
    fn plain_sqlx_errors_stay_generic() {
        let err = DbError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, DbError::Sqlx(sqlx::Error::RowNotFound)));
    }
}
