//! Kitten repository
//!
//! Every read LEFT JOINs `breeds` so the breed name travels with the row.

use sqlx::FromRow;

use super::{DbError, Record, Repo};
use crate::models::{KittenChanges, NewKitten};

/// Kitten record from database, with its breed name resolved
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Kitten {
    pub id: i64,
    pub color: String,
    pub age: i32,
    pub description: Option<String>,
    pub breed_id: Option<i64>,
    pub breed_name: Option<String>,
}

impl Record for Kitten {
    const RESOURCE: &'static str = "kitten";
    const TABLE: &'static str = "kittens";
    const SELECT: &'static str = r#"
        SELECT k.id, k.color, k.age, k.description, k.breed_id, b.name AS breed_name
        FROM kittens k
        LEFT JOIN breeds b ON b.id = k.breed_id
    "#;
    const ID_COLUMN: &'static str = "k.id";
}

/// Kitten repository
pub type KittenRepo<'a> = Repo<'a, Kitten>;

impl<'a> Repo<'a, Kitten> {
    /// Insert a kitten and return its id.
    ///
    /// `breed_id` must already be resolved from `kitten.breed`; a breed that
    /// disappeared in between comes back as `ForeignKeyViolation`.
    pub async fn create(&self, kitten: &NewKitten, breed_id: Option<i64>) -> Result<i64, DbError> {
        let (id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO kittens (color, age, description, breed_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(kitten.color.as_str())
        .bind(kitten.age.get())
        .bind(kitten.description.as_ref().map(|d| d.as_str()))
        .bind(breed_id)
        .fetch_one(self.pool())
        .await?;

        Ok(id)
    }

    /// Kittens whose breed has exactly this name, oldest first.
    pub async fn list_by_breed(&self, breed_name: &str) -> Result<Vec<Kitten>, DbError> {
        let sql = format!(
            "{} WHERE b.name = $1 ORDER BY {} ASC",
            Kitten::SELECT,
            Kitten::ID_COLUMN
        );
        let rows = sqlx::query_as::<_, Kitten>(&sql)
            .bind(breed_name)
            .fetch_all(self.pool())
            .await?;

        Ok(rows)
    }

    /// Apply a partial update in one statement.
    ///
    /// Absent fields keep their stored value. `breed_id` replaces the
    /// reference only when `Some`.
    pub async fn update(
        &self,
        id: i64,
        changes: &KittenChanges,
        breed_id: Option<i64>,
    ) -> Result<(), DbError> {
        let updated: Option<(i64,)> = sqlx::query_as(
            r#"
            UPDATE kittens SET
                color = COALESCE($2, color),
                age = COALESCE($3, age),
                description = COALESCE($4, description),
                breed_id = COALESCE($5, breed_id)
            WHERE id = $1
            RETURNING id
            "#,
        )
        .bind(id)
        .bind(changes.color.as_ref().map(|c| c.as_str()))
        .bind(changes.age.map(|a| a.get()))
        .bind(changes.description.as_ref().map(|d| d.as_str()))
        .bind(breed_id)
        .fetch_optional(self.pool())
        .await?;

        match updated {
            Some(_) => Ok(()),
            None => Err(DbError::NotFound {
                resource: Kitten::RESOURCE,
                id: id.to_string(),
            }),
        }
    }
}
