//! Kitten service
//!
//! Breed references arrive as names and are resolved to ids here, before
//! anything is written.

use sqlx::PgPool;

use super::{log_failure, ServiceError, ServiceResult};
use crate::db::{BreedRepo, DbError, Kitten, KittenRepo};
use crate::models::{BreedName, KittenChanges, NewKitten};

pub struct KittenService<'a> {
    kittens: KittenRepo<'a>,
    breeds: BreedRepo<'a>,
}

impl<'a> KittenService<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self {
            kittens: KittenRepo::new(pool),
            breeds: BreedRepo::new(pool),
        }
    }

    /// All kittens, or only those of `breed` when given.
    ///
    /// The filter is trimmed like any breed name. Filtering by a breed that
    /// doesn't exist is `NotFound`, not an empty list.
    #[tracing::instrument(skip(self))]
    pub async fn list(&self, breed: Option<&str>) -> ServiceResult<Vec<Kitten>> {
        let Some(breed) = breed.map(str::trim).filter(|b| !b.is_empty()) else {
            let kittens = self
                .kittens
                .list()
                .await
                .inspect_err(|e| log_failure("list kittens", e))?;
            return Ok(kittens);
        };

        let known = self
            .breeds
            .find_by_name(breed)
            .await
            .inspect_err(|e| log_failure("look up breed", e))?;
        if known.is_none() {
            return Err(ServiceError::NotFound("Breed wasn't found".into()));
        }

        let kittens = self
            .kittens
            .list_by_breed(breed)
            .await
            .inspect_err(|e| log_failure("list kittens by breed", e))?;
        Ok(kittens)
    }

    #[tracing::instrument(skip(self))]
    pub async fn get(&self, id: i64) -> ServiceResult<Kitten> {
        let kitten = self
            .kittens
            .get(id)
            .await
            .inspect_err(|e| log_failure("get kitten", e))?;
        Ok(kitten)
    }

    /// Create a kitten and return its id.
    #[tracing::instrument(skip(self, kitten))]
    pub async fn create(&self, kitten: NewKitten) -> ServiceResult<i64> {
        let unknown_breed = |name: &BreedName| {
            ServiceError::BadRequest(format!(
                "Can't add kitten info: breed {} wasn't found",
                name.as_str()
            ))
        };

        let breed_id = match &kitten.breed {
            Some(name) => Some(self.resolve_breed(name).await?.ok_or_else(|| unknown_breed(name))?),
            None => None,
        };

        match self.kittens.create(&kitten, breed_id).await {
            Ok(id) => {
                tracing::info!(id, ?breed_id, "kitten created");
                Ok(id)
            }
            // The breed vanished between lookup and insert
            Err(DbError::ForeignKeyViolation { .. }) => match &kitten.breed {
                Some(name) => Err(unknown_breed(name)),
                None => Err(ServiceError::BadRequest("Can't add kitten info".into())),
            },
            Err(e) => {
                log_failure("create kitten", &e);
                Err(e.into())
            }
        }
    }

    /// Apply a partial update and return the kitten as stored afterwards.
    #[tracing::instrument(skip(self, changes))]
    pub async fn update(&self, id: i64, changes: KittenChanges) -> ServiceResult<Kitten> {
        let unknown_breed = |name: &BreedName| {
            ServiceError::BadRequest(format!(
                "Can't perform update: breed '{}' wasn't found. In order to add breed, create it first",
                name.as_str()
            ))
        };

        let breed_id = match &changes.breed {
            Some(name) => Some(self.resolve_breed(name).await?.ok_or_else(|| unknown_breed(name))?),
            None => None,
        };

        if !changes.is_empty() {
            match self.kittens.update(id, &changes, breed_id).await {
                Ok(()) => tracing::info!(id, "kitten updated"),
                Err(DbError::ForeignKeyViolation { .. }) => {
                    if let Some(name) = &changes.breed {
                        return Err(unknown_breed(name));
                    }
                    return Err(ServiceError::BadRequest("Can't perform update".into()));
                }
                Err(e) => {
                    log_failure("update kitten", &e);
                    return Err(e.into());
                }
            }
        }

        self.get(id).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> ServiceResult<()> {
        self.kittens
            .delete(id)
            .await
            .inspect_err(|e| log_failure("delete kitten", e))?;
        tracing::info!(id, "kitten deleted");
        Ok(())
    }

    async fn resolve_breed(&self, name: &BreedName) -> ServiceResult<Option<i64>> {
        let breed = self
            .breeds
            .find_by_name(name.as_str())
            .await
            .inspect_err(|e| log_failure("look up breed", e))?;
        Ok(breed.map(|b| b.id))
    }
}
