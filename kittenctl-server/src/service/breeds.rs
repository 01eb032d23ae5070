//! Breed service

use sqlx::PgPool;

use super::{log_failure, ServiceError, ServiceResult};
use crate::db::{Breed, BreedRepo, DbError};
use crate::models::BreedName;

pub struct BreedService<'a> {
    breeds: BreedRepo<'a>,
}

impl<'a> BreedService<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self {
            breeds: BreedRepo::new(pool),
        }
    }

    /// Every breed, in creation order.
    #[tracing::instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<Breed>> {
        let breeds = self
            .breeds
            .list()
            .await
            .inspect_err(|e| log_failure("list breeds", e))?;
        Ok(breeds)
    }

    /// Create a breed. Names are unique; a duplicate is a conflict.
    #[tracing::instrument(skip(self), fields(name = %name.as_str()))]
    pub async fn create(&self, name: BreedName) -> ServiceResult<Breed> {
        match self.breeds.create(&name).await {
            Ok(breed) => {
                tracing::info!(id = breed.id, "breed created");
                Ok(breed)
            }
            Err(DbError::UniqueViolation { .. }) => {
                tracing::warn!("breed already exists");
                Err(ServiceError::Conflict("Breed already exists".into()))
            }
            Err(e) => {
                log_failure("create breed", &e);
                Err(e.into())
            }
        }
    }
}
