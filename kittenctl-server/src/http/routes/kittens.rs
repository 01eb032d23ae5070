//! Kitten endpoints

use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use super::InstanceId;
use crate::db::Kitten;
use crate::http::error::ApiError;
use crate::http::extractors::{ValidId, ValidJson, ValidQuery};
use crate::models::{Age, BreedName, Color, Description, KittenChanges, NewKitten, ValidationError};
use crate::service::KittenService;
use crate::state::AppState;

/// Query parameters for GET /kittens
#[derive(Debug, Default, Deserialize)]
pub struct ListKittensParams {
    pub breed: Option<String>,
}

/// Create kitten request
#[derive(Debug, Deserialize)]
pub struct CreateKittenRequest {
    pub color: String,
    pub age: i32,
    pub description: Option<String>,
    pub breed: Option<String>,
}

impl CreateKittenRequest {
    pub fn validate(self) -> Result<NewKitten, ValidationError> {
        Ok(NewKitten {
            color: Color::new(&self.color)?,
            age: Age::new(self.age)?,
            description: self.description.as_deref().map(Description::new).transpose()?,
            breed: self.breed.as_deref().map(BreedName::new).transpose()?,
        })
    }
}

/// Partial update request; absent or null fields are left unchanged
#[derive(Debug, Default, Deserialize)]
pub struct UpdateKittenRequest {
    pub color: Option<String>,
    pub age: Option<i32>,
    pub description: Option<String>,
    pub breed: Option<String>,
}

impl UpdateKittenRequest {
    pub fn validate(self) -> Result<KittenChanges, ValidationError> {
        Ok(KittenChanges {
            color: self.color.as_deref().map(Color::new).transpose()?,
            age: self.age.map(Age::new).transpose()?,
            description: self.description.as_deref().map(Description::new).transpose()?,
            breed: self.breed.as_deref().map(BreedName::new).transpose()?,
        })
    }
}

/// Kitten response. A kitten without a breed has `breed: ""`.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct KittenResponse {
    pub id: i64,
    pub color: String,
    pub age: i32,
    pub description: Option<String>,
    pub breed: String,
}

impl From<Kitten> for KittenResponse {
    fn from(k: Kitten) -> Self {
        Self {
            id: k.id,
            color: k.color,
            age: k.age,
            description: k.description,
            breed: k.breed_name.unwrap_or_default(),
        }
    }
}

/// GET /kittens - list kittens, optionally filtered by breed name
async fn list_kittens(
    State(state): State<AppState>,
    ValidQuery(params): ValidQuery<ListKittensParams>,
) -> Result<Json<Vec<KittenResponse>>, ApiError> {
    let kittens = KittenService::new(state.pool())
        .list(params.breed.as_deref())
        .await?;

    Ok(Json(kittens.into_iter().map(KittenResponse::from).collect()))
}

/// GET /kittens/{id} - get a single kitten
async fn get_kitten(
    State(state): State<AppState>,
    ValidId(id): ValidId,
) -> Result<Json<KittenResponse>, ApiError> {
    let kitten = KittenService::new(state.pool()).get(id).await?;
    Ok(Json(KittenResponse::from(kitten)))
}

/// POST /kittens - create a kitten
async fn create_kitten(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<CreateKittenRequest>,
) -> Result<(StatusCode, Json<InstanceId>), ApiError> {
    let kitten = req.validate()?;
    let id = KittenService::new(state.pool()).create(kitten).await?;

    Ok((StatusCode::CREATED, Json(InstanceId { instance_id: id })))
}

/// PATCH /kittens/{id} - partially update a kitten
async fn update_kitten(
    State(state): State<AppState>,
    ValidId(id): ValidId,
    ValidJson(req): ValidJson<UpdateKittenRequest>,
) -> Result<Json<KittenResponse>, ApiError> {
    let changes = req.validate()?;
    let kitten = KittenService::new(state.pool()).update(id, changes).await?;
    Ok(Json(KittenResponse::from(kitten)))
}

/// DELETE /kittens/{id} - delete a kitten
async fn delete_kitten(
    State(state): State<AppState>,
    ValidId(id): ValidId,
) -> Result<StatusCode, ApiError> {
    KittenService::new(state.pool()).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Kitten routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/kittens", get(list_kittens).post(create_kitten))
        .route(
            "/kittens/{id}",
            get(get_kitten).patch(update_kitten).delete(delete_kitten),
        )
}
