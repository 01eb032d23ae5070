//! Breed endpoints

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::{Deserialize, Serialize};

use super::InstanceId;
use crate::db::Breed;
use crate::http::error::ApiError;
use crate::http::extractors::ValidJson;
use crate::models::BreedName;
use crate::service::BreedService;
use crate::state::AppState;

/// Create breed request
#[derive(Debug, Deserialize)]
pub struct CreateBreedRequest {
    #[serde(rename = "breed_name", alias = "name")]
    pub name: String,
}

/// Breed response
#[derive(Debug, Serialize)]
pub struct BreedResponse {
    pub instance_id: i64,
    pub name: String,
}

impl From<Breed> for BreedResponse {
    fn from(b: Breed) -> Self {
        Self {
            instance_id: b.id,
            name: b.name,
        }
    }
}

/// GET /breeds - list all breeds
async fn list_breeds(State(state): State<AppState>) -> Result<Json<Vec<BreedResponse>>, ApiError> {
    let breeds = BreedService::new(state.pool()).list().await?;
    Ok(Json(breeds.into_iter().map(BreedResponse::from).collect()))
}

/// POST /breeds - create a new breed
async fn create_breed(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<CreateBreedRequest>,
) -> Result<(StatusCode, Json<InstanceId>), ApiError> {
    let name = BreedName::new(&req.name)?;
    let breed = BreedService::new(state.pool()).create(name).await?;

    Ok((
        StatusCode::CREATED,
        Json(InstanceId {
            instance_id: breed.id,
        }),
    ))
}

/// Breed routes
pub fn router() -> Router<AppState> {
    Router::new().route("/breeds", get(list_breeds).post(create_breed))
}
