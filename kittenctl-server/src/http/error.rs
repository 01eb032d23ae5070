//! API error types with IntoResponse
//!
//! Errors are converted to JSON responses with appropriate status codes.
//! Server-side failures are logged in full and answered with a generic message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;
use crate::models::ValidationError;
use crate::service::ServiceError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Validation failed (400)
    Validation(ValidationError),

    /// Request referenced something unresolvable (400)
    BadRequest { message: String },

    /// Resource not found (404)
    NotFound { message: String },

    /// Uniqueness conflict (409)
    Conflict { message: String },

    /// Database error (500, logged)
    Database(DbError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Body shared by every 500, whatever the cause.
pub(crate) fn internal_error_body() -> serde_json::Value {
    json!({
        "error": "internal_error",
        "message": "something went wrong"
    })
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            Self::Validation(e) => json!({
                "error": "validation_error",
                "message": e.to_string()
            }),
            Self::BadRequest { message } => json!({
                "error": "bad_request",
                "message": message
            }),
            Self::NotFound { message } => json!({
                "error": "not_found",
                "message": message
            }),
            Self::Conflict { message } => json!({
                "error": "conflict",
                "message": message
            }),
            Self::Database(e) => {
                // Log the actual error, return generic message
                tracing::error!("Database error: {}", e);
                internal_error_body()
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        ServiceError::from(e).into()
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::NotFound(message) => Self::NotFound { message },
            ServiceError::BadRequest(message) => Self::BadRequest { message },
            ServiceError::Conflict(message) => Self::Conflict { message },
            ServiceError::Database(e) => Self::Database(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn validation_error_is_400() {
        let err = ApiError::Validation(ValidationError::Empty { field: "color" });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["error"], "validation_error");
        assert_eq!(body["message"], "color cannot be empty");
    }

    #[tokio::test]
    async fn service_errors_map_to_statuses() {
        let cases = [
            (ServiceError::NotFound("Kitten wasn't found".into()), StatusCode::NOT_FOUND),
            (ServiceError::BadRequest("no such breed".into()), StatusCode::BAD_REQUEST),
            (ServiceError::Conflict("Breed already exists".into()), StatusCode::CONFLICT),
        ];

        for (err, expected) in cases {
            let response = ApiError::from(err).into_response();
            assert_eq!(response.status(), expected);
        }
    }

    #[tokio::test]
    async fn conflict_keeps_message() {
        let err = ApiError::from(ServiceError::Conflict("Breed already exists".into()));
        let body = body_json(err.into_response()).await;
        assert_eq!(body["error"], "conflict");
        assert_eq!(body["message"], "Breed already exists");
    }

    #[tokio::test]
    async fn database_error_hides_detail() {
        let err = ApiError::Database(DbError::Sqlx(sqlx::Error::PoolTimedOut));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["message"], "something went wrong");
    }

    #[tokio::test]
    async fn db_not_found_is_404() {
        let err = ApiError::from(DbError::NotFound {
            resource: "kitten",
            id: "3".into(),
        });
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }
}
