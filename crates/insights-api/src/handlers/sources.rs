//! Source HTTP handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use insights_core::{validate_source_fields, Source};

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::handlers::IdResponse;
use crate::AppState;

/// Request body for creating or updating a source.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceRequest {
    pub name: String,
    pub description: Option<String>,
    pub isbn13: Option<String>,
}

impl SourceRequest {
    fn validate(&self) -> Result<(), ApiError> {
        validate_source_fields(
            &self.name,
            self.description.as_deref(),
            self.isbn13.as_deref(),
        )?;
        Ok(())
    }

    fn into_source(self, id: i64, user_id: String) -> Source {
        Source {
            id,
            user_id,
            name: self.name,
            description: self.description,
            isbn13: self.isbn13,
        }
    }
}

/// Create a source owned by the calling user.
///
/// # Returns
/// - 201 Created with `{"id": <id>}`
/// - 400 Bad Request if field validation fails
/// - 404 Not Found if the caller is not registered
pub async fn create_source(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(req): Json<SourceRequest>,
) -> Result<(StatusCode, Json<IdResponse>), ApiError> {
    req.validate()?;
    let id = state.sources.create(&req.into_source(0, user_id)).await?;
    Ok((StatusCode::CREATED, Json(IdResponse { id })))
}

/// List all sources owned by the calling user.
pub async fn list_sources(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<Source>>, ApiError> {
    let sources = state.sources.list(&user_id).await?;
    Ok(Json(sources))
}

/// Update a source owned by the calling user.
///
/// # Returns
/// - 202 Accepted on success
/// - 400 Bad Request if field validation fails
/// - 404 Not Found if no source with this id belongs to the caller
pub async fn update_source(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<i64>,
    Json(req): Json<SourceRequest>,
) -> Result<StatusCode, ApiError> {
    req.validate()?;
    state.sources.update(&req.into_source(id, user_id)).await?;
    Ok(StatusCode::ACCEPTED)
}

/// Delete a source owned by the calling user.
///
/// # Returns
/// - 204 No Content on success
/// - 404 Not Found if no source with this id belongs to the caller
pub async fn delete_source(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.sources.delete(id, &user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_request_optional_fields() {
        let req: SourceRequest =
            serde_json::from_str(r#"{"name": "Atomic Habits"}"#).unwrap();
        assert_eq!(req.name, "Atomic Habits");
        assert_eq!(req.description, None);
        assert_eq!(req.isbn13, None);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_source_request_full_body() {
        let req: SourceRequest = serde_json::from_str(
            r#"{
                "name": "Atomic Habits",
                "description": null,
                "isbn13": "9780735211292"
            }"#,
        )
        .unwrap();
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_source_request_invalid_isbn() {
        let req: SourceRequest =
            serde_json::from_str(r#"{"name": "Atomic Habits", "isbn13": "123"}"#).unwrap();
        assert!(req.validate().is_err());
    }
}
