//! Insight HTTP handlers.
//!
//! `lastModifiedDate` never appears in request bodies; the service stamps
//! it. A `sourceId`, if present, must reference one of the caller's own
//! sources; the repository enforces that before the write.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;

use insights_core::{validate_insight_fields, FilterTag, Insight};

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::handlers::IdResponse;
use crate::AppState;

/// Request body for creating or updating an insight.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightRequest {
    pub source_id: Option<i64>,
    #[serde(default)]
    pub filter_tags: Vec<FilterTag>,
    pub note: String,
    pub quote: Option<String>,
}

impl InsightRequest {
    fn validate(&self) -> Result<(), ApiError> {
        validate_insight_fields(&self.note, self.quote.as_deref())?;
        Ok(())
    }

    fn into_insight(self, id: i64, user_id: String) -> Insight {
        Insight {
            id,
            user_id,
            source_id: self.source_id,
            // Placeholder; the service stamps the real date.
            last_modified_date: NaiveDate::default(),
            filter_tags: self.filter_tags,
            note: self.note,
            quote: self.quote,
        }
    }
}

/// Create an insight owned by the calling user.
///
/// # Returns
/// - 201 Created with `{"id": <id>}`
/// - 400 Bad Request if field validation fails
/// - 404 Not Found if the caller is not registered, or if `sourceId` does
///   not reference one of the caller's sources
pub async fn create_insight(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(req): Json<InsightRequest>,
) -> Result<(StatusCode, Json<IdResponse>), ApiError> {
    req.validate()?;
    let id = state.insights.create(req.into_insight(0, user_id)).await?;
    Ok((StatusCode::CREATED, Json(IdResponse { id })))
}

/// List all insights owned by the calling user.
pub async fn list_insights(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<Insight>>, ApiError> {
    let insights = state.insights.list(&user_id).await?;
    Ok(Json(insights))
}

/// Update an insight owned by the calling user.
///
/// # Returns
/// - 202 Accepted on success
/// - 400 Bad Request if field validation fails
/// - 404 Not Found if no insight with this id belongs to the caller, or if
///   the new `sourceId` does not reference one of the caller's sources
pub async fn update_insight(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<i64>,
    Json(req): Json<InsightRequest>,
) -> Result<StatusCode, ApiError> {
    req.validate()?;
    state.insights.update(req.into_insight(id, user_id)).await?;
    Ok(StatusCode::ACCEPTED)
}

/// Delete an insight owned by the calling user.
///
/// # Returns
/// - 204 No Content on success
/// - 404 Not Found if no insight with this id belongs to the caller
pub async fn delete_insight(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.insights.delete(id, &user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
