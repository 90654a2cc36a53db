//! User registration and account HTTP handlers.
//!
//! The user id always comes from the bearer token's subject claim; request
//! bodies carry only email and notification preferences.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use insights_core::{validate_email, FilterTag, User};

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::AppState;

/// Request body for registering or updating the calling user.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRequest {
    pub email: String,
    pub notification_enabled: bool,
    pub notification_filter_tags: Vec<FilterTag>,
}

impl UserRequest {
    fn into_user(self, user_id: String) -> User {
        User {
            id: user_id,
            email: self.email,
            notification_enabled: self.notification_enabled,
            notification_filter_tags: self.notification_filter_tags,
        }
    }
}

/// Register the calling user.
///
/// # Returns
/// - 201 Created on success
/// - 400 Bad Request if the email fails validation
/// - 409 Conflict if the id or email is already registered
pub async fn register_user(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(req): Json<UserRequest>,
) -> Result<StatusCode, ApiError> {
    validate_email(&req.email)?;
    state.users.create(&req.into_user(user_id)).await?;
    Ok(StatusCode::CREATED)
}

/// Fetch the calling user.
///
/// # Returns
/// - 200 OK with the user
/// - 404 Not Found if the caller is not registered
pub async fn get_user(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<User>, ApiError> {
    let user = state.users.get(&user_id).await?;
    Ok(Json(user))
}

/// Update the calling user's email and notification preferences.
///
/// # Returns
/// - 204 No Content on success
/// - 404 Not Found if the caller is not registered
/// - 409 Conflict if the new email already exists
pub async fn update_user(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(req): Json<UserRequest>,
) -> Result<StatusCode, ApiError> {
    validate_email(&req.email)?;
    state.users.update(&req.into_user(user_id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete the calling user's account.
///
/// # Returns
/// - 204 No Content on success
/// - 404 Not Found if the caller is not registered
pub async fn delete_user(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<StatusCode, ApiError> {
    state.users.delete(&user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
