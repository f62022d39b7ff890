//! Handlers for the `/users` resource.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use roster_core::email::validate_email;
use roster_core::error::CoreError;
use roster_core::types::DbId;
use roster_db::models::user::{CreateUser, User};
use roster_db::repositories::UserRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Message returned when the email is already registered.
pub const DUPLICATE_EMAIL_MESSAGE: &str = "Email already exists";

/// Message returned when the path id is not an integer.
pub const INVALID_ID_MESSAGE: &str = "Invalid id";

/// Request body for `POST /api/users`.
///
/// `email` is optional here so a missing field surfaces as a validation
/// error rather than a deserialization failure.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub email: Option<String>,
}

/// GET /api/users
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    let users = UserRepo::list(&state.pool).await?;
    Ok(Json(users))
}

/// POST /api/users
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<CreateUserRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<User>)> {
    let Json(input) = body.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let email = validate_email(input.email.as_deref())?;

    let user = match UserRepo::create(&state.pool, &CreateUser { email }).await {
        Ok(user) => user,
        Err(err) if roster_db::is_unique_violation(&err) => {
            tracing::warn!("Rejected duplicate email");
            return Err(AppError::Core(CoreError::Conflict(
                DUPLICATE_EMAIL_MESSAGE.to_string(),
            )));
        }
        Err(err) => return Err(err.into()),
    };

    tracing::info!(user_id = user.id, "User created");
    Ok((StatusCode::CREATED, Json(user)))
}

/// DELETE /api/users/{id}
pub async fn delete(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
) -> AppResult<StatusCode> {
    let Path(id) = id.map_err(|_| AppError::BadRequest(INVALID_ID_MESSAGE.to_string()))?;

    let deleted = UserRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(user_id = id, "User deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "User", id }))
    }
}
