//! User entity model and DTOs.

use roster_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A user row from the `users` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub email: String,
    pub created_at: Timestamp,
}

/// DTO for creating a new user.
///
/// `email` must already be validated and normalized (see
/// `roster_core::email::validate_email`).
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub email: String,
}
