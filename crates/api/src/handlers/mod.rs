//! Request handlers for the JSON API.
//!
//! Handlers delegate to the corresponding repository in `roster_db` and map
//! errors via [`AppError`](crate::error::AppError).

pub mod fallback;
pub mod users;
