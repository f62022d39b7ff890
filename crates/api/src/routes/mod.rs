pub mod health;
pub mod ui;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the JSON API router (mounted at `/api` by the app builder).
///
/// ```text
/// GET    /health        -> liveness probe (database round trip)
/// /users/...            -> user CRUD (see users::router)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/users", users::router())
}
