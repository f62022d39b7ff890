use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use roster_db::HealthRow;
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
#[serde(untagged)]
pub enum HealthResponse {
    Healthy {
        /// Always `"ok"`.
        status: &'static str,
        /// Crate version from Cargo.toml.
        version: &'static str,
        /// Row returned by the probe query.
        db: HealthRow,
    },
    Unhealthy {
        /// Always `"error"`.
        status: &'static str,
        error: String,
    },
}

/// GET /api/health -- confirms the database answers a trivial query.
async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    match roster_db::health_check(&state.pool).await {
        Ok(db) => (
            StatusCode::OK,
            Json(HealthResponse::Healthy {
                status: "ok",
                version: env!("CARGO_PKG_VERSION"),
                db,
            }),
        ),
        Err(err) => {
            tracing::error!(error = %err, "Health check failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(HealthResponse::Unhealthy {
                    status: "error",
                    error: err.to_string(),
                }),
            )
        }
    }
}

/// Mount health check routes.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
