//! Browser front end: a single page that lists, creates and deletes users
//! through the JSON API.

use axum::response::Html;
use axum::{routing::get, Router};

use crate::state::AppState;

/// The page is compiled into the binary.
const INDEX_HTML: &str = include_str!("../../assets/index.html");

/// GET /
async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Mount the UI at the root.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(index))
}
