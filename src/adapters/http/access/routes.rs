//! Axum routes for viewer access.

use axum::routing::get;
use axum::Router;

use super::super::state::AppState;
use super::handlers::get_viewer_tier;

/// Viewer routes, mounted under `/api`.
pub fn access_routes() -> Router<AppState> {
    Router::new().route("/viewer/tier", get(get_viewer_tier))
}
