//! Top-level router: API modules, health check, and tower-http layers.

use axum::http::HeaderValue;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::config::ServerConfig;

use super::access::access_routes;
use super::content::content_routes;
use super::listing::listing_routes;
use super::state::AppState;

/// GET /health - Liveness probe
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// API routes without server layers. Used directly by tests.
pub fn api_router(state: AppState) -> Router {
    let api = Router::new()
        .merge(content_routes())
        .merge(listing_routes())
        .merge(access_routes());

    Router::new()
        .route("/health", get(health))
        .nest("/api", api)
        .with_state(state)
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .into_iter()
        .filter_map(|origin| match HeaderValue::from_str(&origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    CorsLayer::new().allow_origin(AllowOrigin::list(origins))
}

/// Full application router with tracing, timeout, and CORS layers.
pub fn app_router(state: AppState, server: &ServerConfig) -> Router {
    api_router(state)
        .layer(cors_layer(server))
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(TraceLayer::new_for_http())
}
