//! Axum routes for venue and event listings.

use axum::routing::get;
use axum::Router;

use super::super::state::AppState;
use super::handlers::{get_event, get_venue, list_events, list_venues};

/// Listing routes, mounted under `/api`.
///
/// List endpoints accept `lat`, `lng`, `max_distance_km`, `sort_by_distance`,
/// `page`, `page_size`, and `locale`. Detail endpoints accept `locale`.
pub fn listing_routes() -> Router<AppState> {
    Router::new()
        .route("/venues", get(list_venues))
        .route("/venues/:slug", get(get_venue))
        .route("/events", get(list_events))
        .route("/events/:slug", get(get_event))
}
