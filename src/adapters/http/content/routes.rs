//! Axum routes for news and blog endpoints.

use axum::routing::get;
use axum::Router;

use super::super::state::AppState;
use super::handlers::{get_blog_post, get_news, list_blog_posts, list_news};

/// Content routes, mounted under `/api`.
///
/// - `GET /news`, `GET /news/:slug`
/// - `GET /blog`, `GET /blog/:slug`
pub fn content_routes() -> Router<AppState> {
    Router::new()
        .route("/news", get(list_news))
        .route("/news/:slug", get(get_news))
        .route("/blog", get(list_blog_posts))
        .route("/blog/:slug", get(get_blog_post))
}
