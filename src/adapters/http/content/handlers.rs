//! HTTP handlers for news and blog endpoints.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

use crate::application::handlers::{GetContentQuery, ListContentQuery};
use crate::domain::content::ContentKind;
use crate::domain::foundation::PageRequest;

use super::super::error::ApiError;
use super::super::query::Query;
use super::super::state::AppState;
use super::super::viewer::ViewerContext;
use super::dto::{ContentDetailResponse, ContentPageResponse, PageParams};

async fn list(
    state: AppState,
    viewer: ViewerContext,
    kind: ContentKind,
    params: PageParams,
) -> Result<ContentPageResponse, ApiError> {
    let page = PageRequest::bounded(
        params.page.unwrap_or(1),
        params.page_size.unwrap_or(state.listing.default_page_size),
        state.listing.max_page_size,
    )?;
    let access = state.viewer_access(viewer.0).await?;

    let result = state
        .list_content_handler()
        .handle(ListContentQuery { kind, access, page })
        .await?;

    Ok(ContentPageResponse::from(result))
}

async fn get(
    state: AppState,
    viewer: ViewerContext,
    kind: ContentKind,
    slug: String,
) -> Result<ContentDetailResponse, ApiError> {
    let access = state.viewer_access(viewer.0).await?;

    let item = state
        .get_content_handler()
        .handle(GetContentQuery { kind, slug, access })
        .await?;

    Ok(ContentDetailResponse::from(item))
}

/// GET /api/news
pub async fn list_news(
    State(state): State<AppState>,
    viewer: ViewerContext,
    Query(params): Query<PageParams>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(list(state, viewer, ContentKind::News, params).await?))
}

/// GET /api/news/:slug
pub async fn get_news(
    State(state): State<AppState>,
    viewer: ViewerContext,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(get(state, viewer, ContentKind::News, slug).await?))
}

/// GET /api/blog
pub async fn list_blog_posts(
    State(state): State<AppState>,
    viewer: ViewerContext,
    Query(params): Query<PageParams>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(list(state, viewer, ContentKind::BlogPost, params).await?))
}

/// GET /api/blog/:slug
pub async fn get_blog_post(
    State(state): State<AppState>,
    viewer: ViewerContext,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(get(state, viewer, ContentKind::BlogPost, slug).await?))
}
