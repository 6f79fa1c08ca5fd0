//! HTTP handlers for viewer access.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use super::super::error::ApiError;
use super::super::state::AppState;
use super::super::viewer::ViewerContext;
use super::dto::ViewerTierResponse;

/// GET /api/viewer/tier - Resolved tier of the caller
pub async fn get_viewer_tier(
    State(state): State<AppState>,
    ViewerContext(viewer): ViewerContext,
) -> Result<impl IntoResponse, ApiError> {
    let authenticated = !viewer.is_anonymous();
    let access = state.viewer_access(viewer).await?;
    Ok(Json(ViewerTierResponse::new(authenticated, access)))
}
