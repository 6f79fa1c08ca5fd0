//! Viewer extraction from gateway-provided headers.
//!
//! The upstream auth gateway authenticates the caller and forwards:
//!
//! - `X-User-Id`: the user id, absent for anonymous requests
//! - `X-Viewer-Permissions`: comma-separated permission names
//!
//! Unknown permission names are ignored.

use async_trait::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use http::HeaderName;

use crate::domain::access::{Permission, Viewer};
use crate::domain::foundation::UserId;

use super::error::ErrorResponse;

pub const USER_ID_HEADER: HeaderName = HeaderName::from_static("x-user-id");
pub const PERMISSIONS_HEADER: HeaderName = HeaderName::from_static("x-viewer-permissions");

/// The requesting viewer, immutable for the request.
#[derive(Debug, Clone)]
pub struct ViewerContext(pub Viewer);

/// Rejection for malformed viewer headers.
#[derive(Debug)]
pub struct InvalidViewer(&'static str);

impl IntoResponse for InvalidViewer {
    fn into_response(self) -> Response {
        let body = ErrorResponse::new("INVALID_VIEWER", self.0);
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

fn viewer_from_headers(headers: &HeaderMap) -> Result<Viewer, InvalidViewer> {
    let mut viewer = match headers.get(&USER_ID_HEADER) {
        None => Viewer::anonymous(),
        Some(value) => {
            let raw = value
                .to_str()
                .map_err(|_| InvalidViewer("X-User-Id must be visible ASCII"))?;
            let user_id = UserId::new(raw.trim())
                .map_err(|_| InvalidViewer("X-User-Id must not be blank"))?;
            Viewer::authenticated(user_id)
        }
    };

    if let Some(value) = headers.get(&PERMISSIONS_HEADER) {
        let raw = value
            .to_str()
            .map_err(|_| InvalidViewer("X-Viewer-Permissions must be visible ASCII"))?;
        for permission in raw.split(',').filter_map(Permission::parse) {
            viewer = viewer.with_permission(permission);
        }
    }

    Ok(viewer)
}

#[async_trait]
impl<S> FromRequestParts<S> for ViewerContext
where
    S: Send + Sync,
{
    type Rejection = InvalidViewer;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        viewer_from_headers(&parts.headers).map(ViewerContext)
    }
}
