//! Error responses shared by every HTTP module.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::domain::content::ContentError;
use crate::domain::foundation::{ErrorCode, ValidationError};
use crate::domain::geo::ListingError;

/// JSON error body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Stable error code for programmatic handling.
    pub code: String,
    /// Human-readable message.
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Module errors surfaced through HTTP.
#[derive(Debug)]
pub enum ApiError {
    Content(ContentError),
    Listing(ListingError),
}

impl From<ContentError> for ApiError {
    fn from(err: ContentError) -> Self {
        ApiError::Content(err)
    }
}

impl From<ListingError> for ApiError {
    fn from(err: ListingError) -> Self {
        ApiError::Listing(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Listing(err.into())
    }
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::ValidationFailed => StatusCode::BAD_REQUEST,
        ErrorCode::ContentNotFound | ErrorCode::VenueNotFound | ErrorCode::EventNotFound => {
            StatusCode::NOT_FOUND
        }
        ErrorCode::Forbidden => StatusCode::FORBIDDEN,
        ErrorCode::Conflict => StatusCode::CONFLICT,
        ErrorCode::DatabaseError | ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (code, message) = match &self {
            ApiError::Content(err) => (err.code(), err.message()),
            ApiError::Listing(err) => (err.code(), err.message()),
        };
        let status = status_for(code);

        let body = if status.is_server_error() {
            error!(error = %message, "Request failed");
            ErrorResponse::new(ErrorCode::InternalError.to_string(), "Internal server error")
        } else {
            ErrorResponse::new(code.to_string(), message)
        };
        (status, Json(body)).into_response()
    }
}
