//! Errors raised by venue and event listings.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | NotFound | 404 |
//! | ValidationFailed | 400 |
//! | Infrastructure | 500 |

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Which kind of geo-tagged entity an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeoEntityKind {
    Venue,
    Event,
}

impl GeoEntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            GeoEntityKind::Venue => "venue",
            GeoEntityKind::Event => "event",
        }
    }
}

/// Listing-specific errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ListingError {
    /// No entity with this slug.
    NotFound { kind: GeoEntityKind, slug: String },

    /// Query parameters were invalid or inconsistent.
    ValidationFailed { field: String, message: String },

    /// Infrastructure error.
    Infrastructure(String),
}

impl ListingError {
    pub fn not_found(kind: GeoEntityKind, slug: impl Into<String>) -> Self {
        ListingError::NotFound {
            kind,
            slug: slug.into(),
        }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ListingError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        ListingError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ListingError::NotFound {
                kind: GeoEntityKind::Venue,
                ..
            } => ErrorCode::VenueNotFound,
            ListingError::NotFound {
                kind: GeoEntityKind::Event,
                ..
            } => ErrorCode::EventNotFound,
            ListingError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            ListingError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ListingError::NotFound { kind, slug } => {
                format!("No {} found at '{}'", kind.as_str(), slug)
            }
            ListingError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            ListingError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for ListingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ListingError {}

impl From<DomainError> for ListingError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed => ListingError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => ListingError::Infrastructure(err.to_string()),
        }
    }
}

impl From<ValidationError> for ListingError {
    fn from(err: ValidationError) -> Self {
        ListingError::validation(err.field().to_string(), err.to_string())
    }
}
