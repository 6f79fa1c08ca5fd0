//! Content-specific error types.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | NotFound | 404 |
//! | Forbidden | 403 |
//! | Conflict | 409 |
//! | ValidationFailed | 400 |
//! | Infrastructure | 500 |

use crate::domain::access::AccessTier;
use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

use super::ContentKind;

/// Content-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    /// No item with this slug exists (or it is an unpublished draft).
    NotFound { kind: ContentKind, slug: String },

    /// The item exists but the viewer's tier is too low.
    ///
    /// Carries only the tiers involved, never the item itself.
    Forbidden {
        required: AccessTier,
        actual: AccessTier,
    },

    /// Uniqueness or in-use constraint violated.
    Conflict(String),

    /// Validation failed.
    ValidationFailed { field: String, message: String },

    /// Infrastructure error.
    Infrastructure(String),
}

impl ContentError {
    pub fn not_found(kind: ContentKind, slug: impl Into<String>) -> Self {
        ContentError::NotFound {
            kind,
            slug: slug.into(),
        }
    }

    pub fn forbidden(required: AccessTier, actual: AccessTier) -> Self {
        ContentError::Forbidden { required, actual }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        ContentError::Conflict(message.into())
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ContentError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        ContentError::Infrastructure(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            ContentError::NotFound { .. } => ErrorCode::ContentNotFound,
            ContentError::Forbidden { .. } => ErrorCode::Forbidden,
            ContentError::Conflict(_) => ErrorCode::Conflict,
            ContentError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            ContentError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    /// Returns a user-friendly error message.
    pub fn message(&self) -> String {
        match self {
            ContentError::NotFound { kind, slug } => format!("No {} found at '{}'", kind, slug),
            ContentError::Forbidden { required, .. } => {
                format!("This content requires {} or higher", required)
            }
            ContentError::Conflict(msg) => format!("Conflict: {}", msg),
            ContentError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            ContentError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for ContentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ContentError {}

impl From<DomainError> for ContentError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed => ContentError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            ErrorCode::Conflict => ContentError::Conflict(err.message),
            _ => ContentError::Infrastructure(err.to_string()),
        }
    }
}

impl From<ValidationError> for ContentError {
    fn from(err: ValidationError) -> Self {
        ContentError::validation(err.field().to_string(), err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forbidden_message_names_required_tier_only() {
        let err = ContentError::forbidden(AccessTier::new(2), AccessTier::new(0));
        assert_eq!(err.code(), ErrorCode::Forbidden);
        assert_eq!(err.message(), "This content requires tier 2 or higher");
    }

    #[test]
    fn not_found_message_includes_slug() {
        let err = ContentError::not_found(ContentKind::News, "pit-lane");
        assert!(err.message().contains("pit-lane"));
        assert_eq!(err.code(), ErrorCode::ContentNotFound);
    }

    #[test]
    fn database_errors_become_infrastructure() {
        let err: ContentError = DomainError::database("connection reset").into();
        assert!(matches!(err, ContentError::Infrastructure(_)));
    }

    #[test]
    fn validation_domain_errors_keep_field() {
        let err: ContentError = DomainError::validation("page", "must be positive").into();
        assert_eq!(
            err,
            ContentError::validation("page", "must be positive")
        );
    }

    #[test]
    fn conflict_maps_to_conflict_code() {
        assert_eq!(ContentError::conflict("slug taken").code(), ErrorCode::Conflict);
    }
}
