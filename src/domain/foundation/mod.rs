//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, pagination, and error types
//! that form the vocabulary of the paddock domain.

mod errors;
mod ids;
mod pagination;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{ContentId, EventId, UserId, VenueId};
pub use pagination::{Fetched, ListOptions, PageRequest, StoragePage};
pub use timestamp::Timestamp;
