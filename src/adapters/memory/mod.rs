//! In-memory reader adapters.
//!
//! Used by tests and by local runs without a database. Data is seeded
//! through `insert` methods and lost on restart.

mod content_reader;
mod geo_entity_reader;
mod subscription_reader;

pub use content_reader::InMemoryContentReader;
pub use geo_entity_reader::{InMemoryEventReader, InMemoryGeoEntityReader, InMemoryVenueReader};
pub use subscription_reader::InMemorySubscriptionReader;

use std::sync::PoisonError;

use crate::domain::foundation::{DomainError, ErrorCode};

fn poisoned<T>(_: PoisonError<T>) -> DomainError {
    DomainError::new(ErrorCode::InternalError, "In-memory store lock poisoned")
}

fn window<T>(items: Vec<T>, limit: Option<u64>, offset: Option<u64>) -> Vec<T> {
    let offset = offset.and_then(|o| usize::try_from(o).ok()).unwrap_or(0);
    let limit = limit.and_then(|l| usize::try_from(l).ok()).unwrap_or(usize::MAX);
    items.into_iter().skip(offset).take(limit).collect()
}
