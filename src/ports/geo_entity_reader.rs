//! Reader port for geo-tagged entities (venues and events).

use crate::domain::foundation::{DomainError, Fetched, ListOptions};
use crate::domain::geo::{Event, Venue};
use async_trait::async_trait;

/// Reader port shared by venues and events.
///
/// Storage knows nothing about distance. It applies `options` and reports the
/// number of eligible rows; distance filtering happens in the listing engine.
#[async_trait]
pub trait GeoEntityReader<T>: Send + Sync
where
    T: Send + 'static,
{
    /// Lists entities in a stable storage order.
    ///
    /// With `ListOptions::unpaginated()` every eligible row is returned.
    async fn list(&self, options: ListOptions) -> Result<Fetched<T>, DomainError>;

    /// Finds one entity by slug.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<T>, DomainError>;
}

/// Venue reader.
pub type VenueReader = dyn GeoEntityReader<Venue>;

/// Event reader.
pub type EventReader = dyn GeoEntityReader<Event>;
