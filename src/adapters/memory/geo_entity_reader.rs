//! In-memory implementation of the `GeoEntityReader` port.

use async_trait::async_trait;
use std::sync::{PoisonError, RwLock};

use crate::domain::foundation::{DomainError, Fetched, ListOptions};
use crate::domain::geo::{Event, GeoEntity, Venue};
use crate::ports::GeoEntityReader;

use super::{poisoned, window};

/// Geo entities in insertion order, which doubles as the storage order.
pub struct InMemoryGeoEntityReader<T> {
    entities: RwLock<Vec<T>>,
}

pub type InMemoryVenueReader = InMemoryGeoEntityReader<Venue>;
pub type InMemoryEventReader = InMemoryGeoEntityReader<Event>;

impl<T> Default for InMemoryGeoEntityReader<T> {
    fn default() -> Self {
        Self {
            entities: RwLock::new(Vec::new()),
        }
    }
}

impl<T> InMemoryGeoEntityReader<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, entity: T) {
        self.entities
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(entity);
    }
}

#[async_trait]
impl<T: GeoEntity> GeoEntityReader<T> for InMemoryGeoEntityReader<T> {
    async fn list(&self, options: ListOptions) -> Result<Fetched<T>, DomainError> {
        let entities = self.entities.read().map_err(poisoned)?;
        let total = entities.len() as u64;
        Ok(Fetched {
            items: window(entities.clone(), options.limit, options.offset),
            total,
        })
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<T>, DomainError> {
        let entities = self.entities.read().map_err(poisoned)?;
        Ok(entities.iter().find(|e| e.slug() == slug).cloned())
    }
}
