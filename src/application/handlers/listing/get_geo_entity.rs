//! GetGeoEntityHandler - Fetches one venue or event by slug.

use std::sync::Arc;

use crate::domain::geo::{localize, GeoEntity, ListingError};
use crate::ports::GeoEntityReader;

/// Query for a single venue or event.
#[derive(Debug, Clone)]
pub struct GetGeoEntityQuery {
    pub slug: String,
    pub locale: Option<String>,
}

pub struct GetGeoEntityHandler<T: GeoEntity> {
    reader: Arc<dyn GeoEntityReader<T>>,
}

impl<T: GeoEntity> GetGeoEntityHandler<T> {
    pub fn new(reader: Arc<dyn GeoEntityReader<T>>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self, query: GetGeoEntityQuery) -> Result<T, ListingError> {
        let entity = self
            .reader
            .find_by_slug(&query.slug)
            .await?
            .ok_or_else(|| ListingError::not_found(T::KIND, &query.slug))?;

        Ok(match query.locale.as_deref() {
            Some(locale) => localize(&entity, locale),
            None => entity,
        })
    }
}
