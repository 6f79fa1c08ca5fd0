//! ListGeoEntitiesHandler - Distance-aware venue and event listings.

use std::sync::Arc;

use tracing::debug;

use crate::domain::geo::{assemble_page, localize, GeoEntity, GeoQuery, ListingError, ListingPage, Located};
use crate::ports::GeoEntityReader;

/// Query for one page of venues or events.
#[derive(Debug, Clone)]
pub struct ListGeoEntitiesQuery {
    pub geo: GeoQuery,
    /// Overlay translations for this locale. `None` keeps stored values.
    pub locale: Option<String>,
}

/// Result of a geo listing, tagged by pagination strategy.
pub type ListGeoEntitiesResult<T> = ListingPage<Located<T>>;

/// Handler for venue and event listings.
///
/// Asks storage for one page or for the full eligible set, depending on the
/// query's strategy, then decorates, filters, sorts, and localizes.
pub struct ListGeoEntitiesHandler<T: GeoEntity> {
    reader: Arc<dyn GeoEntityReader<T>>,
}

impl<T: GeoEntity> ListGeoEntitiesHandler<T> {
    pub fn new(reader: Arc<dyn GeoEntityReader<T>>) -> Self {
        Self { reader }
    }

    pub async fn handle(
        &self,
        query: ListGeoEntitiesQuery,
    ) -> Result<ListGeoEntitiesResult<T>, ListingError> {
        let options = query.geo.list_options();
        let fetched = self.reader.list(options).await?;

        debug!(
            kind = T::KIND.as_str(),
            strategy = ?query.geo.strategy(),
            fetched = fetched.items.len(),
            storage_total = fetched.total,
            "Fetched geo listing candidates"
        );

        let page = assemble_page(fetched, &query.geo);

        Ok(match query.locale.as_deref() {
            Some(locale) => page.map(|located| located.map(|item| localize(&item, locale))),
            None => page,
        })
    }
}
