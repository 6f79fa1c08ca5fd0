//! HTTP DTOs for venue and event listings.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{PageRequest, ValidationError};
use crate::domain::geo::{Coordinates, Event, GeoQuery, Located, Venue};

/// Query parameters accepted by `/api/venues` and `/api/events`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeoListParams {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub max_distance_km: Option<f64>,
    #[serde(default)]
    pub sort_by_distance: bool,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub locale: Option<String>,
}

impl GeoListParams {
    /// Reference point, validated. `lat` and `lng` come together or not at all.
    pub fn reference(&self) -> Result<Option<Coordinates>, ValidationError> {
        match (self.lat, self.lng) {
            (None, None) => Ok(None),
            (Some(lat), Some(lng)) => Coordinates::new(lat, lng).map(Some),
            (Some(_), None) => Err(ValidationError::missing_dependency("lat", "lng")),
            (None, Some(_)) => Err(ValidationError::missing_dependency("lng", "lat")),
        }
    }

    pub fn to_geo_query(
        &self,
        default_page_size: u32,
        max_page_size: u32,
    ) -> Result<GeoQuery, ValidationError> {
        let page = PageRequest::bounded(
            self.page.unwrap_or(1),
            self.page_size.unwrap_or(default_page_size),
            max_page_size,
        )?;
        GeoQuery::new(
            self.reference()?,
            self.max_distance_km,
            self.sort_by_distance,
            page,
        )
    }
}

/// Locale query parameter for the detail endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocaleParams {
    pub locale: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VenueResponse {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub description: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
}

impl From<Located<Venue>> for VenueResponse {
    fn from(located: Located<Venue>) -> Self {
        let venue = located.item;
        Self {
            id: venue.id.to_string(),
            slug: venue.slug,
            name: venue.name,
            description: venue.description,
            address: venue.address,
            city: venue.city,
            latitude: venue.coordinates.latitude(),
            longitude: venue.coordinates.longitude(),
            distance_km: located.distance_km,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventResponse {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub starts_at: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
}

impl From<Located<Event>> for EventResponse {
    fn from(located: Located<Event>) -> Self {
        let event = located.item;
        Self {
            id: event.id.to_string(),
            slug: event.slug,
            name: event.name,
            description: event.description,
            location: event.location,
            starts_at: event.starts_at.to_rfc3339(),
            latitude: event.coordinates.latitude(),
            longitude: event.coordinates.longitude(),
            distance_km: located.distance_km,
        }
    }
}

/// Wraps an entity fetched without a reference point.
pub fn unlocated<T>(item: T) -> Located<T> {
    Located {
        item,
        distance_km: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::geo::PaginationStrategy;

    #[test]
    fn lat_without_lng_is_rejected() {
        let params = GeoListParams {
            lat: Some(55.0),
            ..Default::default()
        };
        assert_eq!(params.reference().unwrap_err().field(), "lat");
    }

    #[test]
    fn out_of_range_reference_is_rejected() {
        let params = GeoListParams {
            lat: Some(91.0),
            lng: Some(0.0),
            ..Default::default()
        };
        assert_eq!(params.reference().unwrap_err().field(), "latitude");
    }

    #[test]
    fn page_size_above_max_is_rejected() {
        let params = GeoListParams {
            page_size: Some(101),
            ..Default::default()
        };
        assert_eq!(params.to_geo_query(20, 100).unwrap_err().field(), "page_size");
    }

    #[test]
    fn defaults_produce_storage_query() {
        let query = GeoListParams::default().to_geo_query(20, 100).unwrap();
        assert_eq!(query.strategy(), PaginationStrategy::Storage);
        assert_eq!(query.page().page_size(), 20);
    }
}
