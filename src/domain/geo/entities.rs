//! Venues and events: the geo-tagged entities served by listings.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{EventId, Timestamp, VenueId};

use super::{Coordinates, GeoEntityKind, GeoTagged, Translatable, TranslatableField, Translations};

/// A listable geo-tagged entity with translatable text.
pub trait GeoEntity: GeoTagged + Translatable + Send + Sync + 'static {
    const KIND: GeoEntityKind;

    fn slug(&self) -> &str;
}

/// A track, garage, or meeting place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    pub id: VenueId,
    pub slug: String,
    pub name: String,
    pub description: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub coordinates: Coordinates,
    pub translations: Option<Translations>,
}

impl GeoTagged for Venue {
    fn coordinates(&self) -> Coordinates {
        self.coordinates
    }
}

impl GeoEntity for Venue {
    const KIND: GeoEntityKind = GeoEntityKind::Venue;

    fn slug(&self) -> &str {
        &self.slug
    }
}

impl Translatable for Venue {
    const FIELDS: &'static [TranslatableField] = &[
        TranslatableField::Name,
        TranslatableField::Description,
        TranslatableField::Address,
    ];

    fn translations(&self) -> Option<&Translations> {
        self.translations.as_ref()
    }

    fn set_field(&mut self, field: TranslatableField, value: String) {
        match field {
            TranslatableField::Name => self.name = value,
            TranslatableField::Description => self.description = Some(value),
            TranslatableField::Address => self.address = Some(value),
            TranslatableField::Location => {}
        }
    }
}

/// A dated gathering (track day, meet, rally stage) at a position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub slug: String,
    pub name: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub starts_at: Timestamp,
    pub coordinates: Coordinates,
    pub translations: Option<Translations>,
}

impl GeoTagged for Event {
    fn coordinates(&self) -> Coordinates {
        self.coordinates
    }
}

impl GeoEntity for Event {
    const KIND: GeoEntityKind = GeoEntityKind::Event;

    fn slug(&self) -> &str {
        &self.slug
    }
}

impl Translatable for Event {
    const FIELDS: &'static [TranslatableField] = &[
        TranslatableField::Name,
        TranslatableField::Description,
        TranslatableField::Location,
    ];

    fn translations(&self) -> Option<&Translations> {
        self.translations.as_ref()
    }

    fn set_field(&mut self, field: TranslatableField, value: String) {
        match field {
            TranslatableField::Name => self.name = value,
            TranslatableField::Description => self.description = Some(value),
            TranslatableField::Location => self.location = Some(value),
            TranslatableField::Address => {}
        }
    }
}
