//! Geo-tagged venues and events: distance, translation overlay, listings.

mod coordinates;
mod distance;
mod entities;
mod errors;
pub mod listing;
mod translation;

pub use coordinates::{Coordinates, GeoTagged};
pub use distance::{distance_km, EARTH_RADIUS_KM};
pub use entities::{Event, GeoEntity, Venue};
pub use errors::{GeoEntityKind, ListingError};
pub use listing::{
    assemble_page, DistancePage, GeoQuery, ListingPage, Located, PaginationStrategy,
};
pub use translation::{apply_translations, localize, Translatable, TranslatableField, Translations};
