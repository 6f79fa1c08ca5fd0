//! Venue and event listing handlers.
//!
//! ## Queries
//! - Distance-aware, localized listings of venues or events
//! - Single venue or event by slug

mod get_geo_entity;
mod list_geo_entities;

pub use get_geo_entity::{GetGeoEntityHandler, GetGeoEntityQuery};
pub use list_geo_entities::{ListGeoEntitiesHandler, ListGeoEntitiesQuery, ListGeoEntitiesResult};
