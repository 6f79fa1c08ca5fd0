//! Application handlers.
//!
//! Query handlers that orchestrate domain services over reader ports.

pub mod access;
pub mod content;
pub mod listing;

pub use access::{ResolveViewerTierHandler, ResolveViewerTierQuery, ViewerAccess};
pub use content::{
    GetContentHandler, GetContentQuery, ListContentHandler, ListContentQuery, ListContentResult,
};
pub use listing::{
    GetGeoEntityHandler, GetGeoEntityQuery, ListGeoEntitiesHandler, ListGeoEntitiesQuery,
    ListGeoEntitiesResult,
};
