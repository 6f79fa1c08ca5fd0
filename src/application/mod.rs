//! Application layer - Queries and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Every handler here is a read-side query handler.

pub mod handlers;

pub use handlers::{
    GetContentHandler, GetContentQuery, GetGeoEntityHandler, GetGeoEntityQuery,
    ListContentHandler, ListContentQuery, ListGeoEntitiesHandler, ListGeoEntitiesQuery,
    ResolveViewerTierHandler, ResolveViewerTierQuery, ViewerAccess,
};
