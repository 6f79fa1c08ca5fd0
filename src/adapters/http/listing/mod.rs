//! HTTP adapter for distance-aware venue and event listings.

pub mod dto;
mod handlers;
mod routes;

pub use routes::listing_routes;
