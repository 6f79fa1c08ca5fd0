//! HTTP adapter for viewer access resolution.

pub mod dto;
mod handlers;
mod routes;

pub use routes::access_routes;
