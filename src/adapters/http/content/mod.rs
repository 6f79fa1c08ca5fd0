//! HTTP adapter for tier-gated news and blog posts.

pub mod dto;
mod handlers;
mod routes;

pub use routes::content_routes;
