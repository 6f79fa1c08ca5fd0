//! Paddock - tier-gated editorial content and geo-aware venue/event listings.
//!
//! Layers follow hexagonal architecture: `domain` types and pure services,
//! `ports` traits, `application` query handlers, and `adapters` for
//! PostgreSQL, in-memory storage, and HTTP.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
