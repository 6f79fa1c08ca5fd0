//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (IDs, timestamps, pagination, errors)
//! - `access` - Access tiers, subscriptions, viewers, and gating rules
//! - `content` - Tier-gated news and blog posts
//! - `geo` - Venues and events with distance-aware listings and translations

pub mod access;
pub mod content;
pub mod foundation;
pub mod geo;
