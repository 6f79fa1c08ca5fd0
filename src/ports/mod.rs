//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Reader Ports
//!
//! - `SubscriptionReader` - Current subscription of a viewer
//! - `ContentReader` - Tier-gated news and blog posts
//! - `GeoEntityReader` - Venues and events for distance-aware listings

mod content_reader;
mod geo_entity_reader;
mod subscription_reader;

pub use content_reader::ContentReader;
pub use geo_entity_reader::{EventReader, GeoEntityReader, VenueReader};
pub use subscription_reader::SubscriptionReader;
