//! Access handlers.
//!
//! ## Queries
//! - Resolve the requesting viewer's tier and management capability

mod resolve_viewer_tier;

pub use resolve_viewer_tier::{ResolveViewerTierHandler, ResolveViewerTierQuery, ViewerAccess};
