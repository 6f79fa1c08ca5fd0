//! Content domain module.
//!
//! News items and blog posts gated by publication state and minimum tier.

mod errors;
mod item;

pub use errors::ContentError;
pub use item::{ContentKind, Slug, TieredContentItem};
