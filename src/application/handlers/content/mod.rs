//! Content handlers.
//!
//! ## Queries
//! - List visible news or blog posts with storage pagination
//! - Get a single item, gated by publication and tier

mod get_content;
mod list_content;

pub use get_content::{GetContentHandler, GetContentQuery};
pub use list_content::{ListContentHandler, ListContentQuery, ListContentResult};
