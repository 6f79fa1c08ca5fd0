//! GetContentHandler - Query handler fetching one item by slug.

use std::sync::Arc;

use tracing::debug;

use crate::application::handlers::access::ViewerAccess;
use crate::domain::access::{evaluate, GateDecision};
use crate::domain::content::{ContentError, ContentKind, TieredContentItem};
use crate::ports::ContentReader;

/// Query to fetch a single item for a viewer.
#[derive(Debug, Clone)]
pub struct GetContentQuery {
    pub kind: ContentKind,
    pub slug: String,
    pub access: ViewerAccess,
}

/// Handler for single-item reads.
///
/// Drafts are reported as `NotFound` to non-managers so unpublished slugs
/// cannot be probed. Published items above the viewer's tier are `Forbidden`,
/// and the error carries the tiers only.
pub struct GetContentHandler {
    reader: Arc<dyn ContentReader>,
}

impl GetContentHandler {
    pub fn new(reader: Arc<dyn ContentReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self, query: GetContentQuery) -> Result<TieredContentItem, ContentError> {
        let item = self
            .reader
            .find_by_slug(query.kind, &query.slug)
            .await?
            .ok_or_else(|| ContentError::not_found(query.kind, &query.slug))?;

        match evaluate(&item, query.access.tier, query.access.manage_content) {
            GateDecision::Visible => Ok(item),
            GateDecision::Unpublished => {
                debug!(slug = %query.slug, "Hiding unpublished item");
                Err(ContentError::not_found(query.kind, query.slug))
            }
            GateDecision::InsufficientTier { required, actual } => {
                debug!(
                    slug = %query.slug,
                    required = required.rank(),
                    actual = actual.rank(),
                    "Viewer tier too low"
                );
                Err(ContentError::forbidden(required, actual))
            }
        }
    }
}
