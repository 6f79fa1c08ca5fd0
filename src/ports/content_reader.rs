//! Content reader port (read side).
//!
//! Listing queries receive a [`Visibility`] so the publication and tier
//! predicates are applied by storage, not after the page has been cut.

use crate::domain::access::Visibility;
use crate::domain::content::{ContentKind, TieredContentItem};
use crate::domain::foundation::{DomainError, Fetched, ListOptions};
use async_trait::async_trait;

/// Reader port for news and blog posts.
#[async_trait]
pub trait ContentReader: Send + Sync {
    /// Lists items of `kind` admitted by `visibility`, newest first.
    ///
    /// `Fetched::total` counts every admitted row, ignoring `options`.
    async fn list(
        &self,
        kind: ContentKind,
        visibility: Visibility,
        options: ListOptions,
    ) -> Result<Fetched<TieredContentItem>, DomainError>;

    /// Finds an item by slug regardless of publication or tier.
    ///
    /// Gating is the caller's decision; this only answers "does it exist".
    async fn find_by_slug(
        &self,
        kind: ContentKind,
        slug: &str,
    ) -> Result<Option<TieredContentItem>, DomainError>;
}
