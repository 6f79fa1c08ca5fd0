//! In-memory implementation of the `ContentReader` port.

use async_trait::async_trait;
use std::cmp::Reverse;
use std::sync::{PoisonError, RwLock};

use crate::domain::access::Visibility;
use crate::domain::content::{ContentKind, TieredContentItem};
use crate::domain::foundation::{DomainError, Fetched, ListOptions};
use crate::ports::ContentReader;

use super::{poisoned, window};

/// Content items filtered in process with [`Visibility::admits`].
#[derive(Default)]
pub struct InMemoryContentReader {
    items: RwLock<Vec<TieredContentItem>>,
}

impl InMemoryContentReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, item: TieredContentItem) {
        self.items
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(item);
    }
}

#[async_trait]
impl ContentReader for InMemoryContentReader {
    async fn list(
        &self,
        kind: ContentKind,
        visibility: Visibility,
        options: ListOptions,
    ) -> Result<Fetched<TieredContentItem>, DomainError> {
        let items = self.items.read().map_err(poisoned)?;
        let mut admitted: Vec<TieredContentItem> = items
            .iter()
            .filter(|item| item.kind == kind && visibility.admits(*item))
            .cloned()
            .collect();
        admitted.sort_by_key(|item| Reverse((item.published_at, item.created_at)));

        let total = admitted.len() as u64;
        Ok(Fetched {
            items: window(admitted, options.limit, options.offset),
            total,
        })
    }

    async fn find_by_slug(
        &self,
        kind: ContentKind,
        slug: &str,
    ) -> Result<Option<TieredContentItem>, DomainError> {
        let items = self.items.read().map_err(poisoned)?;
        Ok(items
            .iter()
            .find(|item| item.kind == kind && item.slug.as_str() == slug)
            .cloned())
    }
}
