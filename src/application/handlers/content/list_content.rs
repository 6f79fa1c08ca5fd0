//! ListContentHandler - Query handler listing visible news or blog posts.

use std::sync::Arc;

use tracing::debug;

use crate::application::handlers::access::ViewerAccess;
use crate::domain::access::Visibility;
use crate::domain::content::{ContentError, ContentKind, TieredContentItem};
use crate::domain::foundation::{PageRequest, StoragePage};
use crate::ports::ContentReader;

/// Query to list one kind of content for a viewer.
#[derive(Debug, Clone)]
pub struct ListContentQuery {
    pub kind: ContentKind,
    pub access: ViewerAccess,
    pub page: PageRequest,
}

/// Result of a content listing.
pub type ListContentResult = StoragePage<TieredContentItem>;

/// Handler for content listings.
///
/// Gating is pushed down to storage as a [`Visibility`] so pagination totals
/// only ever count rows the viewer may see.
pub struct ListContentHandler {
    reader: Arc<dyn ContentReader>,
}

impl ListContentHandler {
    pub fn new(reader: Arc<dyn ContentReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self, query: ListContentQuery) -> Result<ListContentResult, ContentError> {
        let visibility = Visibility::for_viewer(query.access.tier, query.access.manage_content);

        let fetched = self
            .reader
            .list(query.kind, visibility, query.page.to_list_options())
            .await?;

        debug!(
            kind = %query.kind,
            page = query.page.page(),
            returned = fetched.items.len(),
            total = fetched.total,
            "Listed content"
        );

        Ok(StoragePage::new(fetched.items, query.page, fetched.total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::access::AccessTier;
    use crate::domain::content::Slug;
    use crate::domain::foundation::{ContentId, DomainError, Fetched, ListOptions, Timestamp};
    use async_trait::async_trait;
    use std::sync::Mutex;

    // ════════════════════════════════════════════════════════════════════════════
    // Mock Implementation
    // ════════════════════════════════════════════════════════════════════════════

    struct MockContentReader {
        items: Vec<TieredContentItem>,
        fail_read: bool,
        last_visibility: Mutex<Option<Visibility>>,
    }

    impl MockContentReader {
        fn with_items(items: Vec<TieredContentItem>) -> Self {
            Self {
                items,
                fail_read: false,
                last_visibility: Mutex::new(None),
            }
        }

        fn failing() -> Self {
            Self {
                fail_read: true,
                ..Self::with_items(Vec::new())
            }
        }
    }

    #[async_trait]
    impl ContentReader for MockContentReader {
        async fn list(
            &self,
            kind: ContentKind,
            visibility: Visibility,
            options: ListOptions,
        ) -> Result<Fetched<TieredContentItem>, DomainError> {
            if self.fail_read {
                return Err(DomainError::database("Simulated read failure"));
            }
            *self.last_visibility.lock().unwrap() = Some(visibility);
            let admitted: Vec<_> = self
                .items
                .iter()
                .filter(|i| i.kind == kind && visibility.admits(*i))
                .cloned()
                .collect();
            let total = admitted.len() as u64;
            let offset = options.offset.unwrap_or(0) as usize;
            let limit = options.limit.map(|l| l as usize).unwrap_or(usize::MAX);
            Ok(Fetched {
                items: admitted.into_iter().skip(offset).take(limit).collect(),
                total,
            })
        }

        async fn find_by_slug(
            &self,
            _kind: ContentKind,
            _slug: &str,
        ) -> Result<Option<TieredContentItem>, DomainError> {
            Ok(None)
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Test Helpers
    // ════════════════════════════════════════════════════════════════════════════

    fn news(slug: &str, min_tier: u8, published: bool) -> TieredContentItem {
        TieredContentItem {
            id: ContentId::new(),
            kind: ContentKind::News,
            slug: Slug::new(slug).unwrap(),
            title: slug.to_string(),
            excerpt: None,
            body: String::new(),
            cover_image_url: None,
            min_tier: AccessTier::new(min_tier),
            published,
            published_at: None,
            created_at: Timestamp::now(),
        }
    }

    fn mixed_news() -> Vec<TieredContentItem> {
        vec![
            news("open-a", 0, true),
            news("basic-only", 1, true),
            news("open-b", 0, true),
            news("vip-only", 3, true),
            news("open-draft", 0, false),
        ]
    }

    fn query(access: ViewerAccess, page: u32, size: u32) -> ListContentQuery {
        ListContentQuery {
            kind: ContentKind::News,
            access,
            page: PageRequest::new(page, size).unwrap(),
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn tier_zero_viewer_sees_only_open_published_items() {
        let handler = ListContentHandler::new(Arc::new(MockContentReader::with_items(mixed_news())));

        let page = handler.handle(query(ViewerAccess::anonymous(), 1, 10)).await.unwrap();

        assert_eq!(page.storage_total, 2);
        let slugs: Vec<_> = page.items.iter().map(|i| i.slug.as_str()).collect();
        assert_eq!(slugs, vec!["open-a", "open-b"]);
    }

    #[tokio::test]
    async fn two_open_of_five_published_items_are_listed_for_tier_zero() {
        let items = vec![
            news("open-a", 0, true),
            news("basic-a", 1, true),
            news("open-b", 0, true),
            news("advanced-a", 2, true),
            news("vip-a", 3, true),
        ];
        let handler = ListContentHandler::new(Arc::new(MockContentReader::with_items(items)));

        let page = handler.handle(query(ViewerAccess::anonymous(), 1, 10)).await.unwrap();

        assert_eq!(page.storage_total, 2);
        assert_eq!(page.items.len(), 2);
        assert!(page.items.iter().all(|i| i.min_tier == AccessTier::OPEN));
        assert!(!page.has_more);
    }

    #[tokio::test]
    async fn tier_is_pushed_down_as_visibility() {
        let reader = Arc::new(MockContentReader::with_items(mixed_news()));
        let handler = ListContentHandler::new(reader.clone());
        let access = ViewerAccess {
            tier: AccessTier::new(1),
            manage_content: false,
        };

        let page = handler.handle(query(access, 1, 10)).await.unwrap();

        assert_eq!(page.storage_total, 3);
        assert_eq!(
            *reader.last_visibility.lock().unwrap(),
            Some(Visibility::PublishedUpTo {
                max_tier: AccessTier::new(1)
            })
        );
    }

    #[tokio::test]
    async fn manager_sees_drafts_and_gated_items() {
        let handler = ListContentHandler::new(Arc::new(MockContentReader::with_items(mixed_news())));
        let access = ViewerAccess {
            tier: AccessTier::OPEN,
            manage_content: true,
        };

        let page = handler.handle(query(access, 1, 10)).await.unwrap();

        assert_eq!(page.storage_total, 5);
    }

    #[tokio::test]
    async fn pagination_applies_after_gating() {
        let handler = ListContentHandler::new(Arc::new(MockContentReader::with_items(mixed_news())));

        let page = handler.handle(query(ViewerAccess::anonymous(), 2, 1)).await.unwrap();

        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].slug.as_str(), "open-b");
        assert!(!page.has_more);
    }

    #[tokio::test]
    async fn read_failure_is_infrastructure() {
        let handler = ListContentHandler::new(Arc::new(MockContentReader::failing()));

        let result = handler.handle(query(ViewerAccess::anonymous(), 1, 10)).await;

        assert!(matches!(result, Err(ContentError::Infrastructure(_))));
    }
}
