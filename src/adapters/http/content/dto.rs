//! HTTP DTOs for news and blog endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::content::TieredContentItem;
use crate::domain::foundation::StoragePage;

/// Pagination query parameters.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

/// Listing entry; the body is only served by the single-item endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentSummaryResponse {
    pub id: String,
    pub kind: String,
    pub slug: String,
    pub title: String,
    pub excerpt: Option<String>,
    pub cover_image_url: Option<String>,
    pub min_tier: u8,
    pub published: bool,
    pub published_at: Option<String>,
}

impl From<TieredContentItem> for ContentSummaryResponse {
    fn from(item: TieredContentItem) -> Self {
        Self {
            id: item.id.to_string(),
            kind: item.kind.as_str().to_string(),
            slug: item.slug.to_string(),
            title: item.title,
            excerpt: item.excerpt,
            cover_image_url: item.cover_image_url,
            min_tier: item.min_tier.rank(),
            published: item.published,
            published_at: item.published_at.map(|t| t.to_rfc3339()),
        }
    }
}

/// Full item for the detail endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentDetailResponse {
    #[serde(flatten)]
    pub summary: ContentSummaryResponse,
    pub body: String,
    pub created_at: String,
}

impl From<TieredContentItem> for ContentDetailResponse {
    fn from(item: TieredContentItem) -> Self {
        let body = item.body.clone();
        let created_at = item.created_at.to_rfc3339();
        Self {
            summary: ContentSummaryResponse::from(item),
            body,
            created_at,
        }
    }
}

/// One page of content. `total` counts only items the viewer may see.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentPageResponse {
    pub items: Vec<ContentSummaryResponse>,
    pub page: u32,
    pub page_size: u32,
    pub total: u64,
    pub has_more: bool,
}

impl From<StoragePage<TieredContentItem>> for ContentPageResponse {
    fn from(page: StoragePage<TieredContentItem>) -> Self {
        let page = page.map(ContentSummaryResponse::from);
        Self {
            items: page.items,
            page: page.page,
            page_size: page.page_size,
            total: page.storage_total,
            has_more: page.has_more,
        }
    }
}
